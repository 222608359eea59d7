use std::io::{self, Write};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::read_config;
use crate::io::repository::JsonDirRepository;
use crate::io::resolve_data_dir;
use crate::model::roadmap::StudentProfile;
use crate::model::status::TaskStatus;
use crate::ops::store::{BonusScope, ProgramStore};
use crate::ops::timeline;
use crate::recommend::{MAX_CANDIDATES, RecommendClient};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let mut store = ProgramStore::open(Box::new(JsonDirRepository::new(&data_dir)));

    // main launches the TUI when there is no subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::List(args) => cmd_list(&mut store, args, json),
        Commands::Show(args) => cmd_show(&store, args, json),
        Commands::Status(args) => cmd_status(&mut store, args),
        Commands::Cycle(args) => cmd_cycle(&mut store, args),
        Commands::Bonus(args) => cmd_bonus(&mut store, args),
        Commands::Timeline(args) => cmd_timeline(&mut store, args, json),
        Commands::Stats(args) => cmd_stats(&mut store, args, json),
        Commands::Roadmaps => cmd_roadmaps(&store, json),
        Commands::History => cmd_history(&store, json),
        Commands::Recommend(args) => cmd_recommend(&data_dir, args, json),
        Commands::Clear(args) => cmd_clear(&mut store, args),
    }
}

fn parse_status(text: &str) -> Result<TaskStatus, String> {
    match text {
        "todo" => Ok(TaskStatus::Todo),
        "in-progress" => Ok(TaskStatus::InProgress),
        "complete" | "done" => Ok(TaskStatus::Complete),
        other => Err(format!(
            "unknown status '{other}' (expected todo, in-progress, complete)"
        )),
    }
}

/// Apply a one-shot roadmap filter for read commands
fn apply_roadmap_filter(
    store: &mut ProgramStore,
    roadmap: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(id) = roadmap {
        if !store.roadmaps().iter().any(|r| r.id == id) {
            return Err(format!("unknown roadmap '{id}' (see `ut roadmaps`)").into());
        }
        store.select_roadmap(id);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(
    store: &mut ProgramStore,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_roadmap_filter(store, args.roadmap.as_deref())?;
    let programs = store.displayed_programs();

    if json {
        let out: Vec<ProgramJson> = programs.iter().map(|p| ProgramJson::from(*p)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if programs.is_empty() {
        println!("no programs (run the intake form in the TUI, or `ut recommend`)");
        return Ok(());
    }
    for program in programs {
        println!("{}", program_line(program));
    }
    Ok(())
}

fn cmd_show(
    store: &ProgramStore,
    args: ShowArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(program) = store.program(&args.program) else {
        return Err(format!("program not found: {}", args.program).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&ProgramJson::from(program))?);
        return Ok(());
    }

    println!("{}", program_line(program));
    for (i, step) in program.steps.iter().enumerate() {
        println!("{}", step_line(i, step));
    }
    if !program.bonus_tasks.is_empty() {
        println!("  bonus:");
        for task in &program.bonus_tasks {
            println!("    [{}] {}  {}", task.status.label(), task.id, task.title);
        }
    }
    Ok(())
}

fn cmd_timeline(
    store: &mut ProgramStore,
    args: TimelineArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = chrono::Local::now().date_naive();
    let entries = if let Some(pin) = &args.pin {
        let Some(program) = store.program(pin) else {
            return Err(format!("program not found: {pin}").into());
        };
        timeline::pinned(program, today)
    } else {
        apply_roadmap_filter(store, args.roadmap.as_deref())?;
        timeline::chronological(&store.displayed_programs(), today)
    };

    if json {
        let out: Vec<TimelineEntryJson> = entries.iter().map(TimelineEntryJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for entry in &entries {
        let date = entry
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "          ".into());
        println!(
            "{}  {:<12}  {}  ({} - {})",
            date, entry.day_label, entry.title, entry.university_name, entry.program_name
        );
    }
    Ok(())
}

fn cmd_stats(
    store: &mut ProgramStore,
    args: StatsArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_roadmap_filter(store, args.roadmap.as_deref())?;
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&StatsJson::from(stats))?);
        return Ok(());
    }

    println!("programs:     {}", stats.total_programs);
    println!("steps:        {}", stats.total_steps);
    println!("  complete:   {}", stats.complete_steps);
    println!("  in-progress:{}", stats.in_progress_steps);
    println!("  todo:       {}", stats.todo_steps);
    println!("progress:     {}%", stats.overall_progress);
    Ok(())
}

fn cmd_roadmaps(store: &ProgramStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.roadmaps())?);
        return Ok(());
    }
    for roadmap in store.roadmaps() {
        let matching = roadmap
            .program_ids
            .iter()
            .filter(|id| store.program(id).is_some())
            .count();
        println!(
            "{}  {}  [{}]  {} program(s)",
            roadmap.id,
            roadmap.name,
            roadmap.category.label(),
            matching
        );
    }
    Ok(())
}

fn cmd_history(store: &ProgramStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let history = store.history();
    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }
    if history.is_empty() {
        println!("no roadmaps generated yet");
        return Ok(());
    }
    for snapshot in &history {
        println!(
            "{}  {}  {} program(s)",
            snapshot.id,
            snapshot.created_at.format("%Y-%m-%d %H:%M"),
            snapshot.programs.len()
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_status(store: &mut ProgramStore, args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    if store.program(&args.program).is_none() {
        return Err(format!("program not found: {}", args.program).into());
    }
    let status = parse_status(&args.status)?;
    store.set_step_status(&args.program, &args.step, status)?;
    match store
        .program(&args.program)
        .and_then(|p| p.steps.iter().find(|s| s.id == args.step))
    {
        Some(step) => println!("{} -> {}", step.id, step.status.label()),
        None => return Err(format!("step not found: {}", args.step).into()),
    }
    Ok(())
}

fn cmd_cycle(store: &mut ProgramStore, args: CycleArgs) -> Result<(), Box<dyn std::error::Error>> {
    store.cycle_step_status(&args.program, &args.step)?;
    match store
        .program(&args.program)
        .and_then(|p| p.steps.iter().find(|s| s.id == args.step))
    {
        Some(step) => println!("{} -> {}", step.id, step.status.label()),
        None => return Err(format!("step not found: {}/{}", args.program, args.step).into()),
    }
    Ok(())
}

fn cmd_bonus(store: &mut ProgramStore, args: BonusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let status = parse_status(&args.status)?;
    let scope = match args.program.as_deref() {
        Some(program_id) => BonusScope::Program(program_id),
        None => BonusScope::Global,
    };
    store.set_bonus_status(scope, &args.task, status)?;

    let task = match scope {
        BonusScope::Global => store.global_bonus().iter().find(|t| t.id == args.task),
        BonusScope::Program(id) => store
            .program(id)
            .and_then(|p| p.bonus_tasks.iter().find(|t| t.id == args.task)),
    };
    match task {
        Some(task) => println!("{} -> {}", task.id, task.status.label()),
        None => return Err(format!("bonus task not found: {}", args.task).into()),
    }
    Ok(())
}

fn cmd_recommend(
    data_dir: &std::path::Path,
    args: RecommendArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.profile)
        .map_err(|e| format!("could not read profile {}: {e}", args.profile))?;
    let profile: StudentProfile = serde_json::from_str(&text)
        .map_err(|e| format!("could not parse profile {}: {e}", args.profile))?;

    let config = read_config(data_dir);
    let client = RecommendClient::new(config.api.endpoint);
    let mut rankings = client.recommend(&profile)?;
    rankings.truncate(args.top.min(MAX_CANDIDATES).max(1));

    if json {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
        return Ok(());
    }
    for (i, r) in rankings.iter().enumerate() {
        println!(
            "{}. {} - {}  (score {:.2}, academic {:.2}, interest {:.2}, ec {:.2}, coop {:.2})",
            i + 1,
            r.university,
            r.program,
            r.score,
            r.breakdown.academic,
            r.breakdown.interest,
            r.breakdown.ec,
            r.breakdown.coop_fit
        );
    }
    Ok(())
}

fn cmd_clear(store: &mut ProgramStore, args: ClearArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.force {
        print!("remove all programs, bonus state, and roadmaps? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("aborted");
            return Ok(());
        }
    }
    store.clear()?;
    println!("cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_parse() {
        assert_eq!(parse_status("todo").unwrap(), TaskStatus::Todo);
        assert_eq!(parse_status("in-progress").unwrap(), TaskStatus::InProgress);
        assert_eq!(parse_status("complete").unwrap(), TaskStatus::Complete);
        assert_eq!(parse_status("done").unwrap(), TaskStatus::Complete);
        assert!(parse_status("Done").is_err());
    }
}
