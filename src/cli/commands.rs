use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ut", about = concat!("[*] unitrack v", env!("CARGO_PKG_VERSION"), " - track your university applications"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List programs and their progress
    List(ListArgs),
    /// Show one program's steps and bonus tasks
    Show(ShowArgs),
    /// Set a step's status (todo, in-progress, complete)
    Status(StatusArgs),
    /// Cycle a step's status (todo → in-progress → complete → todo)
    Cycle(CycleArgs),
    /// Set a bonus task's status
    Bonus(BonusArgs),
    /// Show the chronological timeline, or one program's task list
    Timeline(TimelineArgs),
    /// Show dashboard statistics
    Stats(StatsArgs),
    /// List roadmap groupings and how many programs match each
    Roadmaps,
    /// List previously generated roadmap snapshots
    History,
    /// Request program recommendations for a student profile
    Recommend(RecommendArgs),
    /// Remove all stored programs and roadmaps
    Clear(ClearArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by roadmap id (e.g. rm-cs)
    #[arg(long)]
    pub roadmap: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Program id
    pub program: String,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Program id
    pub program: String,
    /// Step id
    pub step: String,
    /// New status: todo, in-progress, complete
    pub status: String,
}

#[derive(Args)]
pub struct CycleArgs {
    /// Program id
    pub program: String,
    /// Step id
    pub step: String,
}

#[derive(Args)]
pub struct BonusArgs {
    /// Bonus task id
    pub task: String,
    /// New status: todo, in-progress, complete
    pub status: String,
    /// Program the task belongs to (omit for a global task)
    #[arg(long)]
    pub program: Option<String>,
}

#[derive(Args)]
pub struct TimelineArgs {
    /// Pin one program: its steps and bonus tasks in authored order
    #[arg(long)]
    pub pin: Option<String>,
    /// Filter by roadmap id (chronological mode only)
    #[arg(long)]
    pub roadmap: Option<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Filter by roadmap id
    #[arg(long)]
    pub roadmap: Option<String>,
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Path to a JSON student profile (the /api/recommend request body)
    #[arg(long)]
    pub profile: String,
    /// How many candidates to print
    #[arg(long, default_value_t = 6)]
    pub top: usize,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}
