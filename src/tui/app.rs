use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::repository::JsonDirRepository;
use crate::io::resolve_data_dir;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::model::roadmap::{RoadmapSnapshot, StudentProfile};
use crate::ops::store::ProgramStore;
use crate::ops::timeline::{self, TimelineEntry};
use crate::recommend::{
    MAX_CANDIDATES, ProgramRanking, RecommendError, program_from_ranking, spawn_recommend,
};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Program cards + bonus sidebar + timeline strip
    Dashboard,
    /// Single program pinned to the top of its own timeline
    Focused,
    /// Student profile form
    Intake,
    /// Ranked candidates returned by the recommendation service
    Selection,
}

/// Which dashboard pane holds the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Programs,
    Bonus,
    Timeline,
}

/// What a status-pick popup is aimed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTarget {
    Step { program_id: String, step_id: String },
    /// `program_id: None` means the global bonus list
    Bonus {
        program_id: Option<String>,
        task_id: String,
    },
}

/// The explicit status-pick popup (the alternative to cycling)
#[derive(Debug, Clone)]
pub struct StatusMenu {
    pub target: StatusTarget,
    pub cursor: usize,
}

/// Intake form field indices (order matches `IntakeForm::new`)
pub const FIELD_GRADE: usize = 0;
pub const FIELD_AVERAGE: usize = 1;
pub const FIELD_COOP: usize = 2;
pub const FIELD_ECS: usize = 3;
pub const FIELD_MAJORS: usize = 4;
pub const FIELD_COURSES: usize = 5;
pub const FIELD_DEADLINE: usize = 6;

#[derive(Debug, Clone)]
pub struct IntakeField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
}

/// Student profile form state. Free-text fields parse on submit; a parse
/// failure keeps the form up with the message shown inline.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub fields: Vec<IntakeField>,
    pub cursor: usize,
    pub editing: bool,
    pub error: Option<String>,
}

impl IntakeForm {
    pub fn new(today: NaiveDate) -> Self {
        let deadline = default_deadline(today);
        let field = |label, hint, value: String| IntakeField { label, hint, value };
        IntakeForm {
            fields: vec![
                field("Grade level", "9-12", "12".to_string()),
                field("Average", "percent, e.g. 88.5", String::new()),
                field("Wants co-op", "Space toggles", "no".to_string()),
                field(
                    "Extracurriculars",
                    "name:level pairs, e.g. Robotics:3, Debate:2",
                    String::new(),
                ),
                field(
                    "Major interests",
                    "comma separated, e.g. computer science, math",
                    String::new(),
                ),
                field(
                    "Courses taken",
                    "code:grade pairs, e.g. MHF4U:94, ENG4U:88",
                    String::new(),
                ),
                field("Deadline", "YYYY-MM-DD", deadline.format("%Y-%m-%d").to_string()),
            ],
            cursor: 0,
            editing: false,
            error: None,
        }
    }

    pub fn toggle_coop(&mut self) {
        let value = &mut self.fields[FIELD_COOP].value;
        *value = if value == "yes" { "no".into() } else { "yes".into() };
    }

    /// Parse the form into a profile plus the application deadline
    pub fn parse(&self) -> Result<(StudentProfile, NaiveDate), String> {
        let grade_level: u8 = self.fields[FIELD_GRADE]
            .value
            .trim()
            .parse()
            .map_err(|_| "grade level must be a number".to_string())?;
        if !(9..=12).contains(&grade_level) {
            return Err("grade level must be 9-12".to_string());
        }
        let average: f64 = self.fields[FIELD_AVERAGE]
            .value
            .trim()
            .parse()
            .map_err(|_| "average must be a number".to_string())?;
        if !(0.0..=100.0).contains(&average) {
            return Err("average must be 0-100".to_string());
        }
        let wants_coop = self.fields[FIELD_COOP].value == "yes";
        let extra_curriculars = parse_pairs(&self.fields[FIELD_ECS].value, |level| {
            let level: u8 = level.parse().ok()?;
            (1..=4).contains(&level).then_some(level)
        })
        .ok_or_else(|| "extracurriculars must be name:level with level 1-4".to_string())?;
        let major_interests = self.fields[FIELD_MAJORS]
            .value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let courses_taken = parse_pairs(&self.fields[FIELD_COURSES].value, |grade| {
            grade.parse::<f64>().ok()
        })
        .ok_or_else(|| "courses must be code:grade pairs".to_string())?;
        let deadline =
            NaiveDate::parse_from_str(self.fields[FIELD_DEADLINE].value.trim(), "%Y-%m-%d")
                .map_err(|_| "deadline must be YYYY-MM-DD".to_string())?;

        Ok((
            StudentProfile {
                grade_level,
                average,
                wants_coop,
                extra_curriculars,
                major_interests,
                courses_taken,
            },
            deadline,
        ))
    }
}

/// Parse "name:value, name:value" text into pairs. Empty input is an empty
/// list; any malformed pair fails the whole field.
fn parse_pairs<T>(text: &str, parse_value: impl Fn(&str) -> Option<T>) -> Option<Vec<(String, T)>> {
    let mut pairs = Vec::new();
    for chunk in text.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let (name, value) = chunk.split_once(':')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        pairs.push((name.to_string(), parse_value(value.trim())?));
    }
    Some(pairs)
}

/// Mid-January of the next application cycle
fn default_deadline(today: NaiveDate) -> NaiveDate {
    let jan15 = NaiveDate::from_ymd_opt(today.year(), 1, 15).unwrap_or(today);
    if jan15 > today {
        jan15
    } else {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 15).unwrap_or(today)
    }
}

/// Candidate picker state after a successful recommendation call
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub rankings: Vec<ProgramRanking>,
    pub selected: Vec<bool>,
    pub cursor: usize,
}

impl SelectionState {
    pub fn new(mut rankings: Vec<ProgramRanking>) -> Self {
        rankings.truncate(MAX_CANDIDATES);
        let selected = vec![false; rankings.len()];
        SelectionState {
            rankings,
            selected,
            cursor: 0,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }
}

/// Main application state
pub struct App {
    pub store: ProgramStore,
    pub data_dir: PathBuf,
    pub theme: Theme,
    /// Recommendation service base URL (from config.toml)
    pub endpoint: String,
    pub view: View,
    pub pane: Pane,
    pub should_quit: bool,
    pub show_help: bool,
    /// Cursor into `displayed_programs()`
    pub program_cursor: usize,
    /// Cursor into the global bonus sidebar
    pub bonus_cursor: usize,
    /// Cursor into the chronological timeline strip
    pub timeline_cursor: usize,
    /// Cursor into the focused program's pinned rows
    pub focused_cursor: usize,
    pub status_menu: Option<StatusMenu>,
    /// Roadmap picker popup cursor
    pub roadmap_menu: Option<usize>,
    pub confirm_clear: bool,
    /// One-line message in the status row, cleared on the next keypress
    pub notice: Option<String>,
    pub intake: IntakeForm,
    pub selection: Option<SelectionState>,
    /// In-flight recommendation call; polled by the event loop
    pub pending: Option<mpsc::Receiver<Result<Vec<ProgramRanking>, RecommendError>>>,
    /// Profile and deadline the in-flight call was made with
    pub pending_input: Option<(StudentProfile, NaiveDate)>,
    pub today: NaiveDate,
}

impl App {
    pub fn new(store: ProgramStore, theme: Theme, endpoint: String, data_dir: PathBuf) -> Self {
        let today = chrono::Local::now().date_naive();
        // First run lands on the intake form; anything saved goes to the dashboard
        let initial_view = if store.programs().is_empty() {
            View::Intake
        } else {
            View::Dashboard
        };
        App {
            store,
            data_dir,
            theme,
            endpoint,
            view: initial_view,
            pane: Pane::Programs,
            should_quit: false,
            show_help: false,
            program_cursor: 0,
            bonus_cursor: 0,
            timeline_cursor: 0,
            focused_cursor: 0,
            status_menu: None,
            roadmap_menu: None,
            confirm_clear: false,
            notice: None,
            intake: IntakeForm::new(today),
            selection: None,
            pending: None,
            pending_input: None,
            today,
        }
    }

    /// Timeline entries for the dashboard strip (the displayed subset)
    pub fn timeline_entries(&self) -> Vec<TimelineEntry> {
        timeline::chronological(&self.store.displayed_programs(), self.today)
    }

    /// Rows for the focused view (the focused program's own timeline)
    pub fn focused_rows(&self) -> Vec<TimelineEntry> {
        match self.store.focused_program() {
            Some(program) => timeline::pinned(program, self.today),
            None => Vec::new(),
        }
    }

    /// Pull cursors back in range after the collections change
    pub fn clamp_cursors(&mut self) {
        let programs = self.store.displayed_programs().len();
        self.program_cursor = self.program_cursor.min(programs.saturating_sub(1));
        let bonus = self.store.global_bonus().len();
        self.bonus_cursor = self.bonus_cursor.min(bonus.saturating_sub(1));
        let entries = self.timeline_entries().len();
        self.timeline_cursor = self.timeline_cursor.min(entries.saturating_sub(1));
        let rows = self.focused_rows().len();
        self.focused_cursor = self.focused_cursor.min(rows.saturating_sub(1));
    }

    /// Kick off a recommendation call from the intake form
    pub fn submit_intake(&mut self) {
        match self.intake.parse() {
            Ok((profile, deadline)) => {
                self.intake.error = None;
                self.pending = Some(spawn_recommend(self.endpoint.clone(), profile.clone()));
                self.pending_input = Some((profile, deadline));
            }
            Err(message) => self.intake.error = Some(message),
        }
    }

    /// Poll the in-flight recommendation call, if any
    pub fn poll_pending(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(Ok(rankings)) => {
                self.pending = None;
                if rankings.is_empty() {
                    self.intake.error = Some("no programs matched the profile".to_string());
                    return;
                }
                self.selection = Some(SelectionState::new(rankings));
                self.view = View::Selection;
            }
            Ok(Err(err)) => {
                self.pending = None;
                // The service's own message, shown as-is
                self.intake.error = Some(err.to_string());
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending = None;
                self.intake.error = Some("recommendation worker exited".to_string());
            }
        }
    }

    /// Turn the checked candidates into a fresh roadmap and adopt it
    pub fn adopt_selection(&mut self) {
        let Some(selection) = &self.selection else { return };
        let Some((profile, deadline)) = &self.pending_input else { return };
        if selection.selected_count() == 0 {
            self.notice = Some("nothing selected".to_string());
            return;
        }
        let programs: Vec<_> = selection
            .rankings
            .iter()
            .zip(&selection.selected)
            .filter(|(_, picked)| **picked)
            .map(|(ranking, _)| program_from_ranking(ranking, *deadline, self.today))
            .collect();
        let count = programs.len();
        let snapshot = RoadmapSnapshot::new(profile.clone(), programs);
        match self.store.replace_programs(snapshot) {
            Ok(()) => {
                self.notice = Some(format!("created roadmap with {count} programs"));
                self.selection = None;
                self.pending_input = None;
                self.intake = IntakeForm::new(self.today);
                self.view = View::Dashboard;
                self.pane = Pane::Programs;
                self.program_cursor = 0;
                self.timeline_cursor = 0;
            }
            Err(err) => self.notice = Some(format!("save failed: {err}")),
        }
        self.clamp_cursors();
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App) {
    let Some(ui_state) = read_ui_state(&app.data_dir) else {
        return;
    };

    app.store.restore_view_state(
        ui_state.active_roadmap.as_deref(),
        ui_state.focused_program.as_deref(),
    );

    match ui_state.view.as_str() {
        "focused" if app.store.focused_id().is_some() => app.view = View::Focused,
        "intake" => app.view = View::Intake,
        _ => app.view = View::Dashboard,
    }

    app.program_cursor = ui_state.program_cursor;
    app.focused_cursor = ui_state.step_cursor;
    app.clamp_cursors();
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    let view = match app.view {
        View::Focused => "focused",
        View::Intake | View::Selection => "intake",
        View::Dashboard => "dashboard",
    };
    let ui_state = UiState {
        view: view.to_string(),
        focused_program: app.store.focused_id().map(str::to_string),
        active_roadmap: app.store.active_roadmap_id().map(str::to_string),
        program_cursor: app.program_cursor,
        step_cursor: app.focused_cursor,
    };
    let _ = write_ui_state(&app.data_dir, &ui_state);
}

/// Run the TUI application
pub fn run(data_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(data_dir_override);
    let config = read_config(&data_dir);
    let theme = Theme::from_config(&config.ui);
    let store = ProgramStore::open(Box::new(JsonDirRepository::new(&data_dir)));

    let mut app = App::new(store, theme, config.api.endpoint, data_dir);

    // Restore saved UI state
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        app.poll_pending();

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
