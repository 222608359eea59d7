use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::io::recovery::log_recovery;
use crate::model::bonus::BonusTask;
use crate::model::program::UniversityProgram;
use crate::model::roadmap::RoadmapSnapshot;

/// Error type for repository writes. Reads never fail: absence and corrupt
/// data both degrade to the empty value.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("could not write {key}: {source}")]
    WriteError {
        key: &'static str,
        source: std::io::Error,
    },
    #[error("could not encode {key}: {source}")]
    EncodeError {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// Everything the store reads back at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredState {
    pub programs: Vec<UniversityProgram>,
    pub roadmap: Option<RoadmapSnapshot>,
    /// `None` means the key was never written; the store seeds defaults
    pub global_bonus: Option<Vec<BonusTask>>,
}

/// Durable key-value storage for the program collection and roadmap
/// snapshots. The store performs one `commit` per accepted mutation so the
/// `currentPrograms` and `currentRoadmap` keys never diverge.
pub trait ProgramRepository {
    fn load(&self) -> StoredState;

    /// Write the program collection and the active roadmap snapshot as one
    /// logical transaction. `None` removes the snapshot key.
    fn commit(
        &self,
        programs: &[UniversityProgram],
        snapshot: Option<&RoadmapSnapshot>,
    ) -> Result<(), RepositoryError>;

    /// Write the global bonus-task state
    fn commit_bonus(&self, tasks: &[BonusTask]) -> Result<(), RepositoryError>;

    /// Append a snapshot to the append-only `userRoadmaps` history
    fn append_history(&self, snapshot: &RoadmapSnapshot) -> Result<(), RepositoryError>;

    fn load_history(&self) -> Vec<RoadmapSnapshot>;

    /// Remove every key. All-or-nothing from the caller's perspective:
    /// a subsequent `load` sees the empty state.
    fn clear(&self) -> Result<(), RepositoryError>;
}

// ---------------------------------------------------------------------------
// JSON-file-backed repository
// ---------------------------------------------------------------------------

const PROGRAMS_KEY: &str = "currentPrograms";
const ROADMAP_KEY: &str = "currentRoadmap";
const HISTORY_KEY: &str = "userRoadmaps";
const BONUS_KEY: &str = "globalBonusTasks";

/// Repository backed by one JSON file per well-known key inside the data
/// directory.
pub struct JsonDirRepository {
    dir: PathBuf,
}

impl JsonDirRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonDirRepository { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Tolerant read: missing key → None, corrupt key → None plus a
    /// recovery-log entry. Never an error.
    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = fs::read_to_string(self.key_path(key)).ok()?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                log_recovery(&self.dir, key, &format!("parse failure: {e}"));
                None
            }
        }
    }

    fn write_key<T: serde::Serialize>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.dir)
            .map_err(|source| RepositoryError::WriteError { key, source })?;
        let text = serde_json::to_string_pretty(value)
            .map_err(|source| RepositoryError::EncodeError { key, source })?;
        fs::write(self.key_path(key), text)
            .map_err(|source| RepositoryError::WriteError { key, source })
    }

    fn remove_key(&self, key: &'static str) -> Result<(), RepositoryError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(RepositoryError::WriteError { key, source }),
        }
    }
}

impl ProgramRepository for JsonDirRepository {
    fn load(&self) -> StoredState {
        StoredState {
            programs: self.read_key(PROGRAMS_KEY).unwrap_or_default(),
            roadmap: self.read_key(ROADMAP_KEY),
            global_bonus: self.read_key(BONUS_KEY),
        }
    }

    fn commit(
        &self,
        programs: &[UniversityProgram],
        snapshot: Option<&RoadmapSnapshot>,
    ) -> Result<(), RepositoryError> {
        self.write_key(PROGRAMS_KEY, &programs)?;
        match snapshot {
            Some(snapshot) => self.write_key(ROADMAP_KEY, snapshot),
            None => self.remove_key(ROADMAP_KEY),
        }
    }

    fn commit_bonus(&self, tasks: &[BonusTask]) -> Result<(), RepositoryError> {
        self.write_key(BONUS_KEY, &tasks)
    }

    fn append_history(&self, snapshot: &RoadmapSnapshot) -> Result<(), RepositoryError> {
        let mut history = self.load_history();
        history.push(snapshot.clone());
        self.write_key(HISTORY_KEY, &history)
    }

    fn load_history(&self) -> Vec<RoadmapSnapshot> {
        self.read_key(HISTORY_KEY).unwrap_or_default()
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.remove_key(PROGRAMS_KEY)?;
        self.remove_key(ROADMAP_KEY)?;
        self.remove_key(HISTORY_KEY)?;
        self.remove_key(BONUS_KEY)
    }
}

// ---------------------------------------------------------------------------
// In-memory repository (tests and non-durable sessions)
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct MemoryState {
    programs: Vec<UniversityProgram>,
    roadmap: Option<RoadmapSnapshot>,
    global_bonus: Option<Vec<BonusTask>>,
    history: Vec<RoadmapSnapshot>,
}

/// In-memory stand-in for `JsonDirRepository`. Cloning shares the backing
/// state, so a test can keep a handle and inspect what the store committed.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored_programs(&self) -> Vec<UniversityProgram> {
        self.state.borrow().programs.clone()
    }

    pub fn stored_roadmap(&self) -> Option<RoadmapSnapshot> {
        self.state.borrow().roadmap.clone()
    }
}

impl ProgramRepository for MemoryRepository {
    fn load(&self) -> StoredState {
        let state = self.state.borrow();
        StoredState {
            programs: state.programs.clone(),
            roadmap: state.roadmap.clone(),
            global_bonus: state.global_bonus.clone(),
        }
    }

    fn commit(
        &self,
        programs: &[UniversityProgram],
        snapshot: Option<&RoadmapSnapshot>,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.borrow_mut();
        state.programs = programs.to_vec();
        state.roadmap = snapshot.cloned();
        Ok(())
    }

    fn commit_bonus(&self, tasks: &[BonusTask]) -> Result<(), RepositoryError> {
        self.state.borrow_mut().global_bonus = Some(tasks.to_vec());
        Ok(())
    }

    fn append_history(&self, snapshot: &RoadmapSnapshot) -> Result<(), RepositoryError> {
        self.state.borrow_mut().history.push(snapshot.clone());
        Ok(())
    }

    fn load_history(&self) -> Vec<RoadmapSnapshot> {
        self.state.borrow().history.clone()
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        *self.state.borrow_mut() = MemoryState::default();
        Ok(())
    }
}
