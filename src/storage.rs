//! Durable local persistence for the task collection and theme preference.
//!
//! State lives as key-named files under a single data directory:
//!
//! ```text
//! <data-dir>/
//!   kanban_tasks_v1.json    # JSON-serialized task collection
//!   kanban_theme_v1         # "light" or "dark"
//! ```
//!
//! Writes are atomic (temp file + rename). Saves log-and-swallow I/O
//! failures so persistence trouble never blocks an in-memory operation;
//! loads fold missing keys and parse failures into `None`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::task::Task;
use crate::theme::Theme;

/// Key under which the task collection is persisted
pub const TASKS_KEY: &str = "kanban_tasks_v1";

/// Key under which the theme preference is persisted
pub const THEME_KEY: &str = "kanban_theme_v1";

/// Persistence adapter over the data directory
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory: an explicit override wins, otherwise the
    /// platform data directory for kanby
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = explicit {
            return Ok(Self::new(dir));
        }
        let dirs = ProjectDirs::from("", "", "kanby").ok_or_else(|| {
            Error::InvalidConfig(
                "could not determine a data directory; set --data-dir or KANBY_DATA_DIR"
                    .to_string(),
            )
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(format!("{TASKS_KEY}.json"))
    }

    pub fn theme_file(&self) -> PathBuf {
        self.data_dir.join(THEME_KEY)
    }

    // =========================================================================
    // Task collection
    // =========================================================================

    /// Persist the full collection under the tasks key, overwriting any
    /// prior value. Failures are logged and swallowed.
    pub fn save_tasks(&self, tasks: &[Task]) {
        if let Err(err) = self.write_json(&self.tasks_file(), &tasks) {
            tracing::warn!(error = %err, "failed to persist tasks; in-memory state is unaffected");
        }
    }

    /// Load the previously saved collection. `None` means no value exists
    /// or the stored value failed to parse; parse errors are logged, never
    /// propagated.
    pub fn load_tasks(&self) -> Option<Vec<Task>> {
        let path = self.tasks_file();
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "failed to read persisted tasks");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(tasks) => Some(tasks),
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "persisted tasks failed to parse; treating as not found");
                None
            }
        }
    }

    // =========================================================================
    // Theme preference
    // =========================================================================

    /// Persist the theme preference. Failures are logged and swallowed.
    pub fn save_theme(&self, theme: Theme) {
        if let Err(err) = self.write_atomic(&self.theme_file(), theme.as_str().as_bytes()) {
            tracing::warn!(error = %err, "failed to persist theme");
        }
    }

    /// Load the saved theme; `None` covers both a missing key and an
    /// unparseable stored value
    pub fn load_theme(&self) -> Option<Theme> {
        let content = fs::read_to_string(self.theme_file()).ok()?;
        match content.trim().parse() {
            Ok(theme) => Some(theme),
            Err(_) => {
                tracing::warn!(value = %content.trim(), "persisted theme is not light/dark; ignoring");
                None
            }
        }
    }

    // =========================================================================
    // File I/O helpers (atomic writes for safety)
    // =========================================================================

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        self.write_atomic(path, json.as_bytes())
    }

    /// Write data atomically using temp file + rename so readers never see
    /// partial writes
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, Status};
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: "a1".to_string(),
                title: "First".to_string(),
                description: "with description".to_string(),
                status: Status::Todo,
                priority: Priority::High,
            },
            Task {
                id: "b2".to_string(),
                title: "Second".to_string(),
                description: String::new(),
                status: Status::Done,
                priority: Priority::Low,
            },
        ]
    }

    #[test]
    fn storage_paths() {
        let storage = Storage::new(PathBuf::from("/tmp/kanby-data"));
        assert_eq!(
            storage.tasks_file(),
            PathBuf::from("/tmp/kanby-data/kanban_tasks_v1.json")
        );
        assert_eq!(
            storage.theme_file(),
            PathBuf::from("/tmp/kanby-data/kanban_theme_v1")
        );
    }

    #[test]
    fn resolve_prefers_explicit_dir() {
        let storage = Storage::resolve(Some(PathBuf::from("/tmp/explicit"))).unwrap();
        assert_eq!(storage.data_dir(), Path::new("/tmp/explicit"));
    }

    #[test]
    fn tasks_round_trip_field_for_field() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        let tasks = sample_tasks();
        storage.save_tasks(&tasks);

        assert_eq!(storage.load_tasks().unwrap(), tasks);
    }

    #[test]
    fn load_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        assert!(storage.load_tasks().is_none());
        assert!(storage.load_theme().is_none());
    }

    #[test]
    fn parse_failure_is_treated_as_not_found() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        fs::write(storage.tasks_file(), "{not json").unwrap();
        assert!(storage.load_tasks().is_none());
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("nested").join("deeper"));

        storage.save_tasks(&sample_tasks());
        assert_eq!(storage.load_tasks().unwrap().len(), 2);
    }

    #[test]
    fn save_failure_is_swallowed() {
        let temp = TempDir::new().unwrap();
        // Data dir path occupied by a regular file: every write must fail,
        // but save still returns normally.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let storage = Storage::new(blocker);
        storage.save_tasks(&sample_tasks());
        storage.save_theme(Theme::Dark);
        assert!(storage.load_tasks().is_none());
    }

    #[test]
    fn theme_round_trip() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        storage.save_theme(Theme::Dark);
        assert_eq!(storage.load_theme(), Some(Theme::Dark));

        storage.save_theme(Theme::Light);
        assert_eq!(storage.load_theme(), Some(Theme::Light));
    }

    #[test]
    fn corrupt_theme_is_none() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        fs::write(storage.theme_file(), "solarized").unwrap();
        assert!(storage.load_theme().is_none());
    }

    #[test]
    fn empty_collection_round_trips_as_empty_not_missing() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        storage.save_tasks(&[]);
        assert_eq!(storage.load_tasks(), Some(Vec::new()));
    }
}
