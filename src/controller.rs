//! Application controller: startup sequencing and mutation entry points.
//!
//! Startup is an explicit state machine, `Idle -> Loading -> {Ready, Error}`.
//! The persisted collection is always tried first and fully resolved before
//! the remote endpoint is consulted; the two are never raced. Retry is only
//! ever user-initiated, by calling [`Controller::load`] again from `Error`.

use crate::board::{project, Projection};
use crate::error::Result;
use crate::remote::RemoteSource;
use crate::storage::Storage;
use crate::task::{Priority, Status, Task, TaskPatch, TaskStore};
use crate::theme::Theme;

/// Startup state of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Invoked with a fresh projection after initial load and after every
/// successful mutation
pub type ChangeListener = Box<dyn Fn(&Projection)>;

/// Orchestrates startup and wires user actions to the task store
pub struct Controller<R: RemoteSource> {
    store: TaskStore,
    storage: Storage,
    remote: R,
    state: LoadState,
    on_change: Option<ChangeListener>,
}

impl<R: RemoteSource> Controller<R> {
    pub fn new(storage: Storage, remote: R) -> Self {
        Self {
            store: TaskStore::new(storage.clone()),
            storage,
            remote,
            state: LoadState::Idle,
            on_change: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn set_on_change(&mut self, listener: impl Fn(&Projection) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Current board projection
    pub fn projection(&self) -> Projection {
        project(self.store.all())
    }

    /// Run the startup chain: local cache first, remote as fallback.
    ///
    /// A call while already `Loading` or `Ready` is a no-op; only `Idle`
    /// and `Error` enter the chain, so a late-resolving fetch can never
    /// seed the store twice.
    pub async fn load(&mut self) -> &LoadState {
        match self.state {
            LoadState::Loading | LoadState::Ready => return &self.state,
            LoadState::Idle | LoadState::Error(_) => {}
        }
        self.state = LoadState::Loading;

        if let Some(tasks) = self.storage.load_tasks() {
            if !tasks.is_empty() {
                tracing::debug!(count = tasks.len(), "seeded board from local cache");
                self.store.replace_all(tasks);
                self.state = LoadState::Ready;
                self.notify();
                return &self.state;
            }
        }

        let fetched = self.remote.fetch_tasks().await;
        if self.state != LoadState::Loading {
            // State moved on while the fetch was outstanding; drop it.
            return &self.state;
        }
        match fetched {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "seeded board from remote");
                self.store.replace_all(tasks);
                self.state = LoadState::Ready;
                self.notify();
            }
            Err(err) => {
                tracing::warn!(error = %err, "startup failed; board is empty");
                self.state = LoadState::Error(err.to_string());
            }
        }
        &self.state
    }

    // =========================================================================
    // Mutation entry points for the view layer
    // =========================================================================

    pub fn create_task(
        &mut self,
        title: &str,
        description: &str,
        status: Status,
        priority: Priority,
    ) -> Result<Task> {
        let task = self
            .store
            .create(title, description, status, priority)?
            .clone();
        self.notify();
        Ok(task)
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<Task> {
        let task = self.store.update(id, patch)?.clone();
        self.notify();
        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<()> {
        self.store.delete(id)?;
        self.notify();
        Ok(())
    }

    // =========================================================================
    // Theme preference
    // =========================================================================

    pub fn theme(&self) -> Option<Theme> {
        self.storage.load_theme()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.storage.save_theme(theme);
    }

    fn notify(&self) {
        if let Some(listener) = &self.on_change {
            listener(&self.projection());
        }
    }
}
