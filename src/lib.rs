//! kanby - Local-first kanban board library
//!
//! This library provides the core functionality for the kanby CLI tool:
//! an authoritative in-memory task collection, durable local persistence,
//! a remote bootstrap source, and a pure projection of tasks into ordered
//! status columns.
//!
//! # Core Concepts
//!
//! - **Tasks**: Units of work with a status (`todo`/`doing`/`done`) and a
//!   priority (`High`/`Medium`/`Low`)
//! - **Board Projection**: A pure, ordered partition of the collection into
//!   status columns, ready for rendering
//! - **Local-first Startup**: The persisted collection wins; the remote
//!   endpoint is only consulted when nothing is cached locally
//! - **Themes**: A single persisted `light`/`dark` preference
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.kanby.toml`
//! - `error`: Error types and result aliases
//! - `task`: Task model and the authoritative task store
//! - `board`: Projection of tasks into status columns
//! - `storage`: Durable key-value persistence for tasks and theme
//! - `remote`: Remote bootstrap source over HTTP
//! - `controller`: Startup state machine and mutation entry points
//! - `theme`: Theme preference
//! - `output`: Shared CLI output formatting

pub mod board;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod output;
pub mod remote;
pub mod storage;
pub mod task;
pub mod theme;

pub use error::{Error, Result};
