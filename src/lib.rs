//! Goal and habit progress tracking.
//!
//! The [`progress`] module is the statistics engine: given a [`models::Goal`],
//! its [`models::LogEntry`] history and a reference [`models::Timestamp`] it
//! resolves the active window and computes completion, pace, streaks and
//! milestones. [`data`] and [`config`] are the file-backed collaborators the
//! `goalpace` binary uses to feed it.

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod progress;
pub mod utils;

pub use error::{Error, Result};
