//! # Taskline
//!
//! A command-line utility for keeping a personal list of dated tasks in
//! a plain pipe-delimited text file.
//!
//! ## Features
//!
//! - **Task Management**: Add and delete tasks with a date and an optional time of day
//! - **Sorted View**: Display the list ordered by date, with untimed tasks ahead of timed ones
//! - **Plain Text Storage**: One record per line, editable with any text editor
//! - **Resilient Loading**: Malformed lines are warned about and skipped, never fatal
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskline::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
