//! # Habit Tracker
//!
//! A habit tracking core with a JSON-backed store, streak statistics,
//! and a command-line front end.
//!
//! ## Features
//! - Track named habits per user with a completion history
//! - Streak, weekly-completion, and calendar statistics
//! - Durable single-document JSON storage with atomic writes
//! - Daily reminder scheduling with a pluggable notification callback

/// Command-line presentation adapter and output formatting
pub mod cli;
/// Configuration management and environment variables
pub mod config;
/// Background services like daily reminders
pub mod services;
/// Habit records, user records, and the JSON-backed store
pub mod store;
/// Pure streak and completion statistics over a habit's history
pub mod streak;
/// Utility functions for dates, validation, and logging
pub mod utils;
