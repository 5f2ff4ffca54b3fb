#![forbid(unsafe_code)]

//! Core domain model and scoring logic for Coachie.
//!
//! This crate provides:
//! - Health log types (meals, workouts, sleep, water, mood, ...)
//! - The daily Coachie Score engine
//! - The voice command parser
//! - Local persistence (per-day JSONL logs, CSV score history)
//! - Streaks and configuration

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod numbers;
pub mod vocabulary;
pub mod voice;
pub mod score;
pub mod streak;
pub mod log_store;
pub mod score_history;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use voice::{classify_intent, parse_voice_command};
pub use score::calculate_daily_score;
pub use streak::{current_streak, longest_streak};
pub use log_store::{LogSink, LogStore};
pub use score_history::{History, ScoreHistory};
