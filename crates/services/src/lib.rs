#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod quiz_loop;
pub mod scoring;

pub use app_services::AppServices;
pub use config::QuizConfig;
pub use error::{ConfigError, QuizLoopError, ScoringError};
pub use quiz_loop::{DispatchOutcome, QuizLoopService};
pub use scoring::{HttpScoringClient, ScoringClient};
