#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;

pub use error::Error;
pub use quiz::{QuizController, QuizEffect, QuizError, QuizEvent, QuizPhase};
