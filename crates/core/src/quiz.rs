//! Quiz progression state machine.
//!
//! The controller is pure: it records answers, moves between phases and tells
//! the caller which side effect to run next. Network and storage work happen
//! outside (see `services::QuizLoopService`).

use thiserror::Error;

use crate::model::{AnswerSet, MatchResult, Question, Questionnaire};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option {option:?} is not offered by question {question}")]
    UnknownOption { question: String, option: String },

    #[error("{event} is not accepted while {phase}")]
    UnexpectedEvent {
        phase: &'static str,
        event: &'static str,
    },
}

/// Where the quiz currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    /// Showing question `step` (0-based) and waiting for a selection.
    AwaitingAnswer { step: usize },
    /// All answers collected; the scoring request is outstanding.
    Submitting,
    ShowingResults(Vec<MatchResult>),
    /// Terminal for this flow. Only a reload starts over.
    ShowingError,
}

impl QuizPhase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizPhase::AwaitingAnswer { .. } => "awaiting an answer",
            QuizPhase::Submitting => "submitting",
            QuizPhase::ShowingResults(_) => "showing results",
            QuizPhase::ShowingError => "showing an error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    OptionSelected(String),
    SubmissionSucceeded(Vec<MatchResult>),
    SubmissionFailed,
    RestartRequested,
}

impl QuizEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::OptionSelected(_) => "option selection",
            QuizEvent::SubmissionSucceeded(_) => "submission success",
            QuizEvent::SubmissionFailed => "submission failure",
            QuizEvent::RestartRequested => "restart",
        }
    }
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEffect {
    /// Send the complete answer set to the scoring endpoint.
    Submit(AnswerSet),
    /// Overwrite the session cache with the latest results.
    PersistResults(Vec<MatchResult>),
    /// Erase the session cache and start over from a fresh controller.
    ClearAndReload,
}

#[derive(Debug, Clone)]
pub struct QuizController {
    questionnaire: Questionnaire,
    step: usize,
    answers: AnswerSet,
    phase: QuizPhase,
}

impl QuizController {
    /// Starts at the first question.
    #[must_use]
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            step: 0,
            answers: AnswerSet::new(),
            phase: QuizPhase::AwaitingAnswer { step: 0 },
        }
    }

    /// Starts directly in the results view, skipping the question flow.
    #[must_use]
    pub fn from_cached(questionnaire: Questionnaire, results: Vec<MatchResult>) -> Self {
        let step = questionnaire.len();
        Self {
            questionnaire,
            step,
            answers: AnswerSet::new(),
            phase: QuizPhase::ShowingResults(results),
        }
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questionnaire.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::AwaitingAnswer { step } => self.questionnaire.get(step),
            _ => None,
        }
    }

    /// "Question N of T" while a question is on screen.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        match self.phase {
            QuizPhase::AwaitingAnswer { step } => {
                Some(format!("Question {} of {}", step + 1, self.total()))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn results(&self) -> Option<&[MatchResult]> {
        match &self.phase {
            QuizPhase::ShowingResults(results) => Some(results),
            _ => None,
        }
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnexpectedEvent` if the event is not valid in the
    /// current phase, and `QuizError::UnknownOption` if the selected label is
    /// not offered by the current question. The state is unchanged on error.
    pub fn handle(&mut self, event: QuizEvent) -> Result<Option<QuizEffect>, QuizError> {
        match event {
            QuizEvent::OptionSelected(option) => match self.phase {
                QuizPhase::AwaitingAnswer { step } => self.select(step, option),
                _ => Err(self.unexpected("option selection")),
            },
            QuizEvent::SubmissionSucceeded(results) => {
                if self.phase != QuizPhase::Submitting {
                    return Err(self.unexpected("submission success"));
                }
                self.phase = QuizPhase::ShowingResults(results.clone());
                Ok(Some(QuizEffect::PersistResults(results)))
            }
            QuizEvent::SubmissionFailed => {
                if self.phase != QuizPhase::Submitting {
                    return Err(self.unexpected("submission failure"));
                }
                self.phase = QuizPhase::ShowingError;
                Ok(None)
            }
            QuizEvent::RestartRequested => match self.phase {
                QuizPhase::ShowingResults(_) => Ok(Some(QuizEffect::ClearAndReload)),
                _ => Err(self.unexpected("restart")),
            },
        }
    }

    fn unexpected(&self, event: &'static str) -> QuizError {
        QuizError::UnexpectedEvent {
            phase: self.phase.name(),
            event,
        }
    }

    fn select(&mut self, step: usize, option: String) -> Result<Option<QuizEffect>, QuizError> {
        let Some(question) = self.questionnaire.get(step) else {
            return Err(self.unexpected("option selection"));
        };
        if !question.offers(&option) {
            return Err(QuizError::UnknownOption {
                question: question.id().to_string(),
                option,
            });
        }

        self.answers.record(question.id().clone(), option);
        self.step = step + 1;

        if self.step < self.questionnaire.len() {
            self.phase = QuizPhase::AwaitingAnswer { step: self.step };
            return Ok(None);
        }

        self.phase = QuizPhase::Submitting;
        Ok(Some(QuizEffect::Submit(self.answers.clone())))
    }
}
