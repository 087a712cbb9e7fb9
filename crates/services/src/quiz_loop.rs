use std::sync::Arc;
use std::time::Duration;

use dna_core::model::{AnswerSet, MatchResult, Questionnaire};
use dna_core::{QuizController, QuizEffect, QuizEvent};
use storage::MatchCache;
use tracing::{error, info, warn};

use crate::error::{QuizLoopError, ScoringError};
use crate::scoring::ScoringClient;

/// What the caller should do after an event has been fully processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    /// The cache was cleared; replace the controller with a fresh `start()`.
    Reload,
}

/// Runs the side effects requested by a `QuizController`.
#[derive(Clone)]
pub struct QuizLoopService {
    questionnaire: Questionnaire,
    scoring: Arc<dyn ScoringClient>,
    cache: MatchCache,
    submit_timeout: Option<Duration>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        questionnaire: Questionnaire,
        scoring: Arc<dyn ScoringClient>,
        cache: MatchCache,
    ) -> Self {
        Self {
            questionnaire,
            scoring,
            cache,
            submit_timeout: None,
        }
    }

    #[must_use]
    pub fn with_submit_timeout(mut self, submit_timeout: Option<Duration>) -> Self {
        self.submit_timeout = submit_timeout;
        self
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Build the controller for a new page visit.
    ///
    /// Cached results skip the question flow. A cache that cannot be read is
    /// treated as empty.
    pub async fn start(&self) -> QuizController {
        match self.cache.load().await {
            Ok(Some(results)) => {
                info!(matches = results.len(), "restoring cached matches");
                QuizController::from_cached(self.questionnaire.clone(), results)
            }
            Ok(None) => {
                info!(questions = self.questionnaire.len(), "starting quiz");
                QuizController::new(self.questionnaire.clone())
            }
            Err(err) => {
                warn!(error = %err, "session cache unreadable; starting quiz");
                QuizController::new(self.questionnaire.clone())
            }
        }
    }

    /// Send the answers to the scoring endpoint, honoring the submit timeout.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError` for any scoring failure, including a timeout.
    pub async fn submit(&self, answers: &AnswerSet) -> Result<Vec<MatchResult>, ScoringError> {
        match self.submit_timeout {
            Some(limit) => tokio::time::timeout(limit, self.scoring.score(answers))
                .await
                .map_err(|_| ScoringError::TimedOut(limit))?,
            None => self.scoring.score(answers).await,
        }
    }

    /// Execute one effect and return the event it produces, if any.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Storage` if the cache cannot be cleared on
    /// restart. Scoring and cache-write failures do not error: the former
    /// becomes `QuizEvent::SubmissionFailed`, the latter is logged.
    pub async fn run_effect(&self, effect: QuizEffect) -> Result<Option<QuizEvent>, QuizLoopError> {
        match effect {
            QuizEffect::Submit(answers) => match self.submit(&answers).await {
                Ok(results) => {
                    info!(matches = results.len(), "scoring succeeded");
                    Ok(Some(QuizEvent::SubmissionSucceeded(results)))
                }
                Err(err) => {
                    error!(error = %err, "error fetching results");
                    Ok(Some(QuizEvent::SubmissionFailed))
                }
            },
            QuizEffect::PersistResults(results) => {
                if let Err(err) = self.cache.store(&results).await {
                    warn!(error = %err, "failed to cache matches");
                }
                Ok(None)
            }
            QuizEffect::ClearAndReload => {
                self.cache.clear().await?;
                info!("cleared cached matches");
                Ok(None)
            }
        }
    }

    /// Feed `event` to the controller and run every resulting effect.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Quiz` if the controller rejects an event and
    /// `QuizLoopError::Storage` if a restart cannot clear the cache.
    pub async fn dispatch(
        &self,
        controller: &mut QuizController,
        event: QuizEvent,
    ) -> Result<DispatchOutcome, QuizLoopError> {
        let mut pending = controller.handle(event)?;
        let mut outcome = DispatchOutcome::Continue;
        while let Some(effect) = pending.take() {
            if effect == QuizEffect::ClearAndReload {
                outcome = DispatchOutcome::Reload;
            }
            if let Some(next) = self.run_effect(effect).await? {
                pending = controller.handle(next)?;
            }
        }
        Ok(outcome)
    }
}
