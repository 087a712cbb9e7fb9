use dna_core::model::MatchResult;
use dna_core::{QuizController, QuizEffect, QuizError, QuizEvent, QuizPhase};
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchCardVm {
    pub name: String,
    pub score_label: String,
    pub reason: String,
    /// In-app route of the portfolio page; `None` if it cannot be built.
    pub portfolio_path: Option<String>,
}

/// What the quiz container should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionVm),
    Loading,
    Results(Vec<MatchCardVm>),
    Error,
}

#[must_use]
pub fn map_match_card(result: &MatchResult) -> MatchCardVm {
    let portfolio_path = match result.portfolio_path() {
        Ok(path) => Some(path),
        Err(err) => {
            warn!(name = %result.name, error = %err, "no portfolio link for match");
            None
        }
    };

    MatchCardVm {
        name: result.name.clone(),
        score_label: result.score_label(),
        reason: result.reason.clone(),
        portfolio_path,
    }
}

pub struct QuizVm {
    controller: QuizController,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    /// # Errors
    ///
    /// Returns `QuizError` if the controller rejects the event.
    pub fn handle(&mut self, event: QuizEvent) -> Result<Option<QuizEffect>, QuizError> {
        self.controller.handle(event)
    }

    /// Option label bound to digit key `key` ("1" is the first option).
    #[must_use]
    pub fn option_for_key(&self, key: &str) -> Option<String> {
        let digit = key.parse::<usize>().ok().filter(|digit| (1..=9).contains(digit))?;
        self.controller
            .current_question()
            .and_then(|question| question.options().get(digit - 1))
            .cloned()
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match self.controller.phase() {
            QuizPhase::AwaitingAnswer { .. } => {
                let (Some(question), Some(progress_label)) = (
                    self.controller.current_question(),
                    self.controller.progress_label(),
                ) else {
                    return QuizScreen::Error;
                };
                QuizScreen::Question(QuestionVm {
                    progress_label,
                    prompt: question.text().to_string(),
                    options: question.options().to_vec(),
                })
            }
            QuizPhase::Submitting => QuizScreen::Loading,
            QuizPhase::ShowingResults(results) => {
                QuizScreen::Results(results.iter().map(map_match_card).collect())
            }
            QuizPhase::ShowingError => QuizScreen::Error,
        }
    }
}
