use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::question::Questionnaire;

/// The user's chosen option per question.
///
/// Serializes as a flat JSON object (`{"style": "Luxury", ...}`), which is the
/// request body of the scoring endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the chosen option, replacing any earlier choice for the question.
    pub fn record(&mut self, id: QuestionId, option: impl Into<String>) -> Option<String> {
        self.answers.insert(id, option.into())
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.answers.iter().map(|(id, option)| (id, option.as_str()))
    }

    /// True when every question of the questionnaire has exactly one answer and
    /// nothing else was recorded.
    #[must_use]
    pub fn covers(&self, questionnaire: &Questionnaire) -> bool {
        self.answers.len() == questionnaire.len()
            && questionnaire
                .questions()
                .iter()
                .all(|question| self.answers.contains_key(question.id()))
    }
}
