use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option labels cannot be empty")]
    EmptyOption,

    #[error("duplicate option label: {0}")]
    DuplicateOption(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionnaireError {
    #[error("questionnaire must contain at least one question")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single-choice quiz step: a prompt plus an ordered set of option labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id or text is empty, no options are given,
    /// or an option label is empty or repeated.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let id = QuestionId::new(id).map_err(|_| QuestionError::EmptyId)?;
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        Ok(Self { id, text, options })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn offers(&self, label: &str) -> bool {
        self.options.iter().any(|option| option == label)
    }

    /// Built-in questions are known-good; skips validation.
    fn builtin(id: &str, text: &str, options: &[&str]) -> Self {
        Self {
            id: QuestionId::builtin(id),
            text: text.to_string(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
        }
    }
}

//
// ─── QUESTIONNAIRE ─────────────────────────────────────────────────────────────
//

/// Ordered, non-empty list of questions with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Creates a questionnaire from an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Empty` for an empty list and
    /// `QuestionnaireError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        if questions.is_empty() {
            return Err(QuestionnaireError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionnaireError::DuplicateId(question.id().clone()));
            }
        }
        Ok(Self { questions })
    }

    /// The six "photography DNA" questions shown on the match page.
    #[must_use]
    pub fn dna_default() -> Self {
        let questions = vec![
            Question::builtin(
                "style",
                "Choose your visual mood:",
                &["Luxury", "Emotional", "Artistic", "Minimalist", "Vintage"],
            ),
            Question::builtin(
                "vibe",
                "Preferred photographer style:",
                &["Guided (Posed)", "Candid (Natural)", "Editorial", "Storytelling"],
            ),
            Question::builtin(
                "lighting",
                "Preferred lighting style:",
                &["Bright & Airy", "Dark & Moody", "Natural Light", "Studio Flash"],
            ),
            Question::builtin(
                "editing",
                "Desired Editing Tone:",
                &["True to Color", "Film-like", "High Contrast", "Soft & Warm"],
            ),
            Question::builtin(
                "usage",
                "Primary use for photos:",
                &["Magazine/Print", "Physical Album", "Instagram/Social", "Professional Brand"],
            ),
            Question::builtin(
                "setting",
                "Ideal Shooting Location:",
                &["Grand Architecture", "Nature/Outdoor", "Urban/Cityscape", "Private Studio"],
            ),
        ];
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, step: usize) -> Option<&Question> {
        self.questions.get(step)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed questionnaire; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
