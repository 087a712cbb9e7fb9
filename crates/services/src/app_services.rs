use std::sync::Arc;

use dna_core::model::Questionnaire;
use storage::{MatchCache, Storage};

use crate::config::QuizConfig;
use crate::quiz_loop::QuizLoopService;
use crate::scoring::{HttpScoringClient, ScoringClient};

/// Assembles app-facing services from configuration and storage.
#[derive(Clone)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services that score over HTTP as configured.
    #[must_use]
    pub fn from_config(config: &QuizConfig, storage: &Storage) -> Self {
        let scoring: Arc<dyn ScoringClient> =
            Arc::new(HttpScoringClient::new(config.scoring_url.clone()));
        Self::with_scoring(config, storage, scoring)
    }

    /// Build services around a caller-supplied scoring client.
    #[must_use]
    pub fn with_scoring(
        config: &QuizConfig,
        storage: &Storage,
        scoring: Arc<dyn ScoringClient>,
    ) -> Self {
        let cache = MatchCache::new(Arc::clone(&storage.session));
        let quiz_loop = QuizLoopService::new(Questionnaire::dna_default(), scoring, cache)
            .with_submit_timeout(config.submit_timeout);
        Self {
            quiz_loop: Arc::new(quiz_loop),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
