use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use dna_core::model::{AnswerSet, MatchResult};

use crate::error::ScoringError;

/// Remote collaborator that turns an answer set into ranked matches.
#[async_trait]
pub trait ScoringClient: Send + Sync {
    /// Score a complete answer set.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError` for transport failures, non-success statuses or
    /// a body that is not a list of match records.
    async fn score(&self, answers: &AnswerSet) -> Result<Vec<MatchResult>, ScoringError>;
}

/// `ScoringClient` that POSTs the answers as JSON to a fixed endpoint.
#[derive(Clone)]
pub struct HttpScoringClient {
    client: Client,
    endpoint: Url,
}

impl HttpScoringClient {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ScoringClient for HttpScoringClient {
    async fn score(&self, answers: &AnswerSet) -> Result<Vec<MatchResult>, ScoringError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(answers)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScoringError::HttpStatus(response.status()));
        }

        let matches: Vec<MatchResult> = response.json().await?;
        Ok(matches)
    }
}
