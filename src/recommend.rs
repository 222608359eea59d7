use std::sync::mpsc;
use std::thread;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::program::UniversityProgram;
use crate::model::roadmap::{StudentProfile, program_slug};
use crate::model::template::program_from_template;

/// Error type for the recommendation call.
///
/// `Api` carries the service's own `error` message verbatim; the UI shows
/// it unmodified.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("{0}")]
    Api(String),
    #[error("recommendation service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response from recommendation service")]
    BadResponse,
}

/// Score breakdown attached to each ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingBreakdown {
    pub academic: f64,
    pub interest: f64,
    pub ec: f64,
    pub coop_fit: f64,
}

/// One ranked candidate program, best-first in the response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRanking {
    pub university: String,
    pub program: String,
    pub score: f64,
    pub breakdown: RankingBreakdown,
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    rankings: Vec<ProgramRanking>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// How many candidates the selection surface offers
pub const MAX_CANDIDATES: usize = 6;

/// Blocking client for the external recommendation service
pub struct RecommendClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl RecommendClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        RecommendClient {
            endpoint: endpoint.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// `POST {endpoint}/api/recommend`. Fire-once: no retry, no timeout
    /// policy; a failure is surfaced and the caller may resubmit manually.
    pub fn recommend(
        &self,
        profile: &StudentProfile,
    ) -> Result<Vec<ProgramRanking>, RecommendError> {
        let url = format!("{}/api/recommend", self.endpoint.trim_end_matches('/'));
        let response = self.http.post(url).json(profile).send()?;

        if !response.status().is_success() {
            // non-2xx carries { "error": "..." }; surface the message verbatim
            let body: ApiErrorBody = response.json().map_err(|_| RecommendError::BadResponse)?;
            return Err(RecommendError::Api(body.error));
        }

        let body: RecommendResponse = response.json().map_err(|_| RecommendError::BadResponse)?;
        Ok(body.rankings)
    }
}

/// Run the recommendation call on a worker thread, delivering the result
/// over a channel the event loop polls. The store is only touched on the
/// UI thread when the result is consumed, so mutations never interleave.
pub fn spawn_recommend(
    endpoint: String,
    profile: StudentProfile,
) -> mpsc::Receiver<Result<Vec<ProgramRanking>, RecommendError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let client = RecommendClient::new(endpoint);
        let _ = tx.send(client.recommend(&profile));
    });
    rx
}

/// Instantiate a program from a selected ranking using the default step
/// template. The id slug matches the built-in roadmap groupings.
pub fn program_from_ranking(
    ranking: &ProgramRanking,
    deadline: NaiveDate,
    today: NaiveDate,
) -> UniversityProgram {
    program_from_template(
        program_slug(&ranking.university, &ranking.program),
        ranking.university.clone(),
        ranking.program.clone(),
        deadline,
        today,
    )
}
