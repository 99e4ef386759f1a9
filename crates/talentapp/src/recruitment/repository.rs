use serde::{Deserialize, Serialize};

use super::domain::{
    Candidate, CandidateId, CandidateScore, Job, JobId, Recruitment, RecruitmentId,
    RecruitmentStatus,
};

/// Page size used when a caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Window into a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub const fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, 0)
    }
}

/// Storage abstraction for job postings.
pub trait JobRepository: Send + Sync {
    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError>;
    fn fetch_job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn list_jobs(&self, page: Page) -> Result<Vec<Job>, RepositoryError>;
}

pub trait CandidateRepository: Send + Sync {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, RepositoryError>;
    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn list_candidates(&self, page: Page) -> Result<Vec<Candidate>, RepositoryError>;
}

pub trait RecruitmentRepository: Send + Sync {
    fn insert_recruitment(&self, recruitment: Recruitment)
        -> Result<Recruitment, RepositoryError>;
    fn fetch_recruitment(&self, id: &RecruitmentId)
        -> Result<Option<Recruitment>, RepositoryError>;
    fn list_recruitments(&self, page: Page) -> Result<Vec<Recruitment>, RepositoryError>;
    /// Overwrites the stored status. Fails with `NotFound` for unknown ids.
    fn update_status(
        &self,
        id: &RecruitmentId,
        status: RecruitmentStatus,
    ) -> Result<(), RepositoryError>;
}

pub trait CandidateScoreRepository: Send + Sync {
    fn insert_score(&self, score: CandidateScore) -> Result<CandidateScore, RepositoryError>;
    fn fetch_score(
        &self,
        recruitment_id: &RecruitmentId,
        candidate_id: &CandidateId,
    ) -> Result<Option<CandidateScore>, RepositoryError>;
    /// Scores for one drive, highest overall score first. Order among equal scores is
    /// left to the implementation.
    fn list_scores_by_recruitment(
        &self,
        recruitment_id: &RecruitmentId,
        page: Page,
    ) -> Result<Vec<CandidateScore>, RepositoryError>;
}

/// Everything the recruitment service needs from storage.
pub trait EntityStore:
    JobRepository + CandidateRepository + RecruitmentRepository + CandidateScoreRepository
{
}

impl<T> EntityStore for T where
    T: JobRepository + CandidateRepository + RecruitmentRepository + CandidateScoreRepository
{
}

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
