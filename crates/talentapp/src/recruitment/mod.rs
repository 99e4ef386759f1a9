//! Recruitment drives: lifecycle, candidate scoring, hydration and the use cases tying them
//! to the entity store.

pub mod domain;
pub mod hydration;
pub mod import;
pub mod lifecycle;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateDraft, CandidateId, CandidateScore, Job, JobDraft, JobId, Recruitment,
    RecruitmentId, RecruitmentStatus, ScoreId, ScoreSubmission,
};
pub use hydration::Hydrator;
pub use import::{CandidateCsvImporter, ImportError};
pub use lifecycle::{deadline_from_date, LifecycleError};
pub use repository::{
    CandidateRepository, CandidateScoreRepository, EntityStore, JobRepository, Page,
    RecruitmentRepository, RepositoryError, DEFAULT_PAGE_LIMIT,
};
pub use router::{recruitment_router, ApiError, PageQuery};
pub use scoring::{compute_score, ScoreBreakdown, SCORE_WEIGHTS};
pub use service::{RecruitmentService, RecruitmentServiceError};
pub use store::InMemoryEntityStore;
