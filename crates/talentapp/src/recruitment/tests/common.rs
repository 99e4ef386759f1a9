use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::recruitment::domain::{
    Candidate, CandidateDraft, CandidateId, CandidateScore, Job, JobDraft, JobId, Recruitment,
    RecruitmentId, RecruitmentStatus, ScoreSubmission,
};
use crate::recruitment::repository::{
    CandidateRepository, CandidateScoreRepository, JobRepository, Page, RecruitmentRepository,
    RepositoryError,
};
use crate::recruitment::store::InMemoryEntityStore;
use crate::recruitment::{recruitment_router, RecruitmentService};

pub(super) fn job_draft() -> JobDraft {
    JobDraft {
        position: "Backend Engineer".to_string(),
        department: "Platform".to_string(),
        requester: "Dana Putri".to_string(),
        job_description: "Own the scoring APIs".to_string(),
        criteria: "3+ years building services".to_string(),
    }
}

pub(super) fn candidate_draft(name: &str, experience: i32, relocate: &str) -> CandidateDraft {
    CandidateDraft {
        name: name.to_string(),
        address: "Jl. Sudirman 1, Jakarta".to_string(),
        experience,
        willing_to_relocate: relocate.to_string(),
    }
}

pub(super) fn submission(
    candidate: &Candidate,
    attitude: &str,
    skill: &str,
) -> ScoreSubmission {
    ScoreSubmission {
        candidate_id: candidate.id.clone(),
        willing_to_relocate: candidate.willing_to_relocate.clone(),
        attitude_score: attitude.to_string(),
        skill_score: skill.to_string(),
        experience: candidate.experience,
    }
}

pub(super) fn build_service() -> (
    RecruitmentService<InMemoryEntityStore>,
    Arc<InMemoryEntityStore>,
) {
    let store = Arc::new(InMemoryEntityStore::default());
    let service = RecruitmentService::new(store.clone());
    (service, store)
}

/// A job, an open recruitment for it, and three scored candidates.
pub(super) struct SeededDrive {
    pub(super) job: Job,
    pub(super) recruitment: Recruitment,
    pub(super) candidates: Vec<Candidate>,
    pub(super) scores: Vec<CandidateScore>,
}

pub(super) fn seed_drive<S>(service: &RecruitmentService<S>) -> SeededDrive
where
    S: crate::recruitment::EntityStore + 'static,
{
    let job = service.create_job(job_draft()).expect("job created");
    let recruitment = service
        .create_recruitment(job.id.clone(), "2024-03-15")
        .expect("recruitment created");

    let roster = [
        (candidate_draft("Ayu", 5, "yes"), "80", "90"),
        (candidate_draft("Bima", 1, "no"), "abc", "50"),
        (candidate_draft("Citra", 3, "no"), "70", "75"),
    ];

    let mut candidates = Vec::new();
    let mut scores = Vec::new();
    for (draft, attitude, skill) in roster {
        let candidate = service.create_candidate(draft).expect("candidate created");
        let score = service
            .submit_candidate_score(
                recruitment.id.clone(),
                submission(&candidate, attitude, skill),
            )
            .expect("score submitted");
        candidates.push(candidate);
        scores.push(score);
    }

    SeededDrive {
        job,
        recruitment,
        candidates,
        scores,
    }
}

/// Wraps the in-memory store and counts point reads per table.
#[derive(Default)]
pub(super) struct CountingStore {
    pub(super) inner: InMemoryEntityStore,
    pub(super) job_reads: AtomicUsize,
    pub(super) candidate_reads: AtomicUsize,
    pub(super) recruitment_reads: AtomicUsize,
}

impl CountingStore {
    pub(super) fn point_reads(&self) -> usize {
        self.job_reads.load(Ordering::SeqCst)
            + self.candidate_reads.load(Ordering::SeqCst)
            + self.recruitment_reads.load(Ordering::SeqCst)
    }

    pub(super) fn reset(&self) {
        self.job_reads.store(0, Ordering::SeqCst);
        self.candidate_reads.store(0, Ordering::SeqCst);
        self.recruitment_reads.store(0, Ordering::SeqCst);
    }
}

impl JobRepository for CountingStore {
    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError> {
        self.inner.insert_job(job)
    }

    fn fetch_job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.job_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_job(id)
    }

    fn list_jobs(&self, page: Page) -> Result<Vec<Job>, RepositoryError> {
        self.inner.list_jobs(page)
    }
}

impl CandidateRepository for CountingStore {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        self.inner.insert_candidate(candidate)
    }

    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        self.candidate_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_candidate(id)
    }

    fn list_candidates(&self, page: Page) -> Result<Vec<Candidate>, RepositoryError> {
        self.inner.list_candidates(page)
    }
}

impl RecruitmentRepository for CountingStore {
    fn insert_recruitment(
        &self,
        recruitment: Recruitment,
    ) -> Result<Recruitment, RepositoryError> {
        self.inner.insert_recruitment(recruitment)
    }

    fn fetch_recruitment(
        &self,
        id: &RecruitmentId,
    ) -> Result<Option<Recruitment>, RepositoryError> {
        self.recruitment_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_recruitment(id)
    }

    fn list_recruitments(&self, page: Page) -> Result<Vec<Recruitment>, RepositoryError> {
        self.inner.list_recruitments(page)
    }

    fn update_status(
        &self,
        id: &RecruitmentId,
        status: RecruitmentStatus,
    ) -> Result<(), RepositoryError> {
        self.inner.update_status(id, status)
    }
}

impl CandidateScoreRepository for CountingStore {
    fn insert_score(&self, score: CandidateScore) -> Result<CandidateScore, RepositoryError> {
        self.inner.insert_score(score)
    }

    fn fetch_score(
        &self,
        recruitment_id: &RecruitmentId,
        candidate_id: &CandidateId,
    ) -> Result<Option<CandidateScore>, RepositoryError> {
        self.inner.fetch_score(recruitment_id, candidate_id)
    }

    fn list_scores_by_recruitment(
        &self,
        recruitment_id: &RecruitmentId,
        page: Page,
    ) -> Result<Vec<CandidateScore>, RepositoryError> {
        self.inner.list_scores_by_recruitment(recruitment_id, page)
    }
}

pub(super) struct UnavailableStore;

fn offline<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Unavailable("database offline".to_string()))
}

impl JobRepository for UnavailableStore {
    fn insert_job(&self, _job: Job) -> Result<Job, RepositoryError> {
        offline()
    }

    fn fetch_job(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        offline()
    }

    fn list_jobs(&self, _page: Page) -> Result<Vec<Job>, RepositoryError> {
        offline()
    }
}

impl CandidateRepository for UnavailableStore {
    fn insert_candidate(&self, _candidate: Candidate) -> Result<Candidate, RepositoryError> {
        offline()
    }

    fn fetch_candidate(&self, _id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        offline()
    }

    fn list_candidates(&self, _page: Page) -> Result<Vec<Candidate>, RepositoryError> {
        offline()
    }
}

impl RecruitmentRepository for UnavailableStore {
    fn insert_recruitment(
        &self,
        _recruitment: Recruitment,
    ) -> Result<Recruitment, RepositoryError> {
        offline()
    }

    fn fetch_recruitment(
        &self,
        _id: &RecruitmentId,
    ) -> Result<Option<Recruitment>, RepositoryError> {
        offline()
    }

    fn list_recruitments(&self, _page: Page) -> Result<Vec<Recruitment>, RepositoryError> {
        offline()
    }

    fn update_status(
        &self,
        _id: &RecruitmentId,
        _status: RecruitmentStatus,
    ) -> Result<(), RepositoryError> {
        offline()
    }
}

impl CandidateScoreRepository for UnavailableStore {
    fn insert_score(&self, _score: CandidateScore) -> Result<CandidateScore, RepositoryError> {
        offline()
    }

    fn fetch_score(
        &self,
        _recruitment_id: &RecruitmentId,
        _candidate_id: &CandidateId,
    ) -> Result<Option<CandidateScore>, RepositoryError> {
        offline()
    }

    fn list_scores_by_recruitment(
        &self,
        _recruitment_id: &RecruitmentId,
        _page: Page,
    ) -> Result<Vec<CandidateScore>, RepositoryError> {
        offline()
    }
}

pub(super) fn router_with_service(service: RecruitmentService<InMemoryEntityStore>) -> axum::Router {
    recruitment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
