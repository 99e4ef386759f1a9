use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{
    Candidate, CandidateDraft, CandidateId, CandidateScore, Job, JobDraft, JobId, Recruitment,
    RecruitmentId, ScoreId, ScoreSubmission,
};
use super::hydration::Hydrator;
use super::lifecycle::LifecycleError;
use super::repository::{EntityStore, Page, RepositoryError};
use super::scoring::compute_score;

/// Use cases for jobs, candidates, recruitment drives and candidate scores.
///
/// Each call runs to completion against the store or fails without a partial write of its
/// own. Nothing is cached between calls.
pub struct RecruitmentService<S> {
    store: Arc<S>,
}

impl<S> RecruitmentService<S>
where
    S: EntityStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn hydrator(&self) -> Hydrator<'_, S> {
        Hydrator::new(self.store.as_ref())
    }

    pub fn create_job(&self, draft: JobDraft) -> Result<Job, RecruitmentServiceError> {
        let job = self.store.insert_job(draft.into_job(JobId::generate()))?;
        info!(job_id = %job.id, position = %job.position, "job created");
        Ok(job)
    }

    pub fn get_job(&self, id: &JobId) -> Result<Job, RecruitmentServiceError> {
        self.store
            .fetch_job(id)?
            .ok_or_else(|| RecruitmentServiceError::not_found("job", id))
    }

    pub fn list_jobs(&self, page: Page) -> Result<Vec<Job>, RecruitmentServiceError> {
        Ok(self.store.list_jobs(page)?)
    }

    pub fn create_candidate(
        &self,
        draft: CandidateDraft,
    ) -> Result<Candidate, RecruitmentServiceError> {
        let candidate = self
            .store
            .insert_candidate(draft.into_candidate(CandidateId::generate()))?;
        info!(candidate_id = %candidate.id, "candidate created");
        Ok(candidate)
    }

    pub fn get_candidate(&self, id: &CandidateId) -> Result<Candidate, RecruitmentServiceError> {
        self.store
            .fetch_candidate(id)?
            .ok_or_else(|| RecruitmentServiceError::not_found("candidate", id))
    }

    pub fn list_candidates(&self, page: Page) -> Result<Vec<Candidate>, RecruitmentServiceError> {
        Ok(self.store.list_candidates(page)?)
    }

    /// Opens a new drive for `job_id`. The job reference is stored as given, without
    /// checking that the job exists.
    pub fn create_recruitment(
        &self,
        job_id: JobId,
        deadline_date: &str,
    ) -> Result<Recruitment, RecruitmentServiceError> {
        let recruitment = Recruitment::open(RecruitmentId::generate(), job_id, deadline_date)?;
        let recruitment = self.store.insert_recruitment(recruitment)?;
        info!(
            recruitment_id = %recruitment.id,
            job_id = %recruitment.job_id,
            deadline = %recruitment.deadline,
            "recruitment opened"
        );
        Ok(recruitment)
    }

    pub fn get_recruitment(
        &self,
        id: &RecruitmentId,
    ) -> Result<Recruitment, RecruitmentServiceError> {
        let mut recruitment = self.fetch_recruitment(id)?;
        self.hydrator().hydrate_job(&mut recruitment)?;
        Ok(recruitment)
    }

    pub fn list_recruitments(
        &self,
        page: Page,
    ) -> Result<Vec<Recruitment>, RecruitmentServiceError> {
        let recruitments = self.store.list_recruitments(page)?;
        self.hydrator().hydrate_recruitments(recruitments)
    }

    /// Flips the stored status. `requested_status` is only recorded in the log; the drive
    /// always moves to the opposite of its current status.
    pub fn toggle_recruitment_status(
        &self,
        id: &RecruitmentId,
        requested_status: &str,
    ) -> Result<Recruitment, RecruitmentServiceError> {
        let mut recruitment = self.fetch_recruitment(id)?;
        let previous = recruitment.status;
        let next = recruitment.toggle_status();

        self.store
            .update_status(id, next)
            .map_err(|err| match err {
                RepositoryError::NotFound => RecruitmentServiceError::not_found("recruitment", id),
                other => other.into(),
            })?;

        info!(
            recruitment_id = %id,
            from = %previous,
            to = %next,
            requested = requested_status,
            "recruitment status toggled"
        );
        Ok(recruitment)
    }

    pub fn submit_candidate_score(
        &self,
        recruitment_id: RecruitmentId,
        submission: ScoreSubmission,
    ) -> Result<CandidateScore, RecruitmentServiceError> {
        let breakdown = compute_score(
            &submission.willing_to_relocate,
            submission.experience,
            &submission.attitude_score,
            &submission.skill_score,
        );

        let score = CandidateScore {
            id: ScoreId::generate(),
            candidate_id: submission.candidate_id,
            candidate: None,
            recruitment_id,
            recruitment: None,
            willing_to_relocate_score: breakdown.relocation,
            attitude_score: breakdown.attitude,
            skill_score: breakdown.skill,
            experience_score: breakdown.experience,
            overall_score: breakdown.overall,
        };

        let score = self.store.insert_score(score)?;
        info!(
            score_id = %score.id,
            recruitment_id = %score.recruitment_id,
            candidate_id = %score.candidate_id,
            overall = score.overall_score,
            "candidate score recorded"
        );
        Ok(score)
    }

    /// Ranked scores for one drive, each with its candidate, recruitment and job attached.
    /// Equal overall scores come back in whatever order the store yields them.
    pub fn list_scores_for_recruitment(
        &self,
        recruitment_id: &RecruitmentId,
        page: Page,
    ) -> Result<Vec<CandidateScore>, RecruitmentServiceError> {
        let scores = self
            .store
            .list_scores_by_recruitment(recruitment_id, page)?;
        debug!(recruitment_id = %recruitment_id, count = scores.len(), "scores loaded");
        self.hydrator().hydrate_scores(scores)
    }

    pub fn get_candidate_score(
        &self,
        recruitment_id: &RecruitmentId,
        candidate_id: &CandidateId,
    ) -> Result<CandidateScore, RecruitmentServiceError> {
        self.store
            .fetch_score(recruitment_id, candidate_id)?
            .ok_or_else(|| {
                RecruitmentServiceError::not_found(
                    "candidate score",
                    format!("{recruitment_id}/{candidate_id}"),
                )
            })
    }

    fn fetch_recruitment(
        &self,
        id: &RecruitmentId,
    ) -> Result<Recruitment, RecruitmentServiceError> {
        self.store
            .fetch_recruitment(id)?
            .ok_or_else(|| RecruitmentServiceError::not_found("recruitment", id))
    }
}

/// Error raised by the recruitment service.
#[derive(Debug, thiserror::Error)]
pub enum RecruitmentServiceError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    InvalidDate(#[from] LifecycleError),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl RecruitmentServiceError {
    pub(crate) fn not_found(entity: &'static str, id: impl Display) -> Self {
        let id = id.to_string();
        warn!(entity, id = %id, "lookup missed");
        Self::NotFound { entity, id }
    }
}
