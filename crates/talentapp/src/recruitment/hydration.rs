//! Attaches related entities to partially loaded records.
//!
//! Every relation costs one point read against the injected store, so hydrating a list of
//! `n` scores issues `3n` sequential reads. That is fine for a page of a few dozen rows; a
//! larger page wants a batched loader keyed by the set of foreign ids instead.

use tracing::debug;

use super::domain::{CandidateScore, Recruitment};
use super::repository::{CandidateRepository, JobRepository, RecruitmentRepository};
use super::service::RecruitmentServiceError;

pub struct Hydrator<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> Hydrator<'a, S>
where
    S: CandidateRepository + RecruitmentRepository + JobRepository + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn hydrate_candidate(
        &self,
        score: &mut CandidateScore,
    ) -> Result<(), RecruitmentServiceError> {
        let candidate = self
            .store
            .fetch_candidate(&score.candidate_id)?
            .ok_or_else(|| RecruitmentServiceError::not_found("candidate", &score.candidate_id))?;
        score.candidate = Some(candidate);
        Ok(())
    }

    pub fn hydrate_recruitment(
        &self,
        score: &mut CandidateScore,
    ) -> Result<(), RecruitmentServiceError> {
        let recruitment = self
            .store
            .fetch_recruitment(&score.recruitment_id)?
            .ok_or_else(|| {
                RecruitmentServiceError::not_found("recruitment", &score.recruitment_id)
            })?;
        score.recruitment = Some(recruitment);
        Ok(())
    }

    pub fn hydrate_job(&self, recruitment: &mut Recruitment) -> Result<(), RecruitmentServiceError> {
        let job = self
            .store
            .fetch_job(&recruitment.job_id)?
            .ok_or_else(|| RecruitmentServiceError::not_found("job", &recruitment.job_id))?;
        recruitment.job = Some(job);
        Ok(())
    }

    /// Candidate, then recruitment, then the recruitment's job.
    pub fn hydrate_score(&self, score: &mut CandidateScore) -> Result<(), RecruitmentServiceError> {
        self.hydrate_candidate(score)?;
        self.hydrate_recruitment(score)?;
        if let Some(recruitment) = score.recruitment.as_mut() {
            self.hydrate_job(recruitment)?;
        }
        Ok(())
    }

    pub fn hydrate_scores(
        &self,
        mut scores: Vec<CandidateScore>,
    ) -> Result<Vec<CandidateScore>, RecruitmentServiceError> {
        debug!(count = scores.len(), "hydrating candidate scores");
        for score in &mut scores {
            self.hydrate_score(score)?;
        }
        Ok(scores)
    }

    pub fn hydrate_recruitments(
        &self,
        mut recruitments: Vec<Recruitment>,
    ) -> Result<Vec<Recruitment>, RecruitmentServiceError> {
        debug!(count = recruitments.len(), "hydrating recruitments");
        for recruitment in &mut recruitments {
            self.hydrate_job(recruitment)?;
        }
        Ok(recruitments)
    }
}
