use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{
    Candidate, CandidateId, CandidateScore, Job, JobId, Recruitment, RecruitmentId,
    RecruitmentStatus,
};
use super::repository::{
    CandidateRepository, CandidateScoreRepository, JobRepository, Page, RecruitmentRepository,
    RepositoryError,
};

/// Process-local entity store. Rows are kept in insertion order, which is also the order
/// list queries return them in.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEntityStore {
    jobs: Arc<Mutex<Vec<Job>>>,
    candidates: Arc<Mutex<Vec<Candidate>>>,
    recruitments: Arc<Mutex<Vec<Recruitment>>>,
    scores: Arc<Mutex<Vec<CandidateScore>>>,
}

fn lock<T>(table: &Mutex<Vec<T>>) -> Result<MutexGuard<'_, Vec<T>>, RepositoryError> {
    table
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
}

fn paginate<T: Clone>(rows: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    rows.skip(page.offset).take(page.limit).collect()
}

impl JobRepository for InMemoryEntityStore {
    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut rows = lock(&self.jobs)?;
        if rows.iter().any(|row| row.id == job.id) {
            return Err(RepositoryError::Conflict);
        }
        rows.push(job.clone());
        Ok(job)
    }

    fn fetch_job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let rows = lock(&self.jobs)?;
        Ok(rows.iter().find(|row| &row.id == id).cloned())
    }

    fn list_jobs(&self, page: Page) -> Result<Vec<Job>, RepositoryError> {
        let rows = lock(&self.jobs)?;
        Ok(paginate(rows.iter().cloned(), page))
    }
}

impl CandidateRepository for InMemoryEntityStore {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut rows = lock(&self.candidates)?;
        if rows.iter().any(|row| row.id == candidate.id) {
            return Err(RepositoryError::Conflict);
        }
        rows.push(candidate.clone());
        Ok(candidate)
    }

    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let rows = lock(&self.candidates)?;
        Ok(rows.iter().find(|row| &row.id == id).cloned())
    }

    fn list_candidates(&self, page: Page) -> Result<Vec<Candidate>, RepositoryError> {
        let rows = lock(&self.candidates)?;
        Ok(paginate(rows.iter().cloned(), page))
    }
}

impl RecruitmentRepository for InMemoryEntityStore {
    fn insert_recruitment(
        &self,
        recruitment: Recruitment,
    ) -> Result<Recruitment, RepositoryError> {
        let mut rows = lock(&self.recruitments)?;
        if rows.iter().any(|row| row.id == recruitment.id) {
            return Err(RepositoryError::Conflict);
        }
        rows.push(recruitment.detached());
        Ok(recruitment)
    }

    fn fetch_recruitment(
        &self,
        id: &RecruitmentId,
    ) -> Result<Option<Recruitment>, RepositoryError> {
        let rows = lock(&self.recruitments)?;
        Ok(rows.iter().find(|row| &row.id == id).cloned())
    }

    fn list_recruitments(&self, page: Page) -> Result<Vec<Recruitment>, RepositoryError> {
        let rows = lock(&self.recruitments)?;
        Ok(paginate(rows.iter().cloned(), page))
    }

    fn update_status(
        &self,
        id: &RecruitmentId,
        status: RecruitmentStatus,
    ) -> Result<(), RepositoryError> {
        let mut rows = lock(&self.recruitments)?;
        let row = rows
            .iter_mut()
            .find(|row| &row.id == id)
            .ok_or(RepositoryError::NotFound)?;
        row.status = status;
        Ok(())
    }
}

impl CandidateScoreRepository for InMemoryEntityStore {
    fn insert_score(&self, score: CandidateScore) -> Result<CandidateScore, RepositoryError> {
        let mut rows = lock(&self.scores)?;
        if rows.iter().any(|row| row.id == score.id) {
            return Err(RepositoryError::Conflict);
        }
        rows.push(score.detached());
        Ok(score)
    }

    fn fetch_score(
        &self,
        recruitment_id: &RecruitmentId,
        candidate_id: &CandidateId,
    ) -> Result<Option<CandidateScore>, RepositoryError> {
        let rows = lock(&self.scores)?;
        Ok(rows
            .iter()
            .find(|row| &row.recruitment_id == recruitment_id && &row.candidate_id == candidate_id)
            .cloned())
    }

    fn list_scores_by_recruitment(
        &self,
        recruitment_id: &RecruitmentId,
        page: Page,
    ) -> Result<Vec<CandidateScore>, RepositoryError> {
        let rows = lock(&self.scores)?;
        let mut matching: Vec<CandidateScore> = rows
            .iter()
            .filter(|row| &row.recruitment_id == recruitment_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        Ok(paginate(matching.into_iter(), page))
    }
}
