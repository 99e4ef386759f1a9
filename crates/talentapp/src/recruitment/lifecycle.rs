use chrono::{NaiveDate, NaiveDateTime};

use super::domain::{JobId, Recruitment, RecruitmentId, RecruitmentStatus};

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("deadline '{raw}' is not a YYYY-MM-DD date")]
    InvalidDate { raw: String },
}

impl RecruitmentStatus {
    /// The only transition a drive supports: open becomes closed and closed becomes open.
    pub const fn toggled(self) -> Self {
        match self {
            RecruitmentStatus::Open => RecruitmentStatus::Closed,
            RecruitmentStatus::Closed => RecruitmentStatus::Open,
        }
    }
}

/// Extends a submitted calendar date to its last second, 23:59:59.
pub fn deadline_from_date(raw: &str) -> Result<NaiveDateTime, LifecycleError> {
    let invalid = || LifecycleError::InvalidDate {
        raw: raw.to_string(),
    };

    NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT)
        .map_err(|_| invalid())?
        .and_hms_opt(23, 59, 59)
        .ok_or_else(invalid)
}

impl Recruitment {
    /// New drive for `job_id`, open until the end of `deadline_date`.
    pub fn open(
        id: RecruitmentId,
        job_id: JobId,
        deadline_date: &str,
    ) -> Result<Self, LifecycleError> {
        Ok(Self {
            id,
            job_id,
            job: None,
            status: RecruitmentStatus::Open,
            deadline: deadline_from_date(deadline_date)?,
        })
    }

    pub fn toggle_status(&mut self) -> RecruitmentStatus {
        self.status = self.status.toggled();
        self.status
    }
}
