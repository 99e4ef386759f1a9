use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Fresh random identifier for a record about to be stored.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

identifier!(
    /// Identifier wrapper for job postings.
    JobId
);
identifier!(
    /// Identifier wrapper for candidates.
    CandidateId
);
identifier!(
    /// Identifier wrapper for recruitment drives.
    RecruitmentId
);
identifier!(
    /// Identifier wrapper for stored candidate scores.
    ScoreId
);

/// Job posting a recruitment drive hires for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub position: String,
    pub department: String,
    pub requester: String,
    pub job_description: String,
    pub criteria: String,
}

/// Caller supplied fields for a new job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub position: String,
    pub department: String,
    pub requester: String,
    pub job_description: String,
    pub criteria: String,
}

impl JobDraft {
    pub fn into_job(self, id: JobId) -> Job {
        Job {
            id,
            position: self.position,
            department: self.department,
            requester: self.requester,
            job_description: self.job_description,
            criteria: self.criteria,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub address: String,
    pub experience: i32,
    /// `"yes"` or `"no"` as captured on the intake form.
    pub willing_to_relocate: String,
}

/// Caller supplied fields for a new candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDraft {
    pub name: String,
    pub address: String,
    pub experience: i32,
    pub willing_to_relocate: String,
}

impl CandidateDraft {
    pub fn into_candidate(self, id: CandidateId) -> Candidate {
        Candidate {
            id,
            name: self.name,
            address: self.address,
            experience: self.experience,
            willing_to_relocate: self.willing_to_relocate,
        }
    }
}

/// Status of a recruitment drive. Only ever toggled between the two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitmentStatus {
    Open,
    Closed,
}

impl RecruitmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RecruitmentStatus::Open => "open",
            RecruitmentStatus::Closed => "closed",
        }
    }

    /// Parses a status token. `close` is accepted for compatibility with older form posts.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Some(Self::Open),
            "closed" | "close" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for RecruitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time boxed hiring drive for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recruitment {
    pub id: RecruitmentId,
    pub job_id: JobId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    pub status: RecruitmentStatus,
    pub deadline: NaiveDateTime,
}

impl Recruitment {
    /// Copy without hydrated relations, the shape the store persists.
    pub fn detached(&self) -> Self {
        Self {
            job: None,
            ..self.clone()
        }
    }
}

/// Stored evaluation of one candidate within one recruitment drive.
///
/// `overall_score` is fixed at creation time; reads never recompute it from the components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub id: ScoreId,
    pub candidate_id: CandidateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
    pub recruitment_id: RecruitmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment: Option<Recruitment>,
    pub willing_to_relocate_score: f64,
    pub attitude_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub overall_score: f64,
}

impl CandidateScore {
    pub fn detached(&self) -> Self {
        Self {
            candidate: None,
            recruitment: None,
            ..self.clone()
        }
    }
}

/// Raw evaluation inputs for a candidate, as entered by the interviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub candidate_id: CandidateId,
    pub willing_to_relocate: String,
    pub attitude_score: String,
    pub skill_score: String,
    pub experience: i32,
}
