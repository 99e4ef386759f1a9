//! Request payloads accepted over HTTP and their structural checks.
//!
//! These checks only cover shape: required fields and the relocation token. Scoring
//! semantics (defaults for odd values) stay in the scoring engine.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::domain::{
    CandidateDraft, CandidateId, JobDraft, JobId, RecruitmentStatus, ScoreSubmission,
};

const RELOCATION_TOKENS: [&str; 2] = ["yes", "no"];

/// One rejected field and the reason, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field errors found in a payload, ordered by field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid request: {}", summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{} {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                let field = field.to_string();
                failures.iter().map(move |failure| FieldError {
                    field: field.clone(),
                    message: failure
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| failure.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|left, right| left.field.cmp(&right.field));
        Self(fields)
    }
}

/// Runs the derived checks and converts failures into the API error shape.
pub fn check<T: Validate>(payload: &T) -> Result<(), ValidationErrors> {
    payload.validate().map_err(ValidationErrors::from)
}

fn rejected(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rejected("required", "This field is required"));
    }
    Ok(())
}

fn non_zero(value: i32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(rejected("required", "This field is required"));
    }
    Ok(())
}

fn relocation_token(value: &str) -> Result<(), ValidationError> {
    non_blank(value)?;
    if !RELOCATION_TOKENS.contains(&value) {
        return Err(rejected(
            "one_of",
            format!("Should be one of {}", RELOCATION_TOKENS.join(", ")),
        ));
    }
    Ok(())
}

fn status_token(value: &str) -> Result<(), ValidationError> {
    non_blank(value)?;
    if RecruitmentStatus::parse(value).is_none() {
        return Err(rejected("one_of", "Should be one of open, closed"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct JobCreateRequest {
    #[validate(custom(function = "non_blank"))]
    pub position: String,
    #[validate(custom(function = "non_blank"))]
    pub department: String,
    #[validate(custom(function = "non_blank"))]
    pub requester: String,
    #[validate(custom(function = "non_blank"))]
    pub job_description: String,
    #[validate(custom(function = "non_blank"))]
    pub criteria: String,
}

impl From<JobCreateRequest> for JobDraft {
    fn from(request: JobCreateRequest) -> Self {
        Self {
            position: request.position,
            department: request.department,
            requester: request.requester,
            job_description: request.job_description,
            criteria: request.criteria,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CandidateCreateRequest {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(custom(function = "non_blank"))]
    pub address: String,
    #[validate(custom(function = "non_zero"))]
    pub experience: i32,
    #[validate(custom(function = "non_blank"))]
    pub willing_to_relocate: String,
}

impl From<CandidateCreateRequest> for CandidateDraft {
    fn from(request: CandidateCreateRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
            experience: request.experience,
            willing_to_relocate: request.willing_to_relocate,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RecruitmentCreateRequest {
    #[validate(custom(function = "non_blank"))]
    pub job_id: String,
    #[validate(custom(function = "non_blank"))]
    pub deadline: String,
}

impl RecruitmentCreateRequest {
    pub fn job_id(&self) -> JobId {
        JobId(self.job_id.trim().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RecruitmentUpdateStatusRequest {
    #[validate(custom(function = "status_token"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CandidateScoreCreateRequest {
    #[validate(custom(function = "non_blank"))]
    pub candidate_id: String,
    #[serde(alias = "willing_to_relocate")]
    #[validate(custom(function = "relocation_token"))]
    pub willing_to_relocate_score: String,
    #[validate(custom(function = "non_blank"))]
    pub attitude_score: String,
    #[validate(custom(function = "non_blank"))]
    pub skill_score: String,
    #[validate(custom(function = "non_zero"))]
    pub experience: i32,
}

impl From<CandidateScoreCreateRequest> for ScoreSubmission {
    fn from(request: CandidateScoreCreateRequest) -> Self {
        Self {
            candidate_id: CandidateId(request.candidate_id.trim().to_string()),
            willing_to_relocate: request.willing_to_relocate_score,
            attitude_score: request.attitude_score,
            skill_score: request.skill_score,
            experience: request.experience,
        }
    }
}
