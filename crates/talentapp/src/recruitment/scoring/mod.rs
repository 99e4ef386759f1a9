//! Weighted scoring of raw candidate evaluations.
//!
//! Scoring is a pure lookup-and-sum: it never fails and never touches storage. Unknown
//! relocation tokens and out-of-range experience fall back to 50, unparseable ratings to 0.

mod rules;
mod weights;

pub use weights::{ScoreWeights, SCORE_WEIGHTS};

use serde::{Deserialize, Serialize};

/// Component scores plus the weighted overall score, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub relocation: f64,
    pub experience: f64,
    pub attitude: f64,
    pub skill: f64,
    pub overall: f64,
}

pub fn compute_score(
    willing_to_relocate: &str,
    experience_years: i32,
    attitude_raw: &str,
    skill_raw: &str,
) -> ScoreBreakdown {
    let relocation = rules::relocation_score(willing_to_relocate);
    let experience = rules::experience_score(experience_years);
    let attitude = rules::rating_score(attitude_raw);
    let skill = rules::rating_score(skill_raw);

    let weighted = attitude * SCORE_WEIGHTS.attitude
        + relocation * SCORE_WEIGHTS.relocation
        + skill * SCORE_WEIGHTS.skill
        + experience * SCORE_WEIGHTS.experience;

    ScoreBreakdown {
        relocation,
        experience,
        attitude,
        skill,
        overall: rules::round2(weighted),
    }
}
