use crate::infra::build_service;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use talentapp::error::AppError;
use talentapp::recruitment::{
    compute_score, CandidateCsvImporter, CandidateDraft, JobDraft, Page, ScoreSubmission,
};

/// Attitude and skill ratings handed out round-robin to demo candidates.
const DEMO_RATINGS: [(&str, &str); 4] = [("80", "90"), ("70", "75"), ("65", "80"), ("abc", "50")];

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Whether the candidate is willing to relocate (yes/no)
    #[arg(long, default_value = "no")]
    pub(crate) relocate: String,
    /// Years of experience
    #[arg(long, default_value_t = 0)]
    pub(crate) experience: i32,
    /// Attitude rating, 0-100
    #[arg(long, default_value = "0")]
    pub(crate) attitude: String,
    /// Skill rating, 0-100
    #[arg(long, default_value = "0")]
    pub(crate) skill: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional candidate roster (name,address,experience,willing_to_relocate)
    #[arg(long)]
    pub(crate) candidates_csv: Option<PathBuf>,
    /// Drive deadline (YYYY-MM-DD). Defaults to today + 14 days.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) deadline: Option<NaiveDate>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let breakdown = compute_score(&args.relocate, args.experience, &args.attitude, &args.skill);

    println!("Relocation: {:.2}", breakdown.relocation);
    println!("Experience: {:.2}", breakdown.experience);
    println!("Attitude:   {:.2}", breakdown.attitude);
    println!("Skill:      {:.2}", breakdown.skill);
    println!("Overall:    {:.2}", breakdown.overall);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let deadline = args
        .deadline
        .unwrap_or_else(|| Local::now().date_naive() + Duration::days(14));
    let drafts = match args.candidates_csv {
        Some(path) => CandidateCsvImporter::from_path(path)?,
        None => demo_roster(),
    };

    let service = build_service();
    let job = service.create_job(JobDraft {
        position: "Backend Engineer".to_string(),
        department: "Platform".to_string(),
        requester: "Hiring Manager".to_string(),
        job_description: "Build and operate the recruitment APIs".to_string(),
        criteria: "Three or more years shipping services".to_string(),
    })?;
    let drive = service.create_recruitment(job.id.clone(), &deadline.format("%Y-%m-%d").to_string())?;

    for (draft, (attitude, skill)) in drafts.into_iter().zip(DEMO_RATINGS.iter().cycle()) {
        let candidate = service.create_candidate(draft)?;
        service.submit_candidate_score(
            drive.id.clone(),
            ScoreSubmission {
                candidate_id: candidate.id.clone(),
                willing_to_relocate: candidate.willing_to_relocate.clone(),
                attitude_score: attitude.to_string(),
                skill_score: skill.to_string(),
                experience: candidate.experience,
            },
        )?;
    }

    let ranking = service.list_scores_for_recruitment(&drive.id, Page::new(100, 0))?;

    println!("=== Recruitment Drive ===");
    println!("Position: {} ({})", job.position, job.department);
    println!("Drive: {} [{}]", drive.id, drive.status);
    println!("Deadline: {}", drive.deadline);
    println!();
    println!("=== Ranking ===");
    for (rank, score) in ranking.iter().enumerate() {
        let name = score
            .candidate
            .as_ref()
            .map(|candidate| candidate.name.as_str())
            .unwrap_or("<unknown>");
        println!(
            "{:>2}. {:<20} overall {:>6.2} (relocate {:.2}, experience {:.2}, attitude {:.2}, skill {:.2})",
            rank + 1,
            name,
            score.overall_score,
            score.willing_to_relocate_score,
            score.experience_score,
            score.attitude_score,
            score.skill_score,
        );
    }

    let closed = service.toggle_recruitment_status(&drive.id, "closed")?;
    println!();
    println!("Drive {} is now {}", closed.id, closed.status);
    Ok(())
}

fn demo_roster() -> Vec<CandidateDraft> {
    [
        ("Ayu", "Jakarta", 5, "yes"),
        ("Citra", "Surabaya", 3, "no"),
        ("Dewi", "Medan", 4, "yes"),
        ("Bima", "Bandung", 1, "no"),
    ]
    .into_iter()
    .map(|(name, address, experience, relocate)| CandidateDraft {
        name: name.to_string(),
        address: address.to_string(),
        experience,
        willing_to_relocate: relocate.to_string(),
    })
    .collect()
}
