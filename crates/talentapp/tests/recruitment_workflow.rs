//! End-to-end scenarios for a recruitment drive through the public service facade: open a
//! drive, score candidates, rank them, and close the drive.

use std::io::Cursor;
use std::sync::Arc;

use talentapp::recruitment::{
    CandidateCsvImporter, InMemoryEntityStore, JobDraft, Page, RecruitmentService,
    RecruitmentServiceError, RecruitmentStatus, ScoreSubmission,
};

const ROSTER: &str = "\
name,address,experience,willing_to_relocate
Ayu,Jakarta,5,yes
Bima,Bandung,1,no
Citra,Surabaya,3,no
Dewi,Medan,4,yes
";

fn service() -> RecruitmentService<InMemoryEntityStore> {
    RecruitmentService::new(Arc::new(InMemoryEntityStore::default()))
}

fn job() -> JobDraft {
    JobDraft {
        position: "QA Engineer".to_string(),
        department: "Quality".to_string(),
        requester: "Sari".to_string(),
        job_description: "Own regression suites".to_string(),
        criteria: "Automation experience".to_string(),
    }
}

#[test]
fn imported_roster_is_scored_ranked_and_closed() {
    let service = service();
    let job = service.create_job(job()).expect("job created");
    let drive = service
        .create_recruitment(job.id.clone(), "2025-01-31")
        .expect("drive opened");

    let ratings = [("80", "90"), ("abc", "50"), ("70", "75"), ("65", "80")];
    let drafts = CandidateCsvImporter::from_reader(Cursor::new(ROSTER)).expect("roster parses");
    assert_eq!(drafts.len(), ratings.len());

    for (draft, (attitude, skill)) in drafts.into_iter().zip(ratings) {
        let candidate = service.create_candidate(draft).expect("candidate created");
        service
            .submit_candidate_score(
                drive.id.clone(),
                ScoreSubmission {
                    candidate_id: candidate.id.clone(),
                    willing_to_relocate: candidate.willing_to_relocate.clone(),
                    attitude_score: attitude.to_string(),
                    skill_score: skill.to_string(),
                    experience: candidate.experience,
                },
            )
            .expect("score submitted");
    }

    let ranked = service
        .list_scores_for_recruitment(&drive.id, Page::default())
        .expect("ranked");
    let board: Vec<(String, f64)> = ranked
        .iter()
        .map(|score| {
            let candidate = score.candidate.as_ref().expect("candidate hydrated");
            (candidate.name.clone(), score.overall_score)
        })
        .collect();

    // Dewi: 13 + 20 + 24 + 27
    assert_eq!(
        board,
        vec![
            ("Ayu".to_string(), 93.0),
            ("Dewi".to_string(), 84.0),
            ("Citra".to_string(), 70.5),
            ("Bima".to_string(), 40.0),
        ]
    );
    assert!(ranked.iter().all(|score| {
        score
            .recruitment
            .as_ref()
            .and_then(|recruitment| recruitment.job.as_ref())
            .map(|hydrated| hydrated.id == job.id)
            .unwrap_or(false)
    }));

    let top_two = service
        .list_scores_for_recruitment(&drive.id, Page::new(2, 0))
        .expect("first page");
    assert_eq!(top_two.len(), 2);

    let closed = service
        .toggle_recruitment_status(&drive.id, "close")
        .expect("closed");
    assert_eq!(closed.status, RecruitmentStatus::Closed);
    let reloaded = service.get_recruitment(&drive.id).expect("reloaded");
    assert_eq!(reloaded.status, RecruitmentStatus::Closed);
    assert_eq!(reloaded.job.map(|hydrated| hydrated.position), Some(job.position));
}

#[test]
fn unknown_drive_is_reported_not_found() {
    let service = service();

    let err = service
        .get_recruitment(&"does-not-exist".into())
        .expect_err("missing drive");
    assert!(matches!(err, RecruitmentServiceError::NotFound { .. }));
    assert_eq!(err.to_string(), "recruitment with id does-not-exist not found");
}
