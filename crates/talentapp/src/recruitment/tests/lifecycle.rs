use chrono::{NaiveDate, Timelike};

use crate::recruitment::domain::{JobId, Recruitment, RecruitmentId, RecruitmentStatus};
use crate::recruitment::lifecycle::{deadline_from_date, LifecycleError};

#[test]
fn deadline_extends_to_last_second_of_day() {
    let deadline = deadline_from_date("2024-03-15").expect("valid date");
    assert_eq!(
        deadline.date(),
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid")
    );
    assert_eq!(
        (deadline.hour(), deadline.minute(), deadline.second()),
        (23, 59, 59)
    );
}

#[test]
fn deadline_rejects_non_calendar_input() {
    for raw in ["", "15/03/2024", "2024-02-30", "tomorrow", "2024-13-01"] {
        assert_eq!(
            deadline_from_date(raw),
            Err(LifecycleError::InvalidDate {
                raw: raw.to_string()
            }),
            "input {raw:?}"
        );
    }
}

#[test]
fn new_recruitment_starts_open() {
    let recruitment = Recruitment::open(
        RecruitmentId::from("r-1"),
        JobId::from("job-1"),
        "2024-03-15",
    )
    .expect("valid recruitment");
    assert_eq!(recruitment.status, RecruitmentStatus::Open);
    assert!(recruitment.job.is_none());
}

#[test]
fn toggling_twice_restores_status() {
    for status in [RecruitmentStatus::Open, RecruitmentStatus::Closed] {
        assert_ne!(status.toggled(), status);
        assert_eq!(status.toggled().toggled(), status);
    }
}

#[test]
fn status_tokens_parse_and_render() {
    assert_eq!(RecruitmentStatus::parse("open"), Some(RecruitmentStatus::Open));
    assert_eq!(RecruitmentStatus::parse("Closed"), Some(RecruitmentStatus::Closed));
    assert_eq!(RecruitmentStatus::parse("close"), Some(RecruitmentStatus::Closed));
    assert_eq!(RecruitmentStatus::parse("archived"), None);
    assert_eq!(RecruitmentStatus::Closed.to_string(), "closed");
    assert_eq!(
        serde_json::to_value(RecruitmentStatus::Open).expect("serializes"),
        serde_json::json!("open")
    );
}
