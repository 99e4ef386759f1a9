pub(crate) const RELOCATION_WILLING: f64 = 100.0;
pub(crate) const RELOCATION_DEFAULT: f64 = 50.0;
pub(crate) const EXPERIENCE_DEFAULT: f64 = 50.0;

pub(crate) fn relocation_score(willing_to_relocate: &str) -> f64 {
    match willing_to_relocate {
        "yes" => RELOCATION_WILLING,
        "no" => RELOCATION_DEFAULT,
        _ => RELOCATION_DEFAULT,
    }
}

/// Year buckets: 1, 2, 3, 4 and five or more. Zero and negative years use the default.
pub(crate) fn experience_score(years: i32) -> f64 {
    match years {
        1 => 50.0,
        2 => 70.0,
        3 => 80.0,
        4 => 90.0,
        years if years >= 5 => 100.0,
        _ => EXPERIENCE_DEFAULT,
    }
}

/// Interviewer ratings arrive as free text; anything unparseable or non-finite counts as zero.
pub(crate) fn rating_score(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
