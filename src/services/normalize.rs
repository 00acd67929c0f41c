use crate::domain::models::{RawWorkoutRow, Workout};

pub fn parse_count(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim).filter(|s| !s.is_empty())?.parse().ok()
}

pub fn parse_measure(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw.map(str::trim).filter(|s| !s.is_empty())?.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

pub fn normalize_row(raw: &RawWorkoutRow) -> Workout {
    Workout {
        date: raw.date.clone().unwrap_or_default(),
        exercise: raw.exercise.clone().unwrap_or_default(),
        sets: parse_count(raw.sets.as_deref()).unwrap_or(0),
        reps: parse_count(raw.reps.as_deref()).unwrap_or(0),
        weight: parse_measure(raw.weight.as_deref()).unwrap_or(0.0),
        duration: parse_measure(raw.duration.as_deref()).unwrap_or(0.0),
    }
}

pub fn normalize_rows(raw: &[RawWorkoutRow]) -> Vec<Workout> {
    raw.iter().map(normalize_row).collect()
}

/// Numeric fields that were present yet failed to parse, i.e. values
/// `normalize_row` silently zeroed. Missing fields are legal short rows,
/// not corruption.
pub fn coerced_fields(raw: &RawWorkoutRow) -> usize {
    fn present(raw: Option<&str>) -> bool {
        raw.map(str::trim).is_some_and(|s| !s.is_empty())
    }

    let sets = raw.sets.as_deref();
    let reps = raw.reps.as_deref();
    let weight = raw.weight.as_deref();
    let duration = raw.duration.as_deref();

    usize::from(present(sets) && parse_count(sets).is_none())
        + usize::from(present(reps) && parse_count(reps).is_none())
        + usize::from(present(weight) && parse_measure(weight).is_none())
        + usize::from(present(duration) && parse_measure(duration).is_none())
}
