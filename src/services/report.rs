use crate::domain::models::{FrequencyEntry, TrainingReport, VolumeEntry, Workout};

pub fn frequency_by_exercise(workouts: &[Workout]) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    for w in workouts {
        match entries.iter_mut().find(|e| e.exercise == w.exercise) {
            Some(entry) => entry.sessions += 1,
            None => entries.push(FrequencyEntry {
                exercise: w.exercise.clone(),
                sessions: 1,
            }),
        }
    }
    entries.sort_by(|a, b| b.sessions.cmp(&a.sessions));
    entries
}

pub fn total_volume_by_exercise(workouts: &[Workout]) -> Vec<VolumeEntry> {
    let mut entries: Vec<VolumeEntry> = Vec::new();
    for w in workouts {
        match entries.iter_mut().find(|e| e.exercise == w.exercise) {
            Some(entry) => entry.volume += w.volume(),
            None => entries.push(VolumeEntry {
                exercise: w.exercise.clone(),
                volume: w.volume(),
            }),
        }
    }
    entries.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    entries
}

pub fn personal_records(workouts: &[Workout]) -> Vec<VolumeEntry> {
    let mut entries: Vec<VolumeEntry> = Vec::new();
    for w in workouts {
        let volume = w.volume();
        match entries.iter_mut().find(|e| e.exercise == w.exercise) {
            Some(entry) => {
                if volume > entry.volume {
                    entry.volume = volume;
                }
            }
            None => entries.push(VolumeEntry {
                exercise: w.exercise.clone(),
                volume,
            }),
        }
    }
    entries.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    entries
}

pub fn cardio_minutes_total(workouts: &[Workout]) -> f64 {
    workouts.iter().map(|w| w.duration).sum()
}

pub fn build_training_report(workouts: &[Workout]) -> TrainingReport {
    TrainingReport {
        frequency: frequency_by_exercise(workouts),
        total_volume: total_volume_by_exercise(workouts),
        personal_records: personal_records(workouts),
        cardio_minutes: cardio_minutes_total(workouts),
    }
}
