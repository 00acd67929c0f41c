use serde::{Deserialize, Serialize};

fn default_weight_unit() -> String {
    "kg".to_string()
}

fn default_chart_width() -> u32 {
    960
}

fn default_chart_height() -> u32 {
    540
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Workout {
    pub date: String,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub duration: f64,
}

impl Workout {
    pub fn volume(&self) -> f64 {
        f64::from(self.sets) * f64::from(self.reps) * self.weight
    }

    pub fn is_cardio(&self) -> bool {
        self.duration > 0.0
    }
}

/// Journal row before normalization. Missing columns and empty CSV
/// fields both read back as `None`; kept raw so coercion stays total.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawWorkoutRow {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub exercise: Option<String>,
    #[serde(default)]
    pub sets: Option<String>,
    #[serde(default)]
    pub reps: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FrequencyEntry {
    pub exercise: String,
    pub sessions: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct VolumeEntry {
    pub exercise: String,
    pub volume: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TrainingReport {
    pub frequency: Vec<FrequencyEntry>,
    pub total_volume: Vec<VolumeEntry>,
    pub personal_records: Vec<VolumeEntry>,
    pub cardio_minutes: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct JournalCheck {
    pub entries: usize,
    pub coerced_values: usize,
    pub status: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ChartFile {
    pub metric: String,
    pub bars: usize,
    pub path: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub journal_path: Option<String>,
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            journal_path: None,
            weight_unit: default_weight_unit(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Workout;

    fn entry(sets: u32, reps: u32, weight: f64, duration: f64) -> Workout {
        Workout {
            date: "2025-01-01".to_string(),
            exercise: "Bench".to_string(),
            sets,
            reps,
            weight,
            duration,
        }
    }

    #[test]
    fn volume_is_sets_times_reps_times_weight() {
        assert_eq!(entry(3, 10, 50.0, 0.0).volume(), 1500.0);
    }

    #[test]
    fn volume_is_zero_when_any_factor_is_zero() {
        assert_eq!(entry(0, 10, 50.0, 30.0).volume(), 0.0);
        assert_eq!(entry(3, 0, 50.0, 0.0).volume(), 0.0);
        assert_eq!(entry(3, 10, 0.0, 0.0).volume(), 0.0);
    }

    #[test]
    fn cardio_is_any_entry_with_positive_duration() {
        assert!(entry(0, 0, 0.0, 30.0).is_cardio());
        assert!(!entry(3, 10, 50.0, 0.0).is_cardio());
    }
}
