use crate::domain::models::{ConfigFile, RawWorkoutRow, Workout};
use crate::services::normalize::normalize_rows;
use std::path::{Path, PathBuf};

pub const JOURNAL_COLUMNS: [&str; 6] = ["date", "exercise", "sets", "reps", "weight", "duration"];

#[derive(thiserror::Error, Debug)]
pub enum JournalError {
    #[error("exercise name must not be empty")]
    MissingExercise,
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("{0} must be a finite non-negative number")]
    InvalidMeasure(&'static str),
}

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/repbook/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Local::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub fn validate_entry(entry: &Workout) -> anyhow::Result<()> {
    if entry.exercise.trim().is_empty() {
        return Err(JournalError::MissingExercise.into());
    }
    if chrono::NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").is_err() {
        return Err(JournalError::InvalidDate(entry.date.clone()).into());
    }
    if !entry.weight.is_finite() || entry.weight < 0.0 {
        return Err(JournalError::InvalidMeasure("weight").into());
    }
    if !entry.duration.is_finite() || entry.duration < 0.0 {
        return Err(JournalError::InvalidMeasure("duration").into());
    }
    Ok(())
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/repbook/config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn default_journal_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("repbook")
        .join("workouts.csv"))
}

pub fn resolve_journal_path(flag: Option<&Path>, config: &ConfigFile) -> anyhow::Result<PathBuf> {
    if let Some(p) = flag {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = &config.general.journal_path {
        return Ok(PathBuf::from(p));
    }
    default_journal_path()
}

pub fn ensure_journal(path: &Path) -> anyhow::Result<()> {
    // a zero-length file needs the header just like a missing one
    if std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false) {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{}\n", JOURNAL_COLUMNS.join(",")))?;
    Ok(())
}

pub fn append_workout(path: &Path, entry: &Workout) -> anyhow::Result<()> {
    ensure_journal(path)?;
    let file = std::fs::OpenOptions::new().append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.serialize(entry)?;
    wtr.flush()?;
    Ok(())
}

fn read_raw_rows<R: std::io::Read>(reader: R) -> Vec<RawWorkoutRow> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    rdr.deserialize().filter_map(Result::ok).collect()
}

pub fn load_raw_rows(path: &Path) -> anyhow::Result<Vec<RawWorkoutRow>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = std::fs::File::open(path)?;
    Ok(read_raw_rows(file))
}

pub fn load_workouts(path: &Path) -> anyhow::Result<Vec<Workout>> {
    Ok(normalize_rows(&load_raw_rows(path)?))
}

#[cfg(test)]
mod tests {
    use super::{read_raw_rows, resolve_journal_path, validate_entry, JournalError};
    use crate::domain::models::{ConfigFile, Workout};
    use std::path::Path;

    fn entry() -> Workout {
        Workout {
            date: "2025-03-01".to_string(),
            exercise: "Bench".to_string(),
            sets: 3,
            reps: 8,
            weight: 60.0,
            duration: 0.0,
        }
    }

    #[test]
    fn valid_entry_passes_validation() {
        assert!(validate_entry(&entry()).is_ok());
    }

    #[test]
    fn blank_exercise_is_rejected() {
        let mut e = entry();
        e.exercise = "   ".to_string();
        let err = validate_entry(&e).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::MissingExercise)
        ));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut e = entry();
        e.date = "01/03/2025".to_string();
        let err = validate_entry(&e).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::InvalidDate(_))
        ));
    }

    #[test]
    fn negative_and_non_finite_measures_are_rejected() {
        let mut e = entry();
        e.weight = -5.0;
        assert!(validate_entry(&e).is_err());
        e.weight = f64::NAN;
        assert!(validate_entry(&e).is_err());
        e.weight = 60.0;
        e.duration = f64::INFINITY;
        assert!(validate_entry(&e).is_err());
    }

    #[test]
    fn journal_flag_wins_over_config_path() {
        let mut config = ConfigFile::default();
        config.general.journal_path = Some("/from/config.csv".to_string());
        let p = resolve_journal_path(Some(Path::new("/from/flag.csv")), &config).unwrap();
        assert_eq!(p, Path::new("/from/flag.csv"));
        let p = resolve_journal_path(None, &config).unwrap();
        assert_eq!(p, Path::new("/from/config.csv"));
    }

    #[test]
    fn short_and_garbled_rows_still_read_as_raw_rows() {
        let csv = "date,exercise,sets,reps,weight,duration\n\
                   2025-03-01,Bench,3,8,60,0\n\
                   2025-03-02,Run\n\
                   2025-03-03,Squat,lots,8,abc,\n";
        let rows = read_raw_rows(csv.as_bytes());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].exercise.as_deref(), Some("Run"));
        assert_eq!(rows[1].sets, None);
        assert_eq!(rows[2].sets.as_deref(), Some("lots"));
        assert_eq!(rows[2].duration, None);
    }

    #[test]
    fn empty_input_reads_as_no_rows() {
        assert!(read_raw_rows("".as_bytes()).is_empty());
        assert!(read_raw_rows("date,exercise,sets,reps,weight,duration\n".as_bytes()).is_empty());
    }
}
