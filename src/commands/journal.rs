use crate::*;
use std::path::Path;

pub fn handle_journal_commands(
    cli: &Cli,
    config: &ConfigFile,
    journal: &Path,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Log {
            exercise,
            date,
            sets,
            reps,
            weight,
            duration,
        } => {
            let entry = Workout {
                date: date.clone().unwrap_or_else(today),
                exercise: exercise.trim().to_string(),
                sets: *sets,
                reps: *reps,
                weight: *weight,
                duration: *duration,
            };
            validate_entry(&entry)?;
            append_workout(journal, &entry)?;
            audit(
                "log",
                serde_json::json!({"exercise": entry.exercise, "date": entry.date}),
            );
            print_one(cli.json, entry, |w| {
                format!("logged {} on {}", w.exercise, w.date)
            })?;
        }
        Commands::List { exercise } => {
            let mut workouts = load_workouts(journal)?;
            if let Some(name) = exercise {
                workouts.retain(|w| w.exercise == *name);
            }
            let unit = &config.general.weight_unit;
            print_out(cli.json, &workouts, |w| {
                // a record may carry both payloads; show whichever are set
                let has_strength = w.sets > 0 || w.reps > 0 || w.weight > 0.0;
                let mut row = format!("{}\t{}", w.date, w.exercise);
                if has_strength || !w.is_cardio() {
                    row.push_str(&format!(
                        "\t{}x{}\t{} {}",
                        w.sets, w.reps, w.weight, unit
                    ));
                }
                if w.is_cardio() {
                    row.push_str(&format!("\t{} min", w.duration));
                }
                row
            })?;
        }
        Commands::Check => {
            let rows = load_raw_rows(journal)?;
            let coerced: usize = rows.iter().map(coerced_fields).sum();
            let check = JournalCheck {
                entries: rows.len(),
                coerced_values: coerced,
                status: if coerced == 0 { "clean" } else { "coerced" }.to_string(),
            };
            print_one(cli.json, check, |c| {
                format!(
                    "{} entries, {} coerced values ({})",
                    c.entries, c.coerced_values, c.status
                )
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
