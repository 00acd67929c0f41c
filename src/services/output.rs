use crate::domain::models::{JsonOut, TrainingReport};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_report_text(report: &TrainingReport, weight_unit: &str) {
    if report.frequency.is_empty() {
        println!("no workouts logged yet");
        return;
    }
    println!("workout frequency:");
    for e in &report.frequency {
        println!("{}\t{}", e.exercise, e.sessions);
    }
    println!("total volume ({}):", weight_unit);
    for e in &report.total_volume {
        println!("{}\t{:.1}", e.exercise, e.volume);
    }
    println!("personal records ({}):", weight_unit);
    for e in &report.personal_records {
        println!("{}\t{:.1}", e.exercise, e.volume);
    }
    println!("cardio minutes: {:.1}", report.cardio_minutes);
}
