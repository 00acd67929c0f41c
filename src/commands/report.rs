use crate::*;
use std::path::Path;

pub fn handle_report_commands(
    cli: &Cli,
    config: &ConfigFile,
    journal: &Path,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Report { view } => {
            let workouts = load_workouts(journal)?;
            let report = build_training_report(&workouts);
            // same placeholder for every view; JSON consumers branch on
            // emptiness themselves
            if !cli.json && workouts.is_empty() {
                println!("no workouts logged yet");
                return Ok(());
            }
            match view {
                ReportView::All => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&JsonOut {
                                ok: true,
                                data: report
                            })?
                        );
                    } else {
                        print_report_text(&report, &config.general.weight_unit);
                    }
                }
                ReportView::Frequency => {
                    print_out(cli.json, &report.frequency, |e| {
                        format!("{}\t{}", e.exercise, e.sessions)
                    })?;
                }
                ReportView::Volume => {
                    print_out(cli.json, &report.total_volume, |e| {
                        format!("{}\t{:.1}", e.exercise, e.volume)
                    })?;
                }
                ReportView::Pr => {
                    print_out(cli.json, &report.personal_records, |e| {
                        format!("{}\t{:.1}", e.exercise, e.volume)
                    })?;
                }
                ReportView::Cardio => {
                    print_one(cli.json, report.cardio_minutes, |m| format!("{:.1}", m))?;
                }
            }
        }
        Commands::Chart { metric, out_dir } => {
            let workouts = load_workouts(journal)?;
            let report = build_training_report(&workouts);
            let size = (config.general.chart_width, config.general.chart_height);
            let (want_frequency, want_volume) = match metric {
                ChartMetric::All => (true, true),
                ChartMetric::Frequency => (true, false),
                ChartMetric::Volume => (false, true),
            };
            let mut written: Vec<ChartFile> = Vec::new();
            if want_frequency && !report.frequency.is_empty() {
                written.push(write_frequency_chart(out_dir, &report.frequency, size)?);
            }
            if want_volume && !report.total_volume.is_empty() {
                written.push(write_volume_chart(out_dir, &report.total_volume, size)?);
            }
            audit(
                "chart",
                serde_json::json!({"metric": format!("{:?}", metric), "written": written.len()}),
            );
            if !cli.json && written.is_empty() {
                println!("no workouts logged yet");
            } else {
                print_out(cli.json, &written, |c| {
                    format!("wrote {} chart: {}", c.metric, c.path)
                })?;
            }
        }
        Commands::Log { .. } | Commands::List { .. } | Commands::Check => {
            unreachable!("handled by journal commands")
        }
    }

    Ok(())
}
