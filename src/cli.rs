use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repbook", version, about = "Workout journal CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Journal CSV path (overrides config and the default location)"
    )]
    pub journal: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Log {
        exercise: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value_t = 0)]
        sets: u32,
        #[arg(long, default_value_t = 0)]
        reps: u32,
        #[arg(long, default_value_t = 0.0)]
        weight: f64,
        #[arg(long, default_value_t = 0.0)]
        duration: f64,
    },
    List {
        #[arg(long)]
        exercise: Option<String>,
    },
    Report {
        #[arg(long, value_enum, default_value_t = ReportView::All)]
        view: ReportView,
    },
    Chart {
        #[arg(long, value_enum, default_value_t = ChartMetric::All)]
        metric: ChartMetric,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    Check,
}

#[derive(Clone, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportView {
    All,
    Frequency,
    Volume,
    Pr,
    Cardio,
}

#[derive(Clone, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    All,
    Frequency,
    Volume,
}
