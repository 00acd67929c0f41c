use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::chart::*;
pub use services::journal::*;
pub use services::normalize::*;
pub use services::output::*;
pub use services::report::*;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if cli.json {
            let body = serde_json::json!({
                "ok": false,
                "error": { "code": error_code(&err), "message": format!("{:#}", err) }
            });
            println!("{}", body);
        } else {
            eprintln!("error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let journal = resolve_journal_path(cli.journal.as_deref(), &config)?;

    if handle_journal_commands(cli, &config, &journal)? {
        return Ok(());
    }
    handle_report_commands(cli, &config, &journal)
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(journal) = err.downcast_ref::<JournalError>() {
        return match journal {
            JournalError::MissingExercise => "INVALID_EXERCISE",
            JournalError::InvalidDate(_) => "INVALID_DATE",
            JournalError::InvalidMeasure(_) => "INVALID_MEASURE",
        };
    }
    if err.downcast_ref::<std::io::Error>().is_some() || err.downcast_ref::<csv::Error>().is_some()
    {
        return "JOURNAL_IO";
    }
    "RUNTIME"
}
