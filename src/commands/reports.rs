use crate::cli::{Cli, Commands};
use crate::services::output::emit;
use crate::services::{outline, sales};

pub fn handle_report_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Sales { input, output } => {
            let totals = sales::summarize_file(input, output)?;
            emit(cli.json, totals.as_slice(), |out| sales::render(&totals, out))?;
        }
        Commands::Outline { input, output } => {
            let report = outline::count_tasks_file(input, output)?;
            emit(cli.json, report.as_slice(), |out| outline::render(&report, out))?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
