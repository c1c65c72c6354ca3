use crate::cli::{Cli, Commands, ConfigCommands};
use crate::services::output::emit;
use crate::services::{config_store, grid, logbook, replace};

pub fn handle_file_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Grid { output, rows, cols } => {
            let report = grid::write_grid(output, *rows, *cols)?;
            emit(cli.json, &report, |out| {
                writeln!(
                    out,
                    "wrote {}x{} grid to {}",
                    report.rows,
                    report.cols,
                    report.path.display()
                )
            })?;
        }
        Commands::Log { file, message } => {
            let report = logbook::append(file, message)?;
            emit(cli.json, &report, |out| writeln!(out, "{}", report.line))?;
        }
        Commands::Replace {
            input,
            output,
            old,
            new,
        } => {
            let report = replace::find_and_replace(input, output, old, new)?;
            emit(cli.json, &report, |out| {
                writeln!(
                    out,
                    "replaced {} occurrences, wrote {}",
                    report.replacements,
                    report.output.display()
                )
            })?;
        }
        Commands::Config { command } => handle_config_commands(cli.json, command)?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn handle_config_commands(json: bool, command: &ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show { file } => {
            let map = config_store::read_config(file)?;
            let entries = config_store::entries(&map);
            emit(json, entries.as_slice(), |out| config_store::render(&map, out))?;
        }
        ConfigCommands::Get { file, key } => {
            let entry = config_store::get_value(file, key)?;
            emit(json, &entry, |out| writeln!(out, "{}", entry.value))?;
        }
        ConfigCommands::Set { file, pairs } => {
            let map = config_store::set_values(file, pairs)?;
            emit(json, &map.len(), |out| {
                writeln!(out, "{} keys in {}", map.len(), file.display())
            })?;
        }
    }
    Ok(())
}
