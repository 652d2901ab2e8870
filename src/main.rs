use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use log::info;

use capital_gains::accounting::accountant::Accountant;
use capital_gains::app::{Args, Command};
use capital_gains::config::Config;
use capital_gains::import;

fn main() {
    env_logger::init();

    let args = Args::new();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config_path.as_deref())
        .with_context(|| format!("Unable to read config file {:?}", args.config_path))?;

    match args.command {
        Command::Import { data_directory } => {
            let imported = import::import_directory(&data_directory, &config.tx_source)
                .with_context(|| format!("Unable to import from {}", data_directory))?;
            let output = Path::new(&data_directory).join(import::LEDGER_FILE);
            import::write_ledger(&output, &imported.ledger)
                .with_context(|| format!("Unable to write {}", output.display()))?;
            info!("Wrote {} transactions to {}", imported.ledger.len(), output.display());
        }
        Command::Gains { data_file, output_path, format, summary } => {
            let report = Accountant::new()
                .method(config.method)
                .analyze_file(&data_file)
                .with_context(|| format!("Unable to calculate gains for {}", data_file))?;

            let format = format.unwrap_or(config.output_format);
            match output_path {
                Some(path) => report
                    .write_to_file(&path, format)
                    .with_context(|| format!("Unable to write {}", path))?,
                None => report.write(io::stdout(), format)?,
            }

            if summary {
                let totals = report.summary();
                eprintln!(
                    "short-term: {} records, proceeds {}, cost basis {}, gains {}",
                    totals.short_term.records,
                    totals.short_term.proceeds,
                    totals.short_term.cost_basis,
                    totals.short_term.gains
                );
                eprintln!(
                    "long-term: {} records, proceeds {}, cost basis {}, gains {}",
                    totals.long_term.records,
                    totals.long_term.proceeds,
                    totals.long_term.cost_basis,
                    totals.long_term.gains
                );
                eprintln!("net gains: {}", totals.net_gains());
            }
        }
    }
    Ok(())
}
