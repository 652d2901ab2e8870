use std::ffi::OsString;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind, SubCommand};

use crate::accounting::reports::OutputFormat;

pub fn build_cli() -> App<'static, 'static> {
    App::new("capital_gains")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes LIFO capital gains from a ledger of crypto transactions")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("config_path")
            .short("c")
            .long("config")
            .takes_value(true)
            .help("Config file"))
        .subcommand(SubCommand::with_name("import")
            .about("Converts transactions.csv and trades.csv into a sorted cat.json ledger")
            .arg(Arg::with_name("data_directory")
                .required(true)
                .help("Directory holding the CSV exports")))
        .subcommand(SubCommand::with_name("gains")
            .about("Calculates all capital gains from a ledger file")
            .arg(Arg::with_name("data_file")
                .required(true)
                .help("Ledger JSON file to process"))
            .arg(Arg::with_name("output_path")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Capital gains statement to write, defaults to stdout"))
            .arg(Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["json", "csv"])
                .help("Output format, overrides the config file"))
            .arg(Arg::with_name("summary")
                .long("summary")
                .help("Prints short- and long-term totals to stderr")))
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Import {
        data_directory: String,
    },
    Gains {
        data_file: String,
        output_path: Option<String>,
        format: Option<OutputFormat>,
        summary: bool,
    },
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub config_path: Option<String>,
    pub command: Command,
}

impl Args {
    /// Parses the process arguments, exiting with usage on error.
    pub fn new() -> Args {
        let matches = build_cli().get_matches();
        Args::from_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    pub fn from_iter<I, T>(args: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_cli().get_matches_from_safe(args)?;
        Args::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Args, clap::Error> {
        let command = match matches.subcommand() {
            ("import", Some(sub)) => Command::Import {
                data_directory: sub.value_of("data_directory").unwrap_or_default().to_string(),
            },
            ("gains", Some(sub)) => Command::Gains {
                data_file: sub.value_of("data_file").unwrap_or_default().to_string(),
                output_path: sub.value_of("output_path").map(str::to_string),
                format: sub.value_of("format").and_then(|f| f.parse().ok()),
                summary: sub.is_present("summary"),
            },
            _ => {
                return Err(clap::Error::with_description(
                    "a subcommand is required",
                    ErrorKind::MissingSubcommand,
                ))
            }
        };

        Ok(Args {
            config_path: matches.value_of("config_path").map(str::to_string),
            command,
        })
    }
}
