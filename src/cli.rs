use crate::config::{ConversionConfig, ConversionConfigFile};
use crate::converter::{convert, preview};
use crate::errors::{AppError, AppResult};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

fn build_command() -> Command<'static> {
    Command::new("mods-csv-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("convert")
                .about("Convert a folder of MODS XML files into one CSV file")
                .after_help("Example:\n  mods-csv-cli convert -i collections/klhs_photographs -o out")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Folder searched recursively for MODS XML files")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Folder the CSV file is written to")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .help("CSV file name (defaults to the input folder name)")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run a conversion described by a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List the files a conversion would process and the schema it would use")
                .arg(
                    Arg::new("input")
                        .help("Folder searched recursively for MODS XML files")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

/// Parses command-line arguments and runs the selected subcommand.
///
/// - `convert`: converts the folder given with `-i` into a CSV in `-o`
/// - `toml`: same, with settings read from a TOML file
/// - `list`: prints the files in processing order and the selected schema
///
/// Without a subcommand the help text is printed.
///
/// # Errors
///
/// Returns the first error of the conversion; no CSV is written in that case.
pub fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("convert", sub)) => run_conversion(&config_from_args(sub)?),
        Some(("toml", sub)) => {
            let config_path = required::<PathBuf>(sub, "config")?;
            let file_config = ConversionConfigFile::from_toml_file(config_path)?;
            run_conversion(&ConversionConfig::from(file_config))
        }
        Some(("list", sub)) => list_files(required::<PathBuf>(sub, "input")?),
        _ => cmd_for_help
            .print_help()
            .map_err(|e| AppError::IoError(format!("Failed to print help: {e}"))),
    }
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    matches: &'a ArgMatches,
    name: &str,
) -> AppResult<&'a T> {
    matches
        .get_one::<T>(name)
        .ok_or_else(|| AppError::InvalidInput(format!("Missing argument: {name}")))
}

fn config_from_args(matches: &ArgMatches) -> AppResult<ConversionConfig> {
    Ok(ConversionConfig {
        input: required::<PathBuf>(matches, "input")?.clone(),
        output_dir: required::<PathBuf>(matches, "output")?.clone(),
        output_file: matches.get_one::<String>("file").cloned(),
    })
}

fn run_conversion(config: &ConversionConfig) -> AppResult<()> {
    let output_file = config.resolve_output_file()?;
    let summary = convert(&config.input, &config.output_dir, &output_file)?;

    info!(
        output = %summary.output_path.display(),
        schema = summary.variant.display_name(),
        rows = summary.rows_written,
        "CSV written"
    );
    Ok(())
}

fn list_files(input: &Path) -> AppResult<()> {
    let (variant, files) = preview(input)?;
    println!("Schema: {}", variant.display_name());
    for (index, file) in files.iter().enumerate() {
        println!("{:>5}  {}", index + 1, file.display());
    }
    info!(files = files.len(), "Listed input files");
    Ok(())
}
