//! Command-line argument parsing for the plotting binary.

use std::env;
use std::path::PathBuf;

use crate::options::OptionValue;

/// Parsed command-line arguments.
#[derive(Debug)]
pub struct CliOptions {
    /// Dataset name, with or without `.csv`.
    pub dataset: String,
    /// Do not display the figure.
    pub no_show: bool,
    /// Do not write the figure file.
    pub no_save: bool,
    /// Columns to plot; empty selects all.
    pub variables: Vec<String>,
    /// `--set` overrides in command-line order.
    pub overrides: Vec<(String, OptionValue)>,
    /// Optional TOML plot configuration.
    pub config: Option<PathBuf>,
    /// Figure output path.
    pub out: Option<PathBuf>,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut dataset = None;
    let mut no_show = false;
    let mut no_save = false;
    let mut variables = Vec::new();
    let mut overrides = Vec::new();
    let mut config = None;
    let mut out = None;

    while i < args.len() {
        match args[i].as_str() {
            "-noshow" | "--no-show" => no_show = true,
            "-nosave" | "--no-save" => no_save = true,
            "--vars" => {
                i += 1;
                let list = args.next_or_err(
                    i,
                    "missing value for --vars (expected comma-separated column names)",
                )?;
                variables.extend(
                    list.split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string),
                );
            }
            "--set" => {
                i += 1;
                let pair = args.next_or_err(i, "missing value for --set (expected key=value)")?;
                let (key, raw) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("invalid --set \"{pair}\" (expected key=value)"))?;
                overrides.push((key.trim().to_string(), OptionValue::parse_cli(raw.trim())));
            }
            "--config" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --config (expected a TOML file path)",
                )?;
                if config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--out" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --out (expected a file path)")?;
                if out.replace(PathBuf::from(path)).is_some() {
                    return Err("--out provided more than once".to_string());
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("unknown argument: {other}"));
            }
            name => {
                if dataset.replace(name.to_string()).is_some() {
                    return Err(format!("unexpected extra dataset \"{name}\""));
                }
            }
        }
        i += 1;
    }

    let dataset = dataset.ok_or_else(|| "missing dataset name".to_string())?;

    Ok(CliOptions {
        dataset,
        no_show,
        no_save,
        variables,
        overrides,
        config,
        out,
    })
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("dss-scivis: plot OpenDSS monitor time series");
    eprintln!();
    eprintln!("Usage: dss-scivis [OPTIONS] <dataset>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -noshow, --no-show       Do not display the figure");
    eprintln!("  -nosave, --no-save       Do not write the figure file");
    eprintln!("  --vars <a,b,...>         Columns to plot (default: all)");
    eprintln!("  --set <key=value>        Override a plot option (repeatable, JSON values)");
    eprintln!("  --config <path>          Load render defaults, selection and options from TOML");
    eprintln!("  --out <path>             Figure file (default: <dataset>.txt)");
    eprintln!("  --help                   Show this help message");
}
