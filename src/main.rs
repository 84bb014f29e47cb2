//! dss-scivis entry point: CLI wiring around load, select, resolve, render.

use std::path::Path;
use std::process;

use log::info;
use thiserror::Error;

use dss_scivis::cli::{self, CliOptions};
use dss_scivis::config::{ConfigError, PlotConfig};
use dss_scivis::data::{self, TimeSeriesSet};
use dss_scivis::error::{LoadError, OptionError, SeriesError};
use dss_scivis::options::{self, PlotStyle};

/// Extension of saved figures.
#[cfg(feature = "tui")]
const FIGURE_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Options(#[from] OptionError),
    #[error("failed to render figure: {0}")]
    Render(#[from] std::io::Error),
}

#[cfg(feature = "tui")]
/// Figure path derived from the dataset name: `SimpleDemo` → `SimpleDemo.txt`.
fn default_figure_path(dataset: &str) -> std::path::PathBuf {
    data::loader::resolve_path(dataset)
        .unwrap_or_else(|_| dataset.into())
        .with_extension(FIGURE_EXTENSION)
}

fn title_for(dataset: &str) -> String {
    Path::new(dataset)
        .file_stem()
        .map_or_else(|| dataset.to_string(), |s| s.to_string_lossy().into_owned())
}

fn run(cli: &CliOptions) -> Result<(), RunError> {
    let config = match cli.config {
        Some(ref path) => PlotConfig::from_toml_file(path)?,
        None => PlotConfig::default(),
    };
    if let Some(first) = config.validate().into_iter().next() {
        return Err(first.into());
    }

    let table = data::load(&cli.dataset)?;
    info!(
        "loaded {}: {} columns x {} rows",
        cli.dataset,
        table.column_count(),
        table.row_count()
    );

    let variables = if cli.variables.is_empty() {
        &config.selection.variables
    } else {
        &cli.variables
    };
    let set = TimeSeriesSet::select(&table, variables)?;

    // File overrides first, command line last
    let overrides = config
        .options
        .iter()
        .map(|(k, v)| (k.as_str(), v.clone()))
        .chain(cli.overrides.iter().map(|(k, v)| (k.as_str(), v.clone())));
    let resolved = options::resolve(set.len(), overrides, &config.render)?;
    let style = PlotStyle::from_options(&resolved, &set)?;
    info!("plotting {} series against {}", set.len(), set.time.name);

    render(cli, &set, &style)
}

#[cfg(feature = "tui")]
fn render(cli: &CliOptions, set: &TimeSeriesSet, style: &PlotStyle) -> Result<(), RunError> {
    let title = title_for(&cli.dataset);

    if !cli.no_save {
        let path = cli
            .out
            .clone()
            .unwrap_or_else(|| default_figure_path(&cli.dataset));
        dss_scivis::tui::save(&path, &title, set, style)?;
        eprintln!("Figure written to {}", path.display());
    }

    if !cli.no_show {
        dss_scivis::tui::show(&title, set, style)?;
    }
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn render(cli: &CliOptions, _set: &TimeSeriesSet, _style: &PlotStyle) -> Result<(), RunError> {
    if !cli.no_save || !cli.no_show {
        log::warn!(
            "built without the `tui` feature; {} not rendered",
            title_for(&cli.dataset)
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = match cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
