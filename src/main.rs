use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use bikeshare_explorer::cli::Cli;
use bikeshare_explorer::config::{Config, ConfigLoader, FileConfigLoader};
use bikeshare_explorer::dataset::TripLoader;
use bikeshare_explorer::filter::Filters;
use bikeshare_explorer::output::{ColorMode, ErrorOutput};
use bikeshare_explorer::session::Session;
use bikeshare_explorer::{EXIT_SUCCESS, exit_code_for, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let cli_color = cli.color.map_or(ColorMode::Auto, |choice| choice.mode());

    let config = match load_config(cli.config.as_deref(), cli.no_config) {
        Ok(mut config) => {
            apply_cli_overrides(&mut config, cli);
            config
        }
        Err(e) => {
            ErrorOutput::new(cli_color).print(&e);
            return exit_code_for(&e);
        }
    };

    let errors = ErrorOutput::new(config.output.color);
    if cli.has_orphan_filters() {
        errors.print_warning(
            "--month and --day are ignored without --city",
            Some("pass --city to print a single report"),
        );
    }

    match run_session(cli, &config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            errors.print(&e);
            exit_code_for(&e)
        }
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> bikeshare_explorer::Result<Config> {
    if no_config {
        debug!("configuration discovery disabled");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    if let Some(source) = &result.source {
        info!(path = %source.display(), "using configuration file");
    }
    Ok(result.config)
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(dir) = &cli.data_dir {
        config.data.dir = Some(dir.clone());
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(color) = cli.color {
        config.output.color = color.mode();
    }
    if cli.no_timing {
        config.output.timing = false;
    }
}

fn data_dir(config: &Config) -> PathBuf {
    config
        .data
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run_session(cli: &Cli, config: &Config) -> bikeshare_explorer::Result<()> {
    let loader = TripLoader::new(data_dir(config));
    let formatter = config
        .output
        .format
        .formatter(config.output.color, config.output.timing);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session =
        Session::new(stdin.lock(), stdout.lock(), loader, formatter).with_quiet(cli.quiet);

    match cli.city {
        Some(city) => session.run_once(Filters::new(
            city,
            cli.month.unwrap_or_default(),
            cli.day.unwrap_or_default(),
        )),
        None => session.run(),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
