//! Terminal renderer for the Folio catalog.
//!
//! # Responsibility
//! - Render the filtered catalog and the detail page as plain text.
//! - Exercise `folio_core` end to end without the Flutter/FFI runtime.

use clap::{Parser, Subcommand};
use folio_core::{
    core_version, init_logging, CatalogViewState, DetailResolver, FilterKey, FilterView,
    FolioConfig, ProjectDetail, StaticCatalog, EMPTY_FILTER_MESSAGE, UNRESOLVED_MESSAGE,
};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Browse the portfolio catalog")]
struct Cli {
    /// JSON catalog file; the bundled catalog is used when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Absolute directory for rolling log files.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects under a filter (`all|web|design`).
    List {
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Show the detail page for a location search string, e.g. `?id=2`.
    Show {
        #[arg(default_value = "")]
        search: String,
    },
    /// List available filters.
    Filters,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli, FolioConfig::from_env());

    match run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("folio: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Applies command-line flags over the environment configuration.
///
/// Flags win only when given; the environment is read by `FolioConfig` alone.
fn resolve_config(cli: &Cli, mut config: FolioConfig) -> FolioConfig {
    if let Some(path) = cli.catalog.clone() {
        config.catalog_path = Some(path);
    }
    if let Some(dir) = cli.log_dir.clone() {
        config.log_dir = Some(dir);
    }
    config
}

fn run(command: &Command, config: &FolioConfig) -> Result<(), String> {
    if let Some(log_dir) = config.log_dir.as_deref() {
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log dir is not valid UTF-8: {}", log_dir.display()))?;
        init_logging(&config.log_level, log_dir).map_err(|err| err.to_string())?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let catalog: StaticCatalog = config.load_catalog().map_err(|err| err.to_string())?;
    match command {
        Command::List { filter } => {
            let key = FilterKey::parse(filter).map_err(|err| err.to_string())?;
            let mut view = FilterView::new(&catalog);
            view.set_filter(key);
            print_catalog(&view.snapshot());
        }
        Command::Show { search } => {
            let resolver = DetailResolver::resolved(&catalog, search);
            match resolver.detail() {
                Some(detail) => print_detail(&detail),
                None => println!("{UNRESOLVED_MESSAGE}"),
            }
        }
        Command::Filters => {
            for option in FilterView::new(&catalog).filters() {
                println!("{:<8} {}", option.key, option.label);
            }
        }
    }
    Ok(())
}

fn print_catalog(state: &CatalogViewState) {
    let labels = state
        .filters
        .iter()
        .map(|option| {
            if option.key == state.active_filter.as_str() {
                format!("[{}]", option.label)
            } else {
                option.label.to_string()
            }
        })
        .collect::<Vec<_>>();
    println!("{}", labels.join("  "));
    println!();

    if state.is_empty() {
        println!("{EMPTY_FILTER_MESSAGE}");
        return;
    }
    for card in &state.projects {
        println!("#{} {} ({})", card.id, card.title, card.category);
        println!("    {}", card.description);
        if !card.tags.is_empty() {
            println!("    tags: {}", card.tags.join(", "));
        }
        println!("    -> {}", card.detail_location);
    }
}

fn print_detail(detail: &ProjectDetail) {
    println!("{}", detail.title);
    println!("{}", detail.description);
    println!();
    println!("About the Project");
    println!("{}", detail.long_description);
    println!();
    println!("Tech Stack: {}", detail.tags.join(", "));
    println!("Key Features:");
    for feature in &detail.features {
        println!("  - {feature}");
    }
    println!("Live Demo: {}", detail.live_url);
    println!("View Code: {}", detail.github_url);
}

#[cfg(test)]
mod tests {
    use super::{resolve_config, Cli, Command};
    use clap::{CommandFactory, Parser};
    use folio_core::config::{ENV_CATALOG_PATH, ENV_LOG_DIR};
    use folio_core::FolioConfig;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env_config(pairs: &[(&str, &str)]) -> FolioConfig {
        let env = pairs.iter().copied().collect::<HashMap<_, _>>();
        FolioConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn catalog_flag_overrides_environment_path() {
        let cli =
            Cli::try_parse_from(["folio", "--catalog", "/cli/projects.json", "list"]).unwrap();
        let env = env_config(&[(ENV_CATALOG_PATH, "/env/projects.json")]);
        let config = resolve_config(&cli, env);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/cli/projects.json"))
        );
    }

    #[test]
    fn environment_path_is_kept_without_flag() {
        let cli = Cli::try_parse_from(["folio", "list", "--filter", "web"]).unwrap();
        let env = env_config(&[(ENV_CATALOG_PATH, "/env/projects.json")]);
        let config = resolve_config(&cli, env);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/env/projects.json"))
        );
        assert!(matches!(cli.command, Command::List { ref filter } if filter == "web"));
    }

    #[test]
    fn blank_environment_values_fall_back_to_defaults() {
        let cli = Cli::try_parse_from(["folio", "show", "?id=2"]).unwrap();
        let config = resolve_config(
            &cli,
            env_config(&[(ENV_CATALOG_PATH, "   "), (ENV_LOG_DIR, "  ")]),
        );
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log_dir, None);
        assert!(config.load_catalog().is_ok());
    }

    #[test]
    fn log_dir_flag_overrides_environment() {
        let cli =
            Cli::try_parse_from(["folio", "--log-dir", "/var/log/folio", "filters"]).unwrap();
        let config = resolve_config(&cli, env_config(&[(ENV_LOG_DIR, "/tmp/folio")]));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/folio")));
    }
}
