use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};
use yearbook_core::{
    Currency, CurrencySettings, FacetChoice, FilterCriteria, GroupField, SearchProfile, SortField,
};

mod config;
mod errors;
mod handlers;
mod state;
mod ui;

use config::AppConfig;
use state::AppState;

/// Yearbook school directory - search, facet and price tools
///
/// Examples:
///   # Show every school
///   yearbook search schools.json
///
///   # Name search (case-insensitive substring)
///   yearbook search schools.json --query king
///
///   # Country and founding-decade filters
///   yearbook search schools.json --country Nigeria --decade 1990s
///
///   # The advanced search box: name, city or state, capped results
///   yearbook search schools.json --profile advanced --query lagos
///
///   # Interactive browsing, one recomputation per input line
///   yearbook browse schools.json
#[derive(Parser, Debug)]
#[command(name = "yearbook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - The query matches school names; the advanced profile also matches city and state\n  \
    - --country and --decade accept 'all' to clear the constraint\n  \
    - All active constraints are combined with AND\n  \
    - Results keep directory order unless --sort is given\n\n\
Profiles:\n  \
    - quick: name only, no country/decade controls, no cap\n  \
    - faceted: name only, country and decade controls, no cap\n  \
    - advanced: name/city/state, top 5 without a query, at most 8 while searching")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the schools in a directory file
    Search {
        /// Path to the school directory JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Free-text query
        #[arg(short, long, default_value = "")]
        query: String,

        /// Country to keep, or "all"
        #[arg(short, long, default_value = "all")]
        country: FacetChoice,

        /// Founding decade to keep (e.g. "1990s"), or "all"
        #[arg(short, long, default_value = "all")]
        decade: FacetChoice,

        /// Selector profile: quick, faceted or advanced
        #[arg(short, long, default_value = "faceted")]
        profile: SearchProfile,

        /// Rows shown while the query is empty
        #[arg(long, value_name = "N")]
        no_query_limit: Option<usize>,

        /// Rows shown while searching
        #[arg(long, value_name = "N")]
        query_limit: Option<usize>,

        /// Sort results by name, country or founded
        #[arg(short, long = "sort", value_name = "FIELD")]
        sort_by: Option<SortField>,

        /// Group results by country or decade
        #[arg(short = 'G', long = "group-by", value_name = "FIELD")]
        group_by: Option<GroupField>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the values available to the country and decade controls
    Facets {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Check a directory file against the schema and the directory rules
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Interactive search over a directory file
    Browse {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short, long, default_value = "faceted")]
        profile: SearchProfile,
    },

    /// Show the price list in the display currency
    Prices {
        /// USD or NGN (defaults to YEARBOOK_CURRENCY)
        #[arg(long)]
        currency: Option<Currency>,

        /// USD to NGN rate (defaults to YEARBOOK_EXCHANGE_RATE)
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Start email verification for an account
    VerifyEmail {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
}

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    match cli.command {
        Command::Search {
            file,
            query,
            country,
            decade,
            profile,
            no_query_limit,
            query_limit,
            sort_by,
            group_by,
            json,
        } => {
            let profile = handlers::resolve_profile(profile, no_query_limit, query_limit);
            let mut state = AppState::new(profile, config.current_year);
            handlers::open_directory(&mut state, &file)?;

            state.sort_by = sort_by;
            state.set_criteria(
                FilterCriteria::default()
                    .with_query(query)
                    .with_country(country)
                    .with_founding_decade(decade),
            );

            handlers::handle_search(&state, group_by, json)
        }
        Command::Facets { file, json } => {
            let mut state = AppState::new(SearchProfile::faceted(), config.current_year);
            handlers::open_directory(&mut state, &file)?;
            handlers::handle_facets(&state, json)
        }
        Command::Validate { file } => handlers::handle_validate(&file, config.current_year),
        Command::Browse { file, profile } => {
            let mut state = AppState::new(profile, config.current_year);
            handlers::open_directory(&mut state, &file)?;

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            handlers::run_browse(&mut state, stdin.lock(), &mut stdout)
        }
        Command::Prices { currency, rate } => {
            let settings = CurrencySettings::new(
                currency.unwrap_or(config.currency.currency),
                rate.unwrap_or(config.currency.exchange_rate),
            );
            handlers::handle_prices(&settings)
        }
        Command::VerifyEmail { email } => handlers::handle_verify_email(&config, &email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_arguments_parse() {
        let cli = Cli::try_parse_from([
            "yearbook", "search", "schools.json", "--query", "king", "--country", "Nigeria",
            "--decade", "all", "--profile", "advanced", "--sort", "founded", "-G", "decade",
        ])
        .unwrap();

        match cli.command {
            Command::Search {
                query,
                country,
                decade,
                profile,
                sort_by,
                group_by,
                ..
            } => {
                assert_eq!(query, "king");
                assert_eq!(country, FacetChoice::Only("Nigeria".to_string()));
                assert_eq!(decade, FacetChoice::All);
                assert_eq!(profile, SearchProfile::advanced_search());
                assert_eq!(sort_by, Some(SortField::Founded));
                assert_eq!(group_by, Some(GroupField::Decade));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let result =
            Cli::try_parse_from(["yearbook", "search", "schools.json", "--profile", "fancy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_prices_arguments_parse() {
        let cli =
            Cli::try_parse_from(["yearbook", "prices", "--currency", "NGN", "--rate", "1500"])
                .unwrap();
        match cli.command {
            Command::Prices { currency, rate } => {
                assert_eq!(currency, Some(Currency::Ngn));
                assert_eq!(rate, Some(1500.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
