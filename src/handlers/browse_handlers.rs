use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use yearbook_core::{FacetChoice, FilterCriteria};

use super::search_handlers::write_facets;
use crate::state::AppState;
use crate::ui::{format_criteria, format_school_details, print_schools};

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Query(String),
    Country(FacetChoice),
    Decade(FacetChoice),
    Select(String),
    Clear,
    Facets,
    Help,
    Quit,
}

/// Parse an input line; plain text replaces the query
pub fn parse_browse_line(line: &str) -> Result<BrowseCommand, String> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(BrowseCommand::Query(trimmed.to_string()));
    };

    let (command, argument) = match rest.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (rest, ""),
    };

    match command {
        "country" => Ok(BrowseCommand::Country(parse_choice(argument))),
        "decade" => Ok(BrowseCommand::Decade(parse_choice(argument))),
        "select" if !argument.is_empty() => Ok(BrowseCommand::Select(argument.to_string())),
        "select" => Err("Usage: :select <school id>".to_string()),
        "clear" => Ok(BrowseCommand::Clear),
        "facets" => Ok(BrowseCommand::Facets),
        "help" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("Unknown command ':{}' (try :help)", other)),
    }
}

fn parse_choice(argument: &str) -> FacetChoice {
    argument.parse::<FacetChoice>().unwrap_or_default()
}

/// Criteria for the next recomputation, built fresh from the previous selections
pub fn next_criteria(previous: &FilterCriteria, command: &BrowseCommand) -> FilterCriteria {
    match command {
        BrowseCommand::Query(query) => FilterCriteria {
            query: query.clone(),
            country: previous.country.clone(),
            founding_decade: previous.founding_decade.clone(),
        },
        BrowseCommand::Country(choice) => FilterCriteria {
            query: previous.query.clone(),
            country: choice.clone(),
            founding_decade: previous.founding_decade.clone(),
        },
        BrowseCommand::Decade(choice) => FilterCriteria {
            query: previous.query.clone(),
            country: previous.country.clone(),
            founding_decade: choice.clone(),
        },
        BrowseCommand::Clear => FilterCriteria::default(),
        _ => previous.clone(),
    }
}

const HELP: &str = "\
Type text to search by name. Commands:
  :country <name|all>   filter by country
  :decade <1990s|all>   filter by founding decade
  :select <id>          show one school
  :facets               list filter values
  :clear                reset all filters
  :quit                 leave";

/// Interactive loop: every input line is one event that triggers a recomputation
pub fn run_browse<R: BufRead, W: Write>(state: &mut AppState, input: R, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Browsing {} schools with the '{}' profile (:help for commands)",
        state.schools().len(),
        state.profile
    )?;
    print_schools(out, &state.visible_schools())?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_browse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message.yellow())?;
                continue;
            }
        };

        match &command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            BrowseCommand::Facets => {
                write_facets(out, &state.country_facet(), &state.decade_facet())?;
                continue;
            }
            BrowseCommand::Select(id) => {
                match state.find_school(id) {
                    Some(school) => writeln!(out, "{}", format_school_details(school))?,
                    None => writeln!(out, "{}", format!("No school with id '{}'", id).yellow())?,
                }
                continue;
            }
            _ => {}
        }

        if command == BrowseCommand::Clear {
            state.reset_filters();
        } else {
            let criteria = next_criteria(&state.criteria, &command);
            state.set_criteria(criteria);
        }

        let active = format_criteria(&state.criteria);
        if !active.is_empty() {
            writeln!(out, "{}", active.cyan())?;
        }
        print_schools(out, &state.visible_schools())?;
    }

    Ok(())
}
