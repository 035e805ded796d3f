use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use yearbook_core::*;

use crate::state::AppState;
use crate::ui::{format_criteria, format_decade_bucket, format_school_line, print_schools};

/// Apply command-line limit overrides on top of a preset
/// A limit left unset keeps the preset's value, or no cap if the preset had none
pub fn resolve_profile(
    profile: SearchProfile,
    no_query_limit: Option<usize>,
    query_limit: Option<usize>,
) -> SearchProfile {
    if no_query_limit.is_none() && query_limit.is_none() {
        return profile;
    }

    let preset = profile.limits;
    let limits = ResultLimits {
        no_query_limit: no_query_limit
            .or(preset.map(|l| l.no_query_limit))
            .unwrap_or(usize::MAX),
        query_limit: query_limit
            .or(preset.map(|l| l.query_limit))
            .unwrap_or(usize::MAX),
    };

    profile.with_limits(Some(limits))
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    profile: &'a str,
    criteria: CriteriaReport,
    total_matches: usize,
    schools: Vec<School>,
}

#[derive(Debug, Serialize)]
struct CriteriaReport {
    query: String,
    country: String,
    founding_decade: String,
}

#[derive(Debug, Serialize)]
struct FacetReport {
    countries: Vec<String>,
    decades: Vec<DecadeBucket>,
}

/// Print the rows the selector would show for the state's criteria
pub fn handle_search(state: &AppState, group_by: Option<GroupField>, json: bool) -> Result<()> {
    let rows = state.visible_schools();
    let mut out = io::stdout().lock();

    if json {
        let report = SearchReport {
            profile: state.profile.name,
            criteria: CriteriaReport {
                query: state.criteria.normalized_query().to_string(),
                country: state.criteria.country.to_string(),
                founding_decade: state.criteria.founding_decade.to_string(),
            },
            total_matches: state.match_count(),
            schools: rows,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "{}\n", "# Schools".bold())?;

    if let Some(path) = &state.current_file {
        writeln!(out, "Directory: {}", path.display())?;
    }

    let active = format_criteria(&state.criteria);
    if !active.is_empty() {
        writeln!(out, "Active filters: {}", active.cyan())?;
    }
    if !state.profile.facets_enabled
        && (!state.criteria.country.is_all() || !state.criteria.founding_decade.is_all())
    {
        writeln!(
            out,
            "{}",
            format!(
                "Note: the '{}' profile ignores country and decade filters",
                state.profile
            )
            .yellow()
        )?;
    }
    if let Some(field) = state.sort_by {
        writeln!(out, "Sorted by: {}", field)?;
    }

    let total = state.match_count();
    if total > rows.len() {
        writeln!(out, "Showing {} of {} matches\n", rows.len(), total)?;
    } else {
        writeln!(out, "Matching schools: {}\n", total)?;
    }

    match group_by {
        Some(field) => print_grouped(&mut out, &rows, field)?,
        None => print_schools(&mut out, &rows)?,
    }

    Ok(())
}

fn print_grouped<W: Write>(out: &mut W, schools: &[School], field: GroupField) -> io::Result<()> {
    let groups = group_schools(schools, field);

    for group_name in sorted_group_names(&groups, field) {
        if let Some(group) = groups.get(&group_name) {
            writeln!(out, "\n## {}: {}", field, group_name.bold())?;
            for (i, school) in group.iter().enumerate() {
                writeln!(out, "{}", format_school_line(i, school))?;
            }
        }
    }

    Ok(())
}

/// Print the values that populate the country and decade controls
pub fn handle_facets(state: &AppState, json: bool) -> Result<()> {
    let report = FacetReport {
        countries: state.country_facet(),
        decades: state.decade_facet(),
    };
    let mut out = io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    write_facets(&mut out, &report.countries, &report.decades)?;
    Ok(())
}

pub(crate) fn write_facets<W: Write>(
    out: &mut W,
    countries: &[String],
    decades: &[DecadeBucket],
) -> io::Result<()> {
    writeln!(out, "{}", "## Countries".bold())?;
    writeln!(out, "- {}", ALL)?;
    for country in countries {
        writeln!(out, "- {}", country)?;
    }

    writeln!(out, "\n{}", "## Founding decades".bold())?;
    writeln!(out, "- {}", ALL)?;
    for bucket in decades {
        writeln!(out, "- {}", format_decade_bucket(bucket))?;
    }

    Ok(())
}
