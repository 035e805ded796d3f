use crate::models::{DecadeBucket, FacetChoice, FilterCriteria, School};
use std::fmt;
use std::str::FromStr;

/// School fields that can take part in free-text matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    City,
    State,
}

impl TextField {
    fn value<'a>(&self, school: &'a School) -> Option<&'a str> {
        match self {
            TextField::Name => Some(school.name.as_str()),
            TextField::City => school.city.as_deref(),
            TextField::State => school.state.as_deref(),
        }
    }
}

/// Display caps layered on top of the filter result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimits {
    /// Rows shown while the query is empty
    pub no_query_limit: usize,
    /// Rows shown while searching
    pub query_limit: usize,
}

/// Which fields and controls a selector surface uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProfile {
    pub name: &'static str,
    pub text_fields: Vec<TextField>,
    /// Country and founding-decade controls are honoured only when set
    pub facets_enabled: bool,
    pub limits: Option<ResultLimits>,
}

impl SearchProfile {
    /// Dropdown selector: name matching only, every match listed
    pub fn quick_select() -> Self {
        Self {
            name: "quick",
            text_fields: vec![TextField::Name],
            facets_enabled: false,
            limits: None,
        }
    }

    /// Selector with country and founding-decade controls
    pub fn faceted() -> Self {
        Self {
            name: "faceted",
            text_fields: vec![TextField::Name],
            facets_enabled: true,
            limits: None,
        }
    }

    /// Search box matching name, city or state with short result lists
    pub fn advanced_search() -> Self {
        Self {
            name: "advanced",
            text_fields: vec![TextField::Name, TextField::City, TextField::State],
            facets_enabled: false,
            limits: Some(ResultLimits {
                no_query_limit: 5,
                query_limit: 8,
            }),
        }
    }

    pub fn with_limits(mut self, limits: Option<ResultLimits>) -> Self {
        self.limits = limits;
        self
    }
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self::faceted()
    }
}

impl FromStr for SearchProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" | "simple" => Ok(Self::quick_select()),
            "faceted" => Ok(Self::faceted()),
            "advanced" => Ok(Self::advanced_search()),
            other => Err(format!(
                "Unknown search profile '{}' (expected quick, faceted or advanced)",
                other
            )),
        }
    }
}

impl fmt::Display for SearchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Return the schools matching every active criterion, in input order
pub fn filter_schools(
    schools: &[School],
    criteria: &FilterCriteria,
    profile: &SearchProfile,
) -> Vec<School> {
    schools
        .iter()
        .filter(|school| matches_criteria(school, criteria, profile))
        .cloned()
        .collect()
}

/// Check if a school matches the given criteria
/// AND logic between the query, country and decade constraints
pub fn matches_criteria(
    school: &School,
    criteria: &FilterCriteria,
    profile: &SearchProfile,
) -> bool {
    if !matches_query(school, &criteria.query, &profile.text_fields) {
        return false;
    }

    if !profile.facets_enabled {
        return true;
    }

    matches_country(school, &criteria.country) && matches_decade(school, &criteria.founding_decade)
}

/// Case-insensitive substring match against any enabled field
/// A blank query matches everything; otherwise the query is used as typed
pub fn matches_query(school: &School, query: &str, fields: &[TextField]) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    fields.iter().any(|field| {
        field
            .value(school)
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

pub fn matches_country(school: &School, choice: &FacetChoice) -> bool {
    match choice {
        FacetChoice::All => true,
        FacetChoice::Only(country) => school.country.as_deref() == Some(country.as_str()),
    }
}

/// Labels that do not parse as a decade match nothing
pub fn matches_decade(school: &School, choice: &FacetChoice) -> bool {
    match choice {
        FacetChoice::All => true,
        FacetChoice::Only(label) => match (DecadeBucket::from_label(label), school.year_founded) {
            (Some(bucket), Some(year)) => bucket.contains(year),
            _ => false,
        },
    }
}

/// Truncate a filter result according to the profile's display caps
pub fn apply_limits(
    mut schools: Vec<School>,
    query: &str,
    limits: Option<&ResultLimits>,
) -> Vec<School> {
    if let Some(limits) = limits {
        let cap = if query.trim().is_empty() {
            limits.no_query_limit
        } else {
            limits.query_limit
        };
        schools.truncate(cap);
    }
    schools
}

/// Filter then cap, the list a selector actually renders
pub fn visible_schools(
    schools: &[School],
    criteria: &FilterCriteria,
    profile: &SearchProfile,
) -> Vec<School> {
    let matches = filter_schools(schools, criteria, profile);
    apply_limits(matches, &criteria.query, profile.limits.as_ref())
}

/// Check if any criterion narrows the list
pub fn has_filters(criteria: &FilterCriteria) -> bool {
    !criteria.normalized_query().is_empty()
        || !criteria.country.is_all()
        || !criteria.founding_decade.is_all()
}
