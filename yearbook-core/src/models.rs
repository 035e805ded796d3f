use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Sentinel used by filter controls to mean "no constraint"
pub const ALL: &str = "all";

/// A school as supplied by the directory file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_founded: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl School {
    /// Build a school with only the required fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: None,
            year_founded: None,
            city: None,
            state: None,
            logo: None,
            extra: HashMap::new(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_year_founded(mut self, year: i32) -> Self {
        self.year_founded = Some(year);
        self
    }

    pub fn with_location(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.state = Some(state.into());
        self
    }

    /// Country if present and non-empty
    pub fn classified_country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Decade bucket label for the founding year, e.g. "1990s"
    pub fn decade_label(&self) -> Option<String> {
        self.year_founded
            .map(|year| DecadeBucket::containing(year).label)
    }
}

/// The on-disk school directory
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SchoolDirectory {
    pub schools: Vec<School>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Selection state of a single filter control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetChoice {
    #[default]
    All,
    Only(String),
}

impl FacetChoice {
    pub fn is_all(&self) -> bool {
        matches!(self, FacetChoice::All)
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            FacetChoice::All => None,
            FacetChoice::Only(value) => Some(value.as_str()),
        }
    }
}

impl FromStr for FacetChoice {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Ok(FacetChoice::All)
        } else {
            Ok(FacetChoice::Only(trimmed.to_string()))
        }
    }
}

impl fmt::Display for FacetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetChoice::All => write!(f, "{}", ALL),
            FacetChoice::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Current filter selections, rebuilt on every input event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub country: FacetChoice,
    pub founding_decade: FacetChoice,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_country(mut self, country: FacetChoice) -> Self {
        self.country = country;
        self
    }

    pub fn with_founding_decade(mut self, decade: FacetChoice) -> Self {
        self.founding_decade = decade;
        self
    }

    /// Query with surrounding whitespace removed
    pub fn normalized_query(&self) -> &str {
        self.query.trim()
    }
}

/// Ten-year inclusive range used for founding-year filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeBucket {
    pub label: String,
    pub start: i32,
    pub end: i32,
}

impl DecadeBucket {
    /// Bucket starting at `decade` (expected to be a multiple of ten)
    /// The end year saturates at `i32::MAX` for the last representable decade
    pub fn new(decade: i32) -> Self {
        Self {
            label: format!("{}s", decade),
            start: decade,
            end: decade.saturating_add(9),
        }
    }

    /// Bucket that holds `year`
    pub fn containing(year: i32) -> Self {
        Self::new(year.div_euclid(10) * 10)
    }

    /// Parse a label such as "1990s"
    /// Returns None for anything that is not a decade label
    pub fn from_label(label: &str) -> Option<Self> {
        let digits = label.trim().strip_suffix('s')?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let decade: i32 = digits.parse().ok()?;
        if decade % 10 != 0 || decade.checked_add(9).is_none() {
            return None;
        }

        Some(Self::new(decade))
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}
