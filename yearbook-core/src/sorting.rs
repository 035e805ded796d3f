use crate::models::School;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Field a result list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Country,
    Founded,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "country" => Ok(SortField::Country),
            "founded" | "year" => Ok(SortField::Founded),
            other => Err(format!(
                "Unknown sort field '{}' (expected name, country or founded)",
                other
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Name => "name",
            SortField::Country => "country",
            SortField::Founded => "founded",
        };
        write!(f, "{}", name)
    }
}

/// Sort schools by the given field
/// Schools missing the field go last; ties fall back to the normalized name
pub fn sort_schools(schools: &mut [School], field: SortField) {
    schools.sort_by(|a, b| {
        let primary = match field {
            SortField::Name => Ordering::Equal,
            SortField::Country => compare_missing_last(
                a.classified_country().map(normalize_for_sorting),
                b.classified_country().map(normalize_for_sorting),
            ),
            SortField::Founded => compare_missing_last(a.year_founded, b.year_founded),
        };

        primary
            .then_with(|| normalize_for_sorting(&a.name).cmp(&normalize_for_sorting(&b.name)))
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn compare_missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
/// Supports English plus the common French, Spanish, German and Italian articles
pub fn strip_leading_articles(s: &str) -> String {
    static ARTICLES: OnceLock<Regex> = OnceLock::new();
    let re = ARTICLES.get_or_init(|| {
        Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|gli|un|une|een)\s+")
            .expect("article pattern is valid")
    });
    re.replace(s.trim_start(), "").to_string()
}
