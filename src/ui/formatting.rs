use yearbook_core::{DecadeBucket, FilterCriteria, School};

/// "City, State" with whichever parts are present
pub fn format_location(school: &School) -> String {
    [school.city.as_deref(), school.state.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row of a result list
pub fn format_school_line(index: usize, school: &School) -> String {
    let mut parts = vec![format!("{}. {}", index + 1, school.name)];

    let location = format_location(school);
    if !location.is_empty() {
        parts.push(location);
    }
    if let Some(country) = school.classified_country() {
        parts.push(country.to_string());
    }
    if let Some(year) = school.year_founded {
        parts.push(format!("Est. {}", year));
    }

    parts.join(" | ")
}

/// Multi-line detail block for a selected school
pub fn format_school_details(school: &School) -> String {
    let mut lines = vec![format!("{} ({})", school.name, school.id)];

    let location = format_location(school);
    if !location.is_empty() {
        lines.push(format!("  Location: {}", location));
    }
    lines.push(format!(
        "  Country: {}",
        school.classified_country().unwrap_or("unclassified")
    ));
    match school.year_founded {
        Some(year) => lines.push(format!("  Founded: {}", year)),
        None => lines.push("  Founded: unknown".to_string()),
    }
    if let Some(logo) = &school.logo {
        // logos are stored relative to the public root
        let path = if logo.starts_with('/') {
            logo.clone()
        } else {
            format!("/{}", logo)
        };
        lines.push(format!("  Logo: {}", path));
    }

    let mut extra: Vec<_> = school.extra.iter().collect();
    extra.sort_by_key(|(key, _)| *key);
    for (key, value) in extra {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        lines.push(format!("  {}: {}", key, text));
    }

    lines.join("\n")
}

/// Active filters as a single line, empty when nothing narrows the list
pub fn format_criteria(criteria: &FilterCriteria) -> String {
    let mut filter_parts = Vec::new();

    let query = criteria.normalized_query();
    if !query.is_empty() {
        filter_parts.push(format!("Query: \"{}\"", query));
    }
    if let Some(country) = criteria.country.selected() {
        filter_parts.push(format!("Country: {}", country));
    }
    if let Some(decade) = criteria.founding_decade.selected() {
        filter_parts.push(format!("Founded: {}", decade));
    }

    filter_parts.join("; ")
}

pub fn format_decade_bucket(bucket: &DecadeBucket) -> String {
    format!("{} ({}-{})", bucket.label, bucket.start, bucket.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yearbook_core::FacetChoice;

    #[test]
    fn test_format_location() {
        let school = School::new("1", "A").with_location("Lagos", "Lagos State");
        assert_eq!(format_location(&school), "Lagos, Lagos State");

        let mut city_only = School::new("2", "B");
        city_only.city = Some("Ibadan".to_string());
        assert_eq!(format_location(&city_only), "Ibadan");

        assert_eq!(format_location(&School::new("3", "C")), "");
    }

    #[test]
    fn test_format_school_line() {
        let school = School::new("kc", "Kings College")
            .with_country("Nigeria")
            .with_year_founded(1909)
            .with_location("Lagos", "Lagos");
        assert_eq!(
            format_school_line(0, &school),
            "1. Kings College | Lagos, Lagos | Nigeria | Est. 1909"
        );

        assert_eq!(format_school_line(4, &School::new("x", "Bare")), "5. Bare");
    }

    #[test]
    fn test_format_school_details_normalizes_logo() {
        let mut school = School::new("kc", "Kings College");
        school.logo = Some("logos/kc.png".to_string());
        school
            .extra
            .insert("motto".to_string(), serde_json::json!("Nulli Secundus"));

        let details = format_school_details(&school);
        assert!(details.contains("Logo: /logos/kc.png"));
        assert!(details.contains("Country: unclassified"));
        assert!(details.contains("Founded: unknown"));
        assert!(details.contains("motto: Nulli Secundus"));
    }

    #[test]
    fn test_format_criteria() {
        assert_eq!(format_criteria(&FilterCriteria::default()), "");

        let criteria = FilterCriteria::default()
            .with_query(" king ")
            .with_country(FacetChoice::Only("Nigeria".to_string()))
            .with_founding_decade(FacetChoice::Only("1900s".to_string()));
        assert_eq!(
            format_criteria(&criteria),
            "Query: \"king\"; Country: Nigeria; Founded: 1900s"
        );
    }

    #[test]
    fn test_format_decade_bucket() {
        assert_eq!(format_decade_bucket(&DecadeBucket::new(1990)), "1990s (1990-1999)");
    }
}
