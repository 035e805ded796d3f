use crate::models::{DecadeBucket, School};
use std::collections::BTreeSet;

/// Earliest founding year assumed when no school carries one
pub const MIN_FOUNDING_YEAR: i32 = 1800;

/// Distinct, non-empty countries sorted ascending
pub fn derive_country_facet(schools: &[School]) -> Vec<String> {
    schools
        .iter()
        .filter_map(|school| school.classified_country())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Contiguous decade buckets covering every founding year, newest first
///
/// Decades with no schools in them are still emitted so the control shows an
/// unbroken range. When no school has a founding year, the range runs from
/// [`MIN_FOUNDING_YEAR`] through `current_year`.
pub fn derive_decade_facet(schools: &[School], current_year: i32) -> Vec<DecadeBucket> {
    let years: Vec<i32> = schools.iter().filter_map(|s| s.year_founded).collect();

    let (min_year, max_year) = match (years.iter().min(), years.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => (MIN_FOUNDING_YEAR, current_year.max(MIN_FOUNDING_YEAR)),
    };

    let first = DecadeBucket::containing(min_year).start;
    let last = DecadeBucket::containing(max_year).start;

    (first..=last)
        .rev()
        .step_by(10)
        .map(DecadeBucket::new)
        .collect()
}

/// Look up a bucket by label within a derived facet list
pub fn find_bucket<'a>(buckets: &'a [DecadeBucket], label: &str) -> Option<&'a DecadeBucket> {
    buckets.iter().find(|bucket| bucket.label == label.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn founded(years: &[i32]) -> Vec<School> {
        years
            .iter()
            .enumerate()
            .map(|(i, y)| {
                School::new(format!("s{}", i), format!("School {}", i)).with_year_founded(*y)
            })
            .collect()
    }

    fn labels(buckets: &[DecadeBucket]) -> Vec<&str> {
        buckets.iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn test_country_facet_sorted_and_deduplicated() {
        let schools = vec![
            School::new("1", "A").with_country("USA"),
            School::new("2", "B").with_country("Nigeria"),
            School::new("3", "C"),
            School::new("4", "D").with_country(""),
            School::new("5", "E").with_country("Nigeria"),
        ];

        assert_eq!(derive_country_facet(&schools), vec!["Nigeria", "USA"]);
    }

    #[test]
    fn test_country_facet_empty_input() {
        assert!(derive_country_facet(&[]).is_empty());
    }

    #[test]
    fn test_decade_facet_descending_and_contiguous() {
        let buckets = derive_decade_facet(&founded(&[1923, 1987, 1990]), 2026);

        assert_eq!(
            labels(&buckets),
            vec!["1990s", "1980s", "1970s", "1960s", "1950s", "1940s", "1930s", "1920s"]
        );
        for bucket in &buckets {
            assert_eq!(bucket.end, bucket.start + 9);
        }

        let positions: Vec<usize> = ["1990s", "1980s", "1920s"]
            .iter()
            .map(|l| buckets.iter().position(|b| b.label == *l).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_decade_facet_single_decade() {
        let buckets = derive_decade_facet(&founded(&[1991, 1999, 1995]), 2026);
        assert_eq!(labels(&buckets), vec!["1990s"]);
    }

    #[test]
    fn test_decade_facet_default_range_without_years() {
        let schools = vec![School::new("1", "No year")];
        let buckets = derive_decade_facet(&schools, 2026);

        assert_eq!(buckets.first().unwrap().label, "2020s");
        assert_eq!(buckets.last().unwrap().label, "1800s");
        assert_eq!(buckets.len(), 23);
    }

    #[test]
    fn test_decade_facet_default_range_empty_input() {
        let buckets = derive_decade_facet(&[], 1805);
        assert_eq!(labels(&buckets), vec!["1800s"]);
    }

    #[test]
    fn test_decade_facet_latest_representable_year() {
        let buckets = derive_decade_facet(&founded(&[i32::MAX]), 2026);
        assert_eq!(labels(&buckets), vec!["2147483640s"]);
        assert_eq!(buckets[0].end, i32::MAX);
    }

    #[test]
    fn test_find_bucket() {
        let buckets = derive_decade_facet(&founded(&[1945, 1995]), 2026);
        assert_eq!(find_bucket(&buckets, "1960s").unwrap().start, 1960);
        assert!(find_bucket(&buckets, "1890s").is_none());
    }
}
