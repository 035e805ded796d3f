// Public modules
pub mod currency;
pub mod error;
pub mod facets;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod mailer;
pub mod models;
pub mod schema_validation;
pub mod sorting;
pub mod validation;
pub mod verification;

// Re-export commonly used types for convenience
pub use currency::{
    format_amount, Currency, CurrencySettings, BADGE_SLOT_PRICE, DEFAULT_EXCHANGE_RATE,
    SCHOOL_YEAR_PRICE, VIEWER_YEAR_PRICE,
};
pub use error::{DirectoryError, MailError};
pub use facets::{derive_country_facet, derive_decade_facet, find_bucket, MIN_FOUNDING_YEAR};
pub use filtering::{
    apply_limits, filter_schools, has_filters, matches_criteria, visible_schools, ResultLimits,
    SearchProfile, TextField,
};
pub use grouping::{group_schools, sorted_group_names, GroupField, UNSPECIFIED_GROUP};
pub use io::{load_directory, save_directory};
pub use mailer::{
    build_mailer, DeliveryReceipt, EmailKind, EmailMessage, EmailSettings, LoggingMailer, Mailer,
    ResendMailer,
};
pub use models::{DecadeBucket, FacetChoice, FilterCriteria, School, SchoolDirectory, ALL};
pub use schema_validation::{directory_schema, validate_against_schema, validate_directory_json};
pub use sorting::{normalize_for_sorting, sort_schools, strip_leading_articles, SortField};
pub use validation::{validate_directory, validate_path_exists};
pub use verification::{
    build_verifier, AccountVerifier, AutoVerifier, EmailLinkVerifier, VerificationStatus,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_schools() -> Vec<School> {
        vec![
            School::new("lgs", "Lagos Grammar School")
                .with_country("Nigeria")
                .with_year_founded(1945),
            School::new("kc", "Kings College")
                .with_country("Nigeria")
                .with_year_founded(1909),
            School::new("ai", "American International")
                .with_country("USA")
                .with_year_founded(1995),
        ]
    }

    fn names(schools: &[School]) -> Vec<String> {
        schools.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_selector_flow_with_facets() {
        let schools = scenario_schools();
        let profile = SearchProfile::faceted();

        let countries = derive_country_facet(&schools);
        assert_eq!(countries, vec!["Nigeria", "USA"]);

        let decades = derive_decade_facet(&schools, 2026);
        assert_eq!(decades.first().unwrap().label, "1990s");
        assert_eq!(decades.last().unwrap().label, "1900s");

        let criteria = FilterCriteria::default().with_country("Nigeria".parse().unwrap());
        assert_eq!(
            names(&visible_schools(&schools, &criteria, &profile)),
            vec!["Lagos Grammar School", "Kings College"]
        );

        let criteria = FilterCriteria::default().with_query("king");
        assert_eq!(names(&visible_schools(&schools, &criteria, &profile)), vec!["Kings College"]);

        let criteria =
            FilterCriteria::default().with_founding_decade(decades[0].label.parse().unwrap());
        assert_eq!(
            names(&visible_schools(&schools, &criteria, &profile)),
            vec!["American International"]
        );
    }
}
