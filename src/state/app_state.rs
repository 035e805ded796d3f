use std::path::{Path, PathBuf};
use tracing::warn;
use yearbook_core::*;

/// Application state for one front-end session
/// Holds the loaded directory and the criteria of the latest input event
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded school directory
    pub directory: Option<SchoolDirectory>,
    /// Path to current directory file
    pub current_file: Option<PathBuf>,
    /// Selector surface being driven
    pub profile: SearchProfile,
    /// Criteria of the most recent input event
    pub criteria: FilterCriteria,
    /// Optional display ordering, applied after filtering and capping
    pub sort_by: Option<SortField>,
    /// Year supplied by the configuration, bounds the default decade range
    pub current_year: i32,
}

impl AppState {
    pub fn new(profile: SearchProfile, current_year: i32) -> Self {
        Self {
            directory: None,
            current_file: None,
            profile,
            criteria: FilterCriteria::default(),
            sort_by: None,
            current_year,
        }
    }

    /// Load a directory file
    /// Schema violations are fatal; directory-rule problems are only logged
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), DirectoryError> {
        let directory = load_directory(path)?;

        if let Err(problems) = validate_directory(&directory, self.current_year) {
            for problem in &problems {
                warn!(path = %path.display(), "{}", problem);
            }
        }

        self.directory = Some(directory);
        self.current_file = Some(path.to_path_buf());
        self.criteria = FilterCriteria::default();

        Ok(())
    }

    /// All schools in directory order
    pub fn schools(&self) -> &[School] {
        self.directory
            .as_ref()
            .map(|d| d.schools.as_slice())
            .unwrap_or(&[])
    }

    /// The rows a selector would show for the current criteria
    pub fn visible_schools(&self) -> Vec<School> {
        let mut rows = visible_schools(self.schools(), &self.criteria, &self.profile);

        if let Some(field) = self.sort_by {
            sort_schools(&mut rows, field);
        }

        rows
    }

    /// Number of matches before display caps are applied
    pub fn match_count(&self) -> usize {
        filter_schools(self.schools(), &self.criteria, &self.profile).len()
    }

    pub fn country_facet(&self) -> Vec<String> {
        derive_country_facet(self.schools())
    }

    pub fn decade_facet(&self) -> Vec<DecadeBucket> {
        derive_decade_facet(self.schools(), self.current_year)
    }

    /// Replace the criteria wholesale, as every input event does
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Get a school by id
    pub fn find_school(&self, id: &str) -> Option<&School> {
        self.schools().iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(schools: Vec<School>) -> AppState {
        let mut state = AppState::new(SearchProfile::faceted(), 2026);
        state.directory = Some(SchoolDirectory {
            schools,
            ..Default::default()
        });
        state
    }

    fn sample() -> Vec<School> {
        vec![
            School::new("1", "Lagos Grammar School")
                .with_country("Nigeria")
                .with_year_founded(1945),
            School::new("2", "Kings College")
                .with_country("Nigeria")
                .with_year_founded(1909),
            School::new("3", "American International")
                .with_country("USA")
                .with_year_founded(1995),
        ]
    }

    #[test]
    fn test_empty_state() {
        let state = AppState::new(SearchProfile::quick_select(), 2026);
        assert!(state.schools().is_empty());
        assert!(state.visible_schools().is_empty());
        assert!(state.country_facet().is_empty());
        assert_eq!(state.decade_facet().first().unwrap().label, "2020s");
    }

    #[test]
    fn test_visible_schools_follow_criteria() {
        let mut state = state_with(sample());
        state.set_criteria(FilterCriteria::default().with_country("Nigeria".parse().unwrap()));

        let names: Vec<_> = state.visible_schools().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Lagos Grammar School", "Kings College"]);

        state.reset_filters();
        assert_eq!(state.visible_schools().len(), 3);
    }

    #[test]
    fn test_sort_applies_after_filtering() {
        let mut state = state_with(sample());
        state.sort_by = Some(SortField::Founded);
        state.set_criteria(FilterCriteria::default().with_country("Nigeria".parse().unwrap()));

        let names: Vec<_> = state.visible_schools().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Kings College", "Lagos Grammar School"]);
    }

    #[test]
    fn test_match_count_ignores_caps() {
        let mut state = state_with(sample());
        state.profile = SearchProfile::advanced_search().with_limits(Some(ResultLimits {
            no_query_limit: 1,
            query_limit: 1,
        }));

        assert_eq!(state.visible_schools().len(), 1);
        assert_eq!(state.match_count(), 3);
    }

    #[test]
    fn test_load_keeps_directory_with_rule_problems() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schools.json");
        std::fs::write(
            &path,
            r#"{"schools": [
                {"id": "1", "name": "A", "yearFounded": 1650},
                {"id": "1", "name": "B", "yearFounded": 1995}
            ]}"#,
        )
        .unwrap();

        let mut state = AppState::new(SearchProfile::faceted(), 2026);
        state.load_from_file(&path).unwrap();
        assert_eq!(state.schools().len(), 2);

        state.set_criteria(
            FilterCriteria::default().with_founding_decade("1990s".parse().unwrap()),
        );
        let names: Vec<_> = state.visible_schools().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_load_rejects_schema_violation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schools.json");
        std::fs::write(&path, r#"{"schools": [{"name": "No Id"}]}"#).unwrap();

        let mut state = AppState::new(SearchProfile::faceted(), 2026);
        let result = state.load_from_file(&path);
        assert!(matches!(result, Err(DirectoryError::Schema(_))));
        assert!(state.directory.is_none());
    }

    #[test]
    fn test_load_accepts_valid_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schools.json");
        std::fs::write(
            &path,
            r#"{"schools": [
                {"id": "kc", "name": "Kings College", "country": "Nigeria", "yearFounded": 1909}
            ]}"#,
        )
        .unwrap();

        let mut state = AppState::new(SearchProfile::faceted(), 2026);
        state.load_from_file(&path).unwrap();
        assert_eq!(state.find_school("kc").unwrap().name, "Kings College");
        assert_eq!(state.current_file.as_deref(), Some(path.as_path()));
    }
}
