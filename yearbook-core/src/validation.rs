use crate::facets::MIN_FOUNDING_YEAR;
use crate::models::{School, SchoolDirectory};
use std::collections::HashSet;
use std::path::Path;

/// Validate the school directory
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
pub fn validate_directory(
    directory: &SchoolDirectory,
    current_year: i32,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_schools(&directory.schools, current_year, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_schools(schools: &[School], current_year: i32, errors: &mut Vec<String>) {
    let mut ids = HashSet::new();

    for (idx, school) in schools.iter().enumerate() {
        let school_ref = format!("School #{} ('{}')", idx + 1, school.name);

        if school.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", school_ref));
        } else if !ids.insert(school.id.as_str()) {
            errors.push(format!("{}: duplicate id '{}'", school_ref, school.id));
        }

        if school.name.trim().is_empty() {
            errors.push(format!("{}: name cannot be empty", school_ref));
        }

        if let Some(year) = school.year_founded {
            if year < MIN_FOUNDING_YEAR || year > current_year {
                errors.push(format!(
                    "{}: yearFounded {} is outside {}..={}",
                    school_ref, year, MIN_FOUNDING_YEAR, current_year
                ));
            }
        }
    }
}

/// Validate that a path exists and is a file
pub fn validate_path_exists(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: {}", path.display()));
    }

    Ok(())
}
