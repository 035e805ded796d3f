use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::Path;
use tracing::info;
use yearbook_core::{load_directory, validate_directory, validate_path_exists, DirectoryError};

use crate::errors::map_directory_error;
use crate::state::AppState;
use crate::ui::print_error;

/// Load a directory file into the state, reporting failures through the error mapper
pub fn open_directory(state: &mut AppState, path: &Path) -> Result<()> {
    validate_path_exists(path).map_err(|e| anyhow!(e))?;

    match state.load_from_file(path) {
        Ok(()) => {
            info!(path = %path.display(), schools = state.schools().len(), "Directory loaded");
            Ok(())
        }
        Err(e) => {
            let (title, message, details) = map_directory_error(&e, path);
            print_error(&title, &message, &details);
            Err(anyhow!("{}", message))
        }
    }
}

/// Check a directory file and print every problem found
pub fn handle_validate(path: &Path, current_year: i32) -> Result<()> {
    let directory = match load_directory(path) {
        Ok(directory) => directory,
        Err(e) => {
            let (title, message, details) = map_directory_error(&e, path);
            print_error(&title, &message, &details);
            return Err(anyhow!("{}", message));
        }
    };

    match validate_directory(&directory, current_year) {
        Ok(()) => {
            println!(
                "{} {} schools, no problems found",
                "✓".green().bold(),
                directory.schools.len()
            );
            Ok(())
        }
        Err(errors) => {
            let count = errors.len();
            let (title, message, details) =
                map_directory_error(&DirectoryError::Validation(errors), path);
            print_error(&title, &message, &details);
            eprintln!("\nPlease fix these errors and try again.");
            Err(anyhow!("{} validation error(s)", count))
        }
    }
}
