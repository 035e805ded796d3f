use crate::error::DirectoryError;
use crate::models::SchoolDirectory;
use crate::schema_validation::validate_directory_json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a school directory from a JSON file, checking it against the directory schema first
pub fn load_directory<P: AsRef<Path>>(path: P) -> Result<SchoolDirectory, DirectoryError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| DirectoryError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    validate_directory_json(&value).map_err(DirectoryError::Schema)?;

    let directory: SchoolDirectory =
        serde_json::from_value(value).map_err(|source| DirectoryError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), schools = directory.schools.len(), "Loaded school directory");
    Ok(directory)
}

/// Save a school directory to a JSON file with pretty printing
pub fn save_directory<P: AsRef<Path>>(
    directory: &SchoolDirectory,
    path: P,
) -> Result<(), DirectoryError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(directory).map_err(|source| DirectoryError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| DirectoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}
