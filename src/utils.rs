use std::env;
use std::fs::create_dir_all;
use std::path::Path;

use directories::{BaseDirs, ProjectDirs};

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

/// Makes sure `path` exists as a directory, creating parents as needed
///
/// Calling this for a directory that already exists is not an error.
///
/// # Returns
/// * `Result<bool>` - `true` if the directory had to be created
pub fn ensure_directory(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    create_dir_all(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "create directory"))?;

    Ok(true)
}

/// Expands `~` and environment variables in a path string
///
/// Unknown variables are left untouched; known ones are still expanded.
pub fn expand_path(path: &str) -> String {
    shellexpand::full_with_context_no_errors(
        path,
        || BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned()),
        |name| env::var(name).ok(),
    )
    .into_owned()
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}
