//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string. `file` is only used for errors.
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&file_name, &contents)
}

/// Load movement tuning and the level layout from assets/data.
/// Both files are attempted so every failure is reported at once.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(MovementTuning, LevelLayout), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let tuning = match load_single_file::<MovementTuningDef>(&base_path.join("movement.ron")) {
        Ok(def) => Some(MovementTuning::from(def)),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let level = match load_single_file::<LevelLayout>(&base_path.join("level.ron")) {
        Ok(level) => Some(level),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (tuning, level) {
        (Some(tuning), Some(level)) => Ok((tuning, level)),
        _ => Err(errors),
    }
}
