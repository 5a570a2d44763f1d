//! Theme loading from files.
use super::Theme;

use std::path::{Path, PathBuf};

/// The environment variable [`load_system_theme`] reads a theme path from.
pub const THEME_ENV: &str = "TRACE_UI_THEME";

/// An error that occurred while loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("theme file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file could not be read.
    #[error("failed to read theme file {}: {source}", .path.display())]
    Read {
        /// The path of the file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The file is neither a theme nor a palette.
    #[error("failed to parse theme file {}: {message}", .path.display())]
    Parse {
        /// The path of the file.
        path: PathBuf,
        /// What the parser complained about.
        message: String,
    },
    /// The file extension is not supported.
    #[error("unsupported theme format: {0:?}")]
    UnsupportedFormat(String),
}

/// Load a theme from a file path.
///
/// Supports RON files (`.ron` extension) holding either a full [`Theme`] or
/// a bare [`Palette`](super::Palette) to derive one from.
pub fn load_theme_from_file(path: impl AsRef<Path>) -> Result<Theme, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "ron" => load_ron_theme(path),
        extension => Err(LoadError::UnsupportedFormat(extension.to_owned())),
    }
}

#[cfg(feature = "serde")]
fn load_ron_theme(path: &Path) -> Result<Theme, LoadError> {
    use super::Palette;

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let theme_error = match ron::from_str::<Theme>(&content) {
        Ok(theme) => return Ok(theme),
        Err(error) => error,
    };

    match ron::from_str::<Palette>(&content) {
        Ok(palette) => {
            let name = palette.name.clone();
            Ok(Theme::custom(name, palette))
        }
        Err(_) => Err(LoadError::Parse {
            path: path.to_path_buf(),
            message: theme_error.to_string(),
        }),
    }
}

#[cfg(not(feature = "serde"))]
fn load_ron_theme(_path: &Path) -> Result<Theme, LoadError> {
    Err(LoadError::UnsupportedFormat(
        "ron (requires the `serde` feature)".to_owned(),
    ))
}

/// Loads the theme named by the `TRACE_UI_THEME` environment variable.
///
/// Falls back to the built-in light or dark theme when the variable is unset
/// or the file cannot be loaded.
pub fn load_system_theme(prefer_dark: bool) -> Theme {
    if let Some(path) = std::env::var_os(THEME_ENV) {
        match load_theme_from_file(&path) {
            Ok(theme) => return theme,
            Err(error) => log::warn!("falling back to the default theme: {error}"),
        }
    }

    if prefer_dark {
        Theme::dark()
    } else {
        Theme::light()
    }
}
