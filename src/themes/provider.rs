//! Theme resource providers
//!
//! The resolver never touches the filesystem itself; custom themes come
//! from a provider injected at engine construction. `InMemoryThemeProvider`
//! is the standard implementation for tests and embedders; calling layers
//! that keep theme records on disk can fill one via [`load_theme_file`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CompileError;

use super::ThemeColors;

/// Source of custom theme records, addressed by name
pub trait ThemeProvider: Send + Sync {
    fn get(&self, name: &str) -> Option<ThemeColors>;
}

/// HashMap-backed theme store
#[derive(Debug, Clone, Default)]
pub struct InMemoryThemeProvider {
    themes: HashMap<String, ThemeColors>,
}

impl InMemoryThemeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, colors: ThemeColors) {
        self.themes.insert(name.into(), colors);
    }

    /// Parse and store a JSON theme record under `name`
    pub fn insert_json(&mut self, name: &str, json: &str) -> Result<(), CompileError> {
        let colors =
            ThemeColors::from_json_str(json).map_err(|reason| CompileError::InvalidTheme {
                name: name.to_string(),
                reason,
            })?;
        self.themes.insert(name.to_string(), colors);
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }
}

impl ThemeProvider for InMemoryThemeProvider {
    fn get(&self, name: &str) -> Option<ThemeColors> {
        self.themes.get(name).copied()
    }
}

/// Load one JSON theme record from disk
///
/// The theme name is the file stem (`themes/sepia.json` -> `sepia`).
pub fn load_theme_file(path: &Path) -> Result<(String, ThemeColors), CompileError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("theme")
        .to_string();
    let json = fs::read_to_string(path).map_err(|e| CompileError::InvalidTheme {
        name: name.clone(),
        reason: format!("unreadable theme file: {}", e),
    })?;
    let colors = ThemeColors::from_json_str(&json).map_err(|reason| CompileError::InvalidTheme {
        name: name.clone(),
        reason,
    })?;
    Ok((name, colors))
}
