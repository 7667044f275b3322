mod import_chain;

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use import_chain::ImportChain;

use super::ClockFile;
use crate::core::{ClockError, Result};

const IMPORT_PREFIX: char = '@';

impl ClockFile {
    /// Loads a settings file together with everything it imports.
    ///
    /// # Errors
    /// Returns an error when a file cannot be read or parsed, an import
    /// forms a cycle, or a value has the wrong type.
    #[instrument]
    pub fn load(path: &Path) -> Result<ClockFile> {
        let mut chain = ImportChain::default();
        let merged = Self::load_value(path, &mut chain)?;

        merged
            .try_into()
            .map_err(|e| ClockError::toml_parse(e, Some(path)))
    }

    /// Parses settings from a string. Imports are not allowed here since
    /// there is no file to resolve them against.
    ///
    /// # Errors
    /// Returns an error on invalid TOML, wrong value types or imports.
    pub fn from_toml_str(content: &str) -> Result<ClockFile> {
        let value: toml::Value =
            toml::from_str(content).map_err(|e| ClockError::toml_parse(e, None))?;

        if !Self::extract_imports(&value).is_empty() {
            return Err(ClockError::ConfigValidation {
                component: "import system".to_string(),
                details: "imports need a file to resolve against".to_string(),
            });
        }

        value.try_into().map_err(|e| ClockError::toml_parse(e, None))
    }

    fn load_value(path: &Path, chain: &mut ImportChain) -> Result<toml::Value> {
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        chain.enter(&path)?;

        let content = fs::read_to_string(&path).map_err(|e| ClockError::import(e, &path))?;
        let mut main_toml: toml::Value =
            toml::from_str(&content).map_err(|e| ClockError::toml_parse(e, Some(&path)))?;

        let imports = Self::extract_imports(&main_toml);
        let imported_tomls = imports
            .iter()
            .map(|import| {
                let resolved = Self::resolve_import_path(&path, import)?;
                debug!(import = %resolved.display(), "importing settings");
                Self::load_value(&resolved, chain)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::strip_imports(&mut main_toml);
        chain.leave();

        Ok(Self::merge_toml_values(imported_tomls, main_toml))
    }

    fn extract_imports(value: &toml::Value) -> Vec<String> {
        match value {
            toml::Value::Table(table) => table
                .keys()
                .filter_map(|key| key.strip_prefix(IMPORT_PREFIX))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn strip_imports(value: &mut toml::Value) {
        if let toml::Value::Table(table) = value {
            table.retain(|key, _| !key.starts_with(IMPORT_PREFIX));
        }
    }

    fn resolve_import_path(base_path: &Path, import_path: &str) -> Result<PathBuf> {
        let parent = base_path.parent().ok_or_else(|| ClockError::ImportError {
            path: base_path.to_path_buf(),
            details: "settings file has no parent directory".to_string(),
        })?;

        let mut import_pathbuf = PathBuf::from(import_path);
        if import_pathbuf.extension().is_none() {
            import_pathbuf.set_extension("toml");
        }

        Ok(parent.join(import_pathbuf))
    }

    fn merge_toml_values(toml_list: Vec<toml::Value>, main_toml: toml::Value) -> toml::Value {
        let mut accumulated = toml::Value::Table(toml::map::Map::new());

        for import_toml in toml_list {
            accumulated = Self::merge_two_toml_values(accumulated, import_toml);
        }

        Self::merge_two_toml_values(accumulated, main_toml)
    }

    fn merge_two_toml_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
        match (base, overlay) {
            (toml::Value::Table(base_table), toml::Value::Table(mut merged_table)) => {
                for (key, base_value) in base_table {
                    let merged_value = match merged_table.remove(&key) {
                        Some(overlay_value) => Self::merge_two_toml_values(base_value, overlay_value),
                        None => base_value,
                    };
                    merged_table.insert(key, merged_value);
                }

                toml::Value::Table(merged_table)
            }

            (_, overlay) => overlay,
        }
    }
}
