use std::path::{Path, PathBuf};

use crate::core::{ClockError, Result};

/// Files currently being loaded, outermost first.
#[derive(Debug, Default)]
pub(super) struct ImportChain {
    files: Vec<PathBuf>,
}

impl ImportChain {
    /// Records that `path` is being loaded. Fails when it is already open
    /// further up, which would make the import recurse forever.
    pub(super) fn enter(&mut self, path: &Path) -> Result<()> {
        if self.files.iter().any(|open| open == path) {
            let cycle = self
                .files
                .iter()
                .map(PathBuf::as_path)
                .chain([path])
                .map(display_name)
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(ClockError::ConfigValidation {
                component: "import system".to_string(),
                details: format!("circular import detected: {cycle}"),
            });
        }

        self.files.push(path.to_path_buf());
        Ok(())
    }

    /// Marks the innermost file as done.
    pub(super) fn leave(&mut self) {
        self.files.pop();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
