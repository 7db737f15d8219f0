use std::path::Path;

use serde::Serialize;

/// A path staged for commit, relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StagedFile {
    path: String,
    extension: String,
}

impl StagedFile {
    /// Build a staged file from a repository-relative path.
    ///
    /// Backslashes are normalized to `/` so the path can be handed to git.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into().replace('\\', "/");
        let extension = Path::new(&path)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, extension }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Extension comparison ignores ASCII case (`A.PHP` counts as `php`).
    #[must_use]
    pub fn has_extension_in(&self, allowed: &[String]) -> bool {
        !self.extension.is_empty()
            && allowed
                .iter()
                .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(&self.extension))
    }
}

/// Keep only files whose extension is in the allow-list, preserving order.
#[must_use]
pub fn filter_by_extensions(files: &[StagedFile], allowed: &[String]) -> Vec<StagedFile> {
    files
        .iter()
        .filter(|file| file.has_extension_in(allowed))
        .cloned()
        .collect()
}
