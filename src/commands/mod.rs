pub mod check;
pub mod config;
pub mod hook;
pub mod init;

pub use check::{run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use hook::{HOOK_MARKER, hook_script, run_hook, run_hook_install_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;
use crate::Result;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Resolve the effective configuration for a command.
///
/// An explicit path wins over `--no-config`; otherwise the local file is
/// looked up in `project_root` when given.
///
/// # Errors
/// Returns an error if the selected config cannot be read, parsed, or validated.
pub fn load_config(
    path: Option<&Path>,
    no_config: bool,
    project_root: Option<&Path>,
) -> Result<LoadResult> {
    let mut loader = FileConfigLoader::new();
    if let Some(root) = project_root {
        loader = loader.with_project_root(root);
    }
    match path {
        Some(path) => loader.load_from_path(path),
        None if no_config => Ok(LoadResult::defaults()),
        None => loader.load(),
    }
}
