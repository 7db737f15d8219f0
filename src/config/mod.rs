mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{CONFIG_VERSION, Config, FormattingConfig, WhitespaceConfig};
pub use validation::{resolve_fixers, validate_config};
