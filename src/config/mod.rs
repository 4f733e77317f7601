mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, CONFIG_FILE_NAME};
pub use model::{Config, ValidatorConfig};
