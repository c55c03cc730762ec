//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("resolver.generic_name", crate::layers::GENERIC_SETTINGS_NAME)?
        .set_default("resolver.extension", crate::layers::SETTINGS_EXTENSION)?
        .set_default("logging.level", "info")
}
