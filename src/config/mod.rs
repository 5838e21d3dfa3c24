mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    Config, PerMetricThresholds, ThresholdConfig, ThresholdSpec, parse_threshold_spec,
};
pub use validation::validate_config;

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
