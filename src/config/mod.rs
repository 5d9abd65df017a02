mod settings;

pub use settings::{Config, DEFAULT_SLOT, EXAMPLE_CONFIG};
