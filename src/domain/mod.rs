pub mod build_config;
pub mod catalog;
pub mod error;
pub mod rewrite;
pub mod settings;
pub mod topology;

pub use build_config::BuildConfig;
pub use error::AppError;
pub use rewrite::{Replacement, rewrite_text};
pub use settings::TopologySettings;
pub use topology::{ProcessName, Topology};

/// Shared logging template, rewritten once per process.
pub const LOGGING_TEMPLATE: &str = "config-logging.properties";
/// Shared extensions template, rewritten once per process.
pub const EXTENSIONS_TEMPLATE: &str = "config-extensions.properties";
/// Node template; also the output name.
pub const NODE_TEMPLATE: &str = "config-node.properties";

/// File name of a plain config copied verbatim.
pub fn simple_config_file_name(name: &str) -> String {
    format!("config-{}.properties", name)
}
