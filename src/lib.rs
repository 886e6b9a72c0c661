//! nodecfg: Materialize per-topology node configuration trees from shared templates.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{
    BuildOptions, BuildOutcome, TopologyOutput, build, build_with_options, show,
};
pub use domain::{AppError, BuildConfig, ProcessName, Replacement, Topology, TopologySettings};
