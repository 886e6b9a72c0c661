//! Build command: prepare the destination and populate every topology.

use std::path::PathBuf;

use tracing::{info, info_span};

use crate::app::AppContext;
use crate::app::commands::generate::{
    copy_simple_configs, write_extensions_properties, write_logging_properties,
    write_node_properties,
};
use crate::domain::{AppError, ProcessName, Topology, TopologySettings};
use crate::ports::ConfigTreeStore;

/// Files generated for one topology, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyOutput {
    pub topology: Topology,
    pub files: Vec<String>,
}

/// Result of a full build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub destination: PathBuf,
    pub topologies: Vec<TopologyOutput>,
}

impl BuildOutcome {
    /// Total number of files written across all topologies.
    pub fn file_count(&self) -> usize {
        self.topologies.iter().map(|output| output.files.len()).sum()
    }
}

/// Execute the build command.
///
/// The destination is created first; any failure afterwards aborts the
/// run and leaves already-written files in place.
pub fn execute<S>(ctx: &AppContext<S>) -> Result<BuildOutcome, AppError>
where
    S: ConfigTreeStore,
{
    let store = ctx.store();
    store.prepare_destination(&Topology::ALL)?;

    let mut topologies = Vec::with_capacity(Topology::ALL.len());
    for topology in Topology::ALL {
        let settings = TopologySettings::for_topology(topology);
        topologies.push(build_topology(store, topology, &settings)?);
    }

    Ok(BuildOutcome { destination: store.destination_root(), topologies })
}

/// Generate every config file for one topology into an already-prepared directory.
pub fn build_topology(
    store: &impl ConfigTreeStore,
    topology: Topology,
    settings: &TopologySettings,
) -> Result<TopologyOutput, AppError> {
    let _span = info_span!("topology", %topology).entered();
    let mut files = Vec::new();

    files.push(write_logging_properties(store, topology, ProcessName::Server)?);
    files.push(write_extensions_properties(
        store,
        topology,
        ProcessName::Server,
        settings.server_extensions(),
    )?);

    files.push(write_logging_properties(store, topology, ProcessName::Recovery)?);
    files.push(write_extensions_properties(
        store,
        topology,
        ProcessName::Recovery,
        settings.recovery_extensions(),
    )?);

    if settings.has_broker() {
        files.push(write_logging_properties(store, topology, ProcessName::Broker)?);
        files.push(write_extensions_properties(
            store,
            topology,
            ProcessName::Broker,
            settings.broker_extensions(),
        )?);
    }

    files.push(write_node_properties(store, topology, settings)?);
    files.extend(copy_simple_configs(store, topology, settings.simple_configs())?);

    info!(%topology, files = files.len(), roles = settings.roles(), "topology built");
    Ok(TopologyOutput { topology, files })
}
