//! Show command: render topology settings as TOML without touching the filesystem.

use crate::domain::{AppError, Topology, TopologySettings};

/// Render the settings of `topology`, or of all topologies in build order.
pub fn execute(topology: Option<Topology>) -> Result<String, AppError> {
    let selected: Vec<Topology> = match topology {
        Some(topology) => vec![topology],
        None => Topology::ALL.to_vec(),
    };

    let mut rendered = Vec::with_capacity(selected.len());
    for topology in selected {
        let body = toml::to_string(&TopologySettings::for_topology(topology))?;
        rendered.push(format!("[{}]\n{}", topology.dir_name(), body));
    }
    Ok(rendered.join("\n"))
}
