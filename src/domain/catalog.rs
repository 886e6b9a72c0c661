//! Static topology definitions.

use crate::domain::{Topology, TopologySettings};

const PEER_CONFIG_NAMES: &[&str] = &["harvesting"];
const API_CONFIG_NAMES: &[&str] = &["database", "messaging", "pt"];
const SHARED_CONFIG_NAMES: &[&str] = &["inflation", "network", "task", "timesync", "user"];

const PEER_EXTENSION_NAMES: &[&str] = &["harvesting", "syncsource"];
const API_EXTENSION_NAMES: &[&str] = &["filespooling", "partialtransaction"];
const BROKER_EXTENSION_NAMES: &[&str] = &["addressextraction", "mongo", "zeromq", "hashcache"];
const SHARED_EXTENSION_NAMES: &[&str] = &[
    "diagnostics",
    "hashcache",
    "nodediscovery",
    "packetserver",
    "pluginhandlers",
    "sync",
    "timesync",
    "transactionsink",
    "unbondedpruning",
];

const PEER_RECOVERY_EXTENSION_NAMES: &[&str] = &["hashcache"];

fn concat(groups: &[&[&str]]) -> Vec<String> {
    groups.iter().flat_map(|group| group.iter().map(|name| name.to_string())).collect()
}

impl TopologySettings {
    /// Settings for one of the fixed topologies.
    pub fn for_topology(topology: Topology) -> Self {
        match topology {
            Topology::Peer => TopologySettings::new(
                concat(&[PEER_EXTENSION_NAMES, SHARED_EXTENSION_NAMES]),
                Vec::new(),
                concat(&[PEER_RECOVERY_EXTENSION_NAMES]),
                "Peer",
                concat(&[PEER_CONFIG_NAMES, SHARED_CONFIG_NAMES]),
            ),
            Topology::Api => TopologySettings::new(
                concat(&[API_EXTENSION_NAMES, SHARED_EXTENSION_NAMES]),
                concat(&[BROKER_EXTENSION_NAMES]),
                concat(&[BROKER_EXTENSION_NAMES]),
                "Api",
                concat(&[API_CONFIG_NAMES, SHARED_CONFIG_NAMES]),
            ),
            Topology::Dual => TopologySettings::new(
                concat(&[PEER_EXTENSION_NAMES, API_EXTENSION_NAMES, SHARED_EXTENSION_NAMES]),
                concat(&[BROKER_EXTENSION_NAMES]),
                concat(&[BROKER_EXTENSION_NAMES]),
                "Api,Peer",
                concat(&[PEER_CONFIG_NAMES, API_CONFIG_NAMES, SHARED_CONFIG_NAMES]),
            ),
        }
    }
}

/// Every `config-<name>.properties` base name referenced by any topology, deduplicated.
#[cfg(test)]
pub(crate) fn all_simple_config_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> =
        [PEER_CONFIG_NAMES, API_CONFIG_NAMES, SHARED_CONFIG_NAMES].concat();
    names.sort_unstable();
    names.dedup();
    names
}
