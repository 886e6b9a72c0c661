use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// The fixed deployment shapes a configuration tree is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Peer node: harvesting and sync, no broker.
    Peer,
    /// Api node: partial transactions and spooling, served through a broker.
    Api,
    /// Both roles on one node.
    Dual,
}

impl Topology {
    /// All topologies in build order.
    pub const ALL: [Topology; 3] = [Topology::Peer, Topology::Api, Topology::Dual];

    /// Directory name for this topology under the destination root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Topology::Peer => "peer",
            Topology::Api => "api",
            Topology::Dual => "dual",
        }
    }

    /// Parse a topology from its directory name.
    pub fn from_dir_name(name: &str) -> Option<Topology> {
        match name {
            "peer" => Some(Topology::Peer),
            "api" => Some(Topology::Api),
            "dual" => Some(Topology::Dual),
            _ => None,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Topology {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topology::from_dir_name(s).ok_or_else(|| AppError::InvalidTopology { name: s.to_string() })
    }
}

/// Runtime processes within a topology that each get their own logging and extensions config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessName {
    Server,
    Recovery,
    Broker,
}

impl ProcessName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessName::Server => "server",
            ProcessName::Recovery => "recovery",
            ProcessName::Broker => "broker",
        }
    }

    /// Output file name of the logging config for this process.
    pub fn logging_file_name(&self) -> String {
        format!("config-logging-{}.properties", self.as_str())
    }

    /// Output file name of the extensions config for this process.
    pub fn extensions_file_name(&self) -> String {
        format!("config-extensions-{}.properties", self.as_str())
    }

    /// Log file pattern written into the logging config.
    pub fn log_file_pattern(&self) -> String {
        format!("catapult_{}%4N.log", self.as_str())
    }
}

impl fmt::Display for ProcessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
