use serde::Serialize;

/// Immutable per-topology build settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologySettings {
    server_extensions: Vec<String>,
    broker_extensions: Vec<String>,
    recovery_extensions: Vec<String>,
    roles: String,
    simple_configs: Vec<String>,
}

impl TopologySettings {
    pub fn new(
        server_extensions: Vec<String>,
        broker_extensions: Vec<String>,
        recovery_extensions: Vec<String>,
        roles: impl Into<String>,
        simple_configs: Vec<String>,
    ) -> Self {
        Self {
            server_extensions,
            broker_extensions,
            recovery_extensions,
            roles: roles.into(),
            simple_configs,
        }
    }

    pub fn server_extensions(&self) -> &[String] {
        &self.server_extensions
    }

    pub fn broker_extensions(&self) -> &[String] {
        &self.broker_extensions
    }

    pub fn recovery_extensions(&self) -> &[String] {
        &self.recovery_extensions
    }

    /// Comma-joined role tokens, written verbatim into the node config.
    pub fn roles(&self) -> &str {
        &self.roles
    }

    /// Base names of configs copied without rewriting.
    pub fn simple_configs(&self) -> &[String] {
        &self.simple_configs
    }

    /// A broker process runs only when broker extensions are configured.
    pub fn has_broker(&self) -> bool {
        !self.broker_extensions.is_empty()
    }
}
