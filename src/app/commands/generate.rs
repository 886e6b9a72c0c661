//! Per-file generators: each reads one template and writes one output.

use tracing::debug;

use crate::domain::{
    AppError, EXTENSIONS_TEMPLATE, LOGGING_TEMPLATE, NODE_TEMPLATE, ProcessName, Replacement,
    Topology, TopologySettings, rewrite_text, simple_config_file_name,
};
use crate::ports::ConfigTreeStore;

const LOG_FILE_PATTERN_KEY: &str = "filePattern";
const SINGLE_THREAD_POOL_KEY: &str = "enableSingleThreadPool";
const AUTO_SYNC_CLEANUP_KEY: &str = "enableAutoSyncCleanup";
const ROLES_KEY: &str = "roles";
const ENABLED: &str = "true";
const DISABLED: &str = "false";

/// Rewrite `template` into `output` under `topology` using `replacements`.
pub fn copy_with_replacements(
    store: &impl ConfigTreeStore,
    template: &str,
    topology: Topology,
    output: &str,
    replacements: &[Replacement],
) -> Result<(), AppError> {
    let content = store.read_template(template)?;
    store.write_output(topology, output, &rewrite_text(&content, replacements))?;
    debug!(%topology, template, output, rules = replacements.len(), "wrote rewritten config");
    Ok(())
}

/// Write `config-logging-<process>.properties` with a process-specific log file pattern.
pub fn write_logging_properties(
    store: &impl ConfigTreeStore,
    topology: Topology,
    process: ProcessName,
) -> Result<String, AppError> {
    let output = process.logging_file_name();
    let replacements = [Replacement::new(LOG_FILE_PATTERN_KEY, process.log_file_pattern())];
    copy_with_replacements(store, LOGGING_TEMPLATE, topology, &output, &replacements)?;
    Ok(output)
}

/// Write `config-extensions-<process>.properties` with `extensions` switched on.
pub fn write_extensions_properties(
    store: &impl ConfigTreeStore,
    topology: Topology,
    process: ProcessName,
    extensions: &[String],
) -> Result<String, AppError> {
    let output = process.extensions_file_name();
    let replacements: Vec<Replacement> = extensions
        .iter()
        .map(|extension| Replacement::new(format!("extension.{}", extension), ENABLED))
        .collect();
    copy_with_replacements(store, EXTENSIONS_TEMPLATE, topology, &output, &replacements)?;
    Ok(output)
}

/// Write `config-node.properties` with pooling, cleanup and role settings.
pub fn write_node_properties(
    store: &impl ConfigTreeStore,
    topology: Topology,
    settings: &TopologySettings,
) -> Result<String, AppError> {
    // Broker topologies never take the single-thread/auto-cleanup fast path.
    let fast_path = if settings.has_broker() { DISABLED } else { ENABLED };
    let replacements = [
        Replacement::new(SINGLE_THREAD_POOL_KEY, fast_path),
        Replacement::new(AUTO_SYNC_CLEANUP_KEY, fast_path),
        Replacement::new(ROLES_KEY, settings.roles()),
    ];
    copy_with_replacements(store, NODE_TEMPLATE, topology, NODE_TEMPLATE, &replacements)?;
    Ok(NODE_TEMPLATE.to_string())
}

/// Copy each `config-<name>.properties` template verbatim.
pub fn copy_simple_configs(
    store: &impl ConfigTreeStore,
    topology: Topology,
    names: &[String],
) -> Result<Vec<String>, AppError> {
    let mut copied = Vec::with_capacity(names.len());
    for name in names {
        let file_name = simple_config_file_name(name);
        store.copy_template(&file_name, topology)?;
        debug!(%topology, file = %file_name, "copied config");
        copied.push(file_name);
    }
    Ok(copied)
}
