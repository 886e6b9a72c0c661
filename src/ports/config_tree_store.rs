//! Template source and destination tree operations.
//!
//! Template names are file names relative to the template root. Output
//! names are file names within `<destination>/<topology>/`.

use std::path::PathBuf;

use crate::domain::{AppError, Topology};

/// Port for reading templates and populating the destination tree.
pub trait ConfigTreeStore {
    /// Root of the destination tree.
    fn destination_root(&self) -> PathBuf;

    /// Create the destination root and one directory per topology.
    ///
    /// Fails with `DestinationExists` if the root is already present.
    fn prepare_destination(&self, topologies: &[Topology]) -> Result<(), AppError>;

    /// Read a template as UTF-8 text.
    fn read_template(&self, name: &str) -> Result<String, AppError>;

    /// Create or overwrite an output file for a topology.
    fn write_output(&self, topology: Topology, name: &str, content: &str) -> Result<(), AppError>;

    /// Copy a template byte-for-byte into a topology directory under the same name.
    fn copy_template(&self, name: &str, topology: Topology) -> Result<(), AppError>;
}
