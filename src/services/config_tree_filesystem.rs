use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BuildConfig, Topology};
use crate::ports::ConfigTreeStore;

/// Filesystem-based config tree implementation.
#[derive(Debug, Clone)]
pub struct FilesystemConfigTree {
    template_root: PathBuf,
    destination_root: PathBuf,
}

impl FilesystemConfigTree {
    pub fn new(template_root: PathBuf, destination_root: PathBuf) -> Self {
        Self { template_root, destination_root }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.template_dir.clone(), config.destination_dir.clone())
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.template_root.join(name)
    }

    fn output_path(&self, topology: Topology, name: &str) -> PathBuf {
        self.destination_root.join(topology.dir_name()).join(name)
    }
}

fn read_error(name: &str, path: &Path, err: io::Error) -> AppError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied | io::ErrorKind::IsADirectory => {
            AppError::template_missing(name, path)
        }
        _ => AppError::Io(err),
    }
}

impl ConfigTreeStore for FilesystemConfigTree {
    fn destination_root(&self) -> PathBuf {
        self.destination_root.clone()
    }

    fn prepare_destination(&self, topologies: &[Topology]) -> Result<(), AppError> {
        // Non-recursive create: the root must be fresh.
        fs::create_dir(&self.destination_root).map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => {
                AppError::DestinationExists(self.destination_root.clone())
            }
            _ => AppError::destination_unwritable(&self.destination_root, err),
        })?;

        for topology in topologies {
            let dir = self.destination_root.join(topology.dir_name());
            fs::create_dir(&dir).map_err(|err| AppError::destination_unwritable(&dir, err))?;
        }

        Ok(())
    }

    fn read_template(&self, name: &str) -> Result<String, AppError> {
        let path = self.template_path(name);
        fs::read_to_string(&path).map_err(|err| read_error(name, &path, err))
    }

    fn write_output(&self, topology: Topology, name: &str, content: &str) -> Result<(), AppError> {
        let path = self.output_path(topology, name);
        fs::write(&path, content).map_err(|err| AppError::destination_unwritable(&path, err))
    }

    fn copy_template(&self, name: &str, topology: Topology) -> Result<(), AppError> {
        let source = self.template_path(name);
        if source.is_dir() {
            return Err(AppError::template_missing(name, source));
        }
        let mut input = fs::File::open(&source).map_err(|err| read_error(name, &source, err))?;

        let target = self.output_path(topology, name);
        let mut output = fs::File::create(&target)
            .map_err(|err| AppError::destination_unwritable(&target, err))?;
        io::copy(&mut input, &mut output)
            .map_err(|err| AppError::destination_unwritable(&target, err))?;
        Ok(())
    }
}
