mod config_tree_filesystem;

pub use config_tree_filesystem::FilesystemConfigTree;
