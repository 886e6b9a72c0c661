mod config_tree_store;

pub use config_tree_store::ConfigTreeStore;
