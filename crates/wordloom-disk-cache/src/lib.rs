//! # wordloom-disk-cache
//!
//! Download cache for pretrained vector table resources.
#![warn(missing_docs)]

pub mod disk_cache;
pub mod path_resolver;

pub use disk_cache::{WordloomDiskCache, WordloomDiskCacheOptions};
pub use path_resolver::PathResolver;

/// Environment variable key to override the default cache directory.
pub const WORDLOOM_CACHE_DIR: &str = "WORDLOOM_CACHE_DIR";

/// Default [`PathResolver`] for wordloom.
pub const WORDLOOM_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.wordloom",
    organization: "",
    application: "wordloom",
    cache_env_vars: &[WORDLOOM_CACHE_DIR],
};
