mod loader;
mod pools;

pub use loader::{load_pools_from_json, LoadError};
pub use pools::builtin_pools;
