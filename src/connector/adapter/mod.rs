mod in_memory_repository_store;

pub use in_memory_repository_store::*;
