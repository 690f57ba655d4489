mod repository_store;

pub use repository_store::*;
