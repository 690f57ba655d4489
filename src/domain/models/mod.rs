mod repository;
mod repository_id;

pub use repository::*;
pub use repository_id::*;
