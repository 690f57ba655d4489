mod create_repository;
mod delete_repository;
mod like_repository;
mod list_repositories;
mod update_repository;

pub use create_repository::*;
pub use delete_repository::*;
pub use like_repository::*;
pub use list_repositories::*;
pub use update_repository::*;
