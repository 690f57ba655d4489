pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CreateRepositoryUseCase, DeleteRepositoryUseCase, LikeRepositoryUseCase,
    ListRepositoriesUseCase, RepositoryStore, UpdateRepositoryUseCase,
};

pub use connector::{
    build_router, ApiError, Container, InMemoryRepositoryStore, Server, ServerConfig,
};

pub use domain::{is_valid_repository_id, DomainError, Repository, RepositoryInput};
