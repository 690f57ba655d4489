use std::sync::Arc;

use tracing::debug;

use crate::application::{
    CreateRepositoryUseCase, DeleteRepositoryUseCase, LikeRepositoryUseCase,
    ListRepositoriesUseCase, RepositoryStore, UpdateRepositoryUseCase,
};
use crate::connector::InMemoryRepositoryStore;

/// Owns the repository store and builds the use cases that share it.
pub struct Container {
    store: Arc<dyn RepositoryStore>,
}

impl Container {
    pub fn new() -> Self {
        debug!("Using in-memory repository store");
        Self::with_store(Arc::new(InMemoryRepositoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    pub fn list_use_case(&self) -> ListRepositoriesUseCase {
        ListRepositoriesUseCase::new(self.store.clone())
    }

    pub fn create_use_case(&self) -> CreateRepositoryUseCase {
        CreateRepositoryUseCase::new(self.store.clone())
    }

    pub fn update_use_case(&self) -> UpdateRepositoryUseCase {
        UpdateRepositoryUseCase::new(self.store.clone())
    }

    pub fn delete_use_case(&self) -> DeleteRepositoryUseCase {
        DeleteRepositoryUseCase::new(self.store.clone())
    }

    pub fn like_use_case(&self) -> LikeRepositoryUseCase {
        LikeRepositoryUseCase::new(self.store.clone())
    }

    pub fn store(&self) -> Arc<dyn RepositoryStore> {
        self.store.clone()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
