use std::sync::Arc;

use tracing::info;

use crate::application::RepositoryStore;
use crate::domain::{DomainError, Repository};

/// Use case for removing a repository from the catalog.
pub struct DeleteRepositoryUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl DeleteRepositoryUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &str) -> Result<Repository, DomainError> {
        let repo = self
            .store
            .remove_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Repository not found: {}", id)))?;

        info!("Deleted repository {}", repo.summary());
        Ok(repo)
    }
}
