use std::sync::Arc;

use tracing::info;

use crate::application::RepositoryStore;
use crate::domain::{DomainError, Repository, RepositoryInput};

/// Use case for cataloging a new repository.
pub struct CreateRepositoryUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl CreateRepositoryUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    /// Stores a new record with a fresh id and zero likes.
    pub async fn execute(&self, details: RepositoryInput) -> Result<Repository, DomainError> {
        let repo = self.store.append(Repository::new(details)).await?;
        info!("Created repository {}", repo.summary());
        Ok(repo)
    }
}
