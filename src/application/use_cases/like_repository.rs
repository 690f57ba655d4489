use std::sync::Arc;

use tracing::debug;

use crate::application::RepositoryStore;
use crate::domain::{DomainError, Repository};

pub struct LikeRepositoryUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl LikeRepositoryUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &str) -> Result<Repository, DomainError> {
        let repo = self
            .store
            .modify_by_id(
                id,
                Box::new(|repo: &mut Repository| {
                    repo.like();
                }),
            )
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Repository not found: {}", id)))?;

        debug!("Repository {} now has {} likes", repo.id(), repo.likes());
        Ok(repo)
    }
}
