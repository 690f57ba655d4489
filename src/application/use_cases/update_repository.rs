use std::sync::Arc;

use tracing::info;

use crate::application::RepositoryStore;
use crate::domain::{DomainError, Repository, RepositoryInput};

/// Use case for replacing the title, url and techs of a repository.
pub struct UpdateRepositoryUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl UpdateRepositoryUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        id: &str,
        details: RepositoryInput,
    ) -> Result<Repository, DomainError> {
        let repo = self
            .store
            .modify_by_id(
                id,
                Box::new(move |repo: &mut Repository| repo.replace_details(details)),
            )
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Repository not found: {}", id)))?;

        info!("Updated repository {}", repo.summary());
        Ok(repo)
    }
}
