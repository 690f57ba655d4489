use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::{RepositoryEdit, RepositoryStore};
use crate::domain::{DomainError, Repository};

/// Process-local store backed by a vector in insertion order.
///
/// Lookups scan linearly. Every find-then-change happens under one write
/// guard, so a concurrent removal cannot shift positions underneath it.
pub struct InMemoryRepositoryStore {
    repositories: RwLock<Vec<Repository>>,
}

impl InMemoryRepositoryStore {
    pub fn new() -> Self {
        Self {
            repositories: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryRepositoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn position_of(repositories: &[Repository], id: &str) -> Option<usize> {
    repositories.iter().position(|r| r.has_id(id))
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn list(&self) -> Result<Vec<Repository>, DomainError> {
        Ok(self.repositories.read().await.clone())
    }

    async fn append(&self, repository: Repository) -> Result<Repository, DomainError> {
        let mut repositories = self.repositories.write().await;
        repositories.push(repository.clone());
        debug!("Stored repository {} ({} total)", repository.id(), repositories.len());
        Ok(repository)
    }

    async fn find_position_by_id(&self, id: &str) -> Result<Option<usize>, DomainError> {
        Ok(position_of(&self.repositories.read().await, id))
    }

    async fn remove_at(&self, position: usize) -> Result<Option<Repository>, DomainError> {
        let mut repositories = self.repositories.write().await;
        if position >= repositories.len() {
            return Ok(None);
        }
        Ok(Some(repositories.remove(position)))
    }

    async fn remove_by_id(&self, id: &str) -> Result<Option<Repository>, DomainError> {
        let mut repositories = self.repositories.write().await;
        Ok(position_of(&repositories, id).map(|position| repositories.remove(position)))
    }

    async fn modify_by_id(
        &self,
        id: &str,
        edit: RepositoryEdit,
    ) -> Result<Option<Repository>, DomainError> {
        let mut repositories = self.repositories.write().await;
        let Some(position) = position_of(&repositories, id) else {
            return Ok(None);
        };

        edit(&mut repositories[position]);
        Ok(Some(repositories[position].clone()))
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.repositories.read().await.len())
    }
}
