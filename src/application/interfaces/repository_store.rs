use async_trait::async_trait;

use crate::domain::{DomainError, Repository};

/// Closure applied to a stored record while the store holds it exclusively.
pub type RepositoryEdit = Box<dyn FnOnce(&mut Repository) + Send>;

/// Ordered collection of repository records.
///
/// Positions are insertion order; removing a record shifts the ones after it.
/// Lookups compare ids as plain strings.
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Repository>, DomainError>;

    async fn append(&self, repository: Repository) -> Result<Repository, DomainError>;

    async fn find_position_by_id(&self, id: &str) -> Result<Option<usize>, DomainError>;

    async fn remove_at(&self, position: usize) -> Result<Option<Repository>, DomainError>;

    /// Finds and removes the first record with `id` in one step.
    async fn remove_by_id(&self, id: &str) -> Result<Option<Repository>, DomainError>;

    /// Finds the first record with `id`, applies `edit` to it in place and
    /// returns the edited record. `edit` is not called when nothing matches.
    async fn modify_by_id(
        &self,
        id: &str,
        edit: RepositoryEdit,
    ) -> Result<Option<Repository>, DomainError>;

    async fn len(&self) -> Result<usize, DomainError>;

    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }
}
