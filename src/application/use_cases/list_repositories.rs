use std::sync::Arc;

use crate::application::RepositoryStore;
use crate::domain::{DomainError, Repository};

pub struct ListRepositoriesUseCase {
    store: Arc<dyn RepositoryStore>,
}

impl ListRepositoriesUseCase {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<Repository>, DomainError> {
        self.store.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::InMemoryRepositoryStore;
    use crate::domain::RepositoryInput;

    #[tokio::test]
    async fn test_list_empty_store() {
        let use_case = ListRepositoriesUseCase::new(Arc::new(InMemoryRepositoryStore::new()));

        let repos = use_case.execute().await.unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = Arc::new(InMemoryRepositoryStore::new());
        for title in ["first", "second", "third"] {
            store
                .append(Repository::new(RepositoryInput::new(title, "http://x", &[])))
                .await
                .unwrap();
        }
        let use_case = ListRepositoriesUseCase::new(store);

        let titles: Vec<_> = use_case
            .execute()
            .await
            .unwrap()
            .iter()
            .map(|r| r.title().and_then(|t| t.as_str()).unwrap_or_default().to_string())
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }
}
