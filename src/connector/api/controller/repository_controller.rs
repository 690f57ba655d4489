use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::connector::api::extract::JsonBody;
use crate::connector::api::{ApiError, Container};
use crate::domain::{Repository, RepositoryInput};

pub struct RepositoryController<'a> {
    container: &'a Container,
}

impl<'a> RepositoryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> Result<Json<Vec<Repository>>, ApiError> {
        let repos = self.container.list_use_case().execute().await?;
        Ok(Json(repos))
    }

    pub async fn create(&self, details: RepositoryInput) -> Result<Json<Repository>, ApiError> {
        let repo = self.container.create_use_case().execute(details).await?;
        Ok(Json(repo))
    }

    pub async fn update(
        &self,
        id: &str,
        details: RepositoryInput,
    ) -> Result<Json<Repository>, ApiError> {
        let repo = self.container.update_use_case().execute(id, details).await?;
        Ok(Json(repo))
    }

    pub async fn delete(&self, id: &str) -> Result<StatusCode, ApiError> {
        self.container.delete_use_case().execute(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    pub async fn like(&self, id: &str) -> Result<Json<Repository>, ApiError> {
        let repo = self.container.like_use_case().execute(id).await?;
        Ok(Json(repo))
    }
}

pub async fn list_repositories(
    State(container): State<Arc<Container>>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    RepositoryController::new(&container).list().await
}

pub async fn create_repository(
    State(container): State<Arc<Container>>,
    JsonBody(details): JsonBody<RepositoryInput>,
) -> Result<Json<Repository>, ApiError> {
    RepositoryController::new(&container).create(details).await
}

pub async fn update_repository(
    State(container): State<Arc<Container>>,
    Path(id): Path<String>,
    JsonBody(details): JsonBody<RepositoryInput>,
) -> Result<Json<Repository>, ApiError> {
    RepositoryController::new(&container)
        .update(&id, details)
        .await
}

pub async fn delete_repository(
    State(container): State<Arc<Container>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    RepositoryController::new(&container).delete(&id).await
}

pub async fn like_repository(
    State(container): State<Arc<Container>>,
    Path(id): Path<String>,
) -> Result<Json<Repository>, ApiError> {
    RepositoryController::new(&container).like(&id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_controller_round_trip() {
        let container = Container::new();
        let controller = RepositoryController::new(&container);

        let Json(created) = controller
            .create(RepositoryInput::new("Node Challenge", "http://github.com/x", &["Node"]))
            .await
            .unwrap();
        let Json(liked) = controller.like(created.id()).await.unwrap();
        assert_eq!(liked.likes(), 1);

        let status = controller.delete(created.id()).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(listed) = controller.list().await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_controller_not_found() {
        let container = Container::new();
        let controller = RepositoryController::new(&container);

        let err = controller
            .like("00000000-0000-4000-8000-000000000000")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
