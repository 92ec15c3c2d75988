use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::{DomainResult, UseCase};

use crate::category::CategoryId;
use crate::repository::CategoryRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCategoryInput {
    pub id: String,
}

pub struct DeleteCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for DeleteCategoryUseCase {
    type Input = DeleteCategoryInput;
    type Output = ();

    async fn execute(&self, input: DeleteCategoryInput) -> DomainResult<()> {
        let id: CategoryId = input.id.parse()?;
        // NotFound from the repository propagates untranslated.
        self.repository.delete(&id).await?;
        tracing::debug!(category_id = %id, "category deleted");

        Ok(())
    }
}
