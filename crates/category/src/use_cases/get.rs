use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::{DomainError, DomainResult, Entity, UseCase};

use crate::category::{Category, CategoryId};
use crate::output::{CategoryOutput, CategoryOutputMapper};
use crate::repository::CategoryRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct GetCategoryInput {
    pub id: String,
}

pub struct GetCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for GetCategoryUseCase {
    type Input = GetCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: GetCategoryInput) -> DomainResult<CategoryOutput> {
        let id: CategoryId = input.id.parse()?;
        let category = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Category::KIND, &input.id))?;

        Ok(CategoryOutputMapper::to_output(&category))
    }
}
