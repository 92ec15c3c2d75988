use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::{DomainError, DomainResult, Entity, UseCase};

use crate::category::{Category, CreateCategoryProps};
use crate::output::{CategoryOutput, CategoryOutputMapper};
use crate::repository::CategoryRepository;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub struct CreateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for CreateCategoryUseCase {
    type Input = CreateCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: CreateCategoryInput) -> DomainResult<CategoryOutput> {
        let category = Category::create(CreateCategoryProps {
            name: input.name,
            description: input.description,
            is_active: input.is_active,
        });

        if category.notification().has_errors() {
            return Err(DomainError::validation(category.notification().clone()));
        }

        let output = CategoryOutputMapper::to_output(&category);
        self.repository.insert(category).await?;
        tracing::debug!(category_id = %output.category_id, "category created");

        Ok(output)
    }
}
