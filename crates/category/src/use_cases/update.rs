use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::{DomainError, DomainResult, Entity, UseCase};

use crate::category::{Category, CategoryId};
use crate::output::{CategoryOutput, CategoryOutputMapper};
use crate::repository::CategoryRepository;

/// Partial update: absent fields leave the entity untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryInput {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub struct UpdateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl UpdateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for UpdateCategoryUseCase {
    type Input = UpdateCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: UpdateCategoryInput) -> DomainResult<CategoryOutput> {
        let id: CategoryId = input.id.parse()?;
        let mut category = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Category::KIND, &input.id))?;

        if let Some(name) = input.name {
            category.change_name(name);
        }
        if let Some(description) = input.description {
            category.change_description(Some(description));
        }
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        if category.notification().has_errors() {
            return Err(DomainError::validation(category.notification().clone()));
        }

        let output = CategoryOutputMapper::to_output(&category);
        self.repository.update(category).await?;
        tracing::debug!(category_id = %output.category_id, "category updated");

        Ok(output)
    }
}
