use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::{DomainResult, UseCase};

use crate::output::{CategoryOutput, CategoryOutputMapper};
use crate::repository::CategoryRepository;

pub struct ListCategoriesUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl ListCategoriesUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListCategoriesUseCase {
    type Input = ();
    type Output = Vec<CategoryOutput>;

    /// Categories in insertion order.
    async fn execute(&self, _input: ()) -> DomainResult<Vec<CategoryOutput>> {
        let categories = self.repository.find_all().await?;
        Ok(categories.iter().map(CategoryOutputMapper::to_output).collect())
    }
}
