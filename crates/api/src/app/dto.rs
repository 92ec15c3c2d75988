use serde::Deserialize;

use catalog_category::{CreateCategoryInput, UpdateCategoryInput};

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl From<CreateCategoryRequest> for CreateCategoryInput {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    /// The id travels in the path, not the body.
    pub fn into_input(self, id: String) -> UpdateCategoryInput {
        UpdateCategoryInput {
            id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        }
    }
}
