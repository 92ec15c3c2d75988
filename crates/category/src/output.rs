use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::category::Category;

/// Plain output record returned by every category use case: entity fields
/// flattened, identity converted to its canonical string form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOutput {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

pub struct CategoryOutputMapper;

impl CategoryOutputMapper {
    pub fn to_output(category: &Category) -> CategoryOutput {
        CategoryOutput {
            category_id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_owned),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}
