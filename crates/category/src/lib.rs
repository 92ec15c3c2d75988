//! `catalog-category` — the Category domain module.
//!
//! Entity + validation, the repository contract and the application use
//! cases (create/update/delete/get/list). Storage backends live in
//! `catalog-infra`; HTTP glue lives in `catalog-api`.

pub mod category;
pub mod output;
pub mod repository;
pub mod use_cases;

pub use category::{Category, CategoryId, CreateCategoryProps};
pub use output::{CategoryOutput, CategoryOutputMapper};
pub use repository::CategoryRepository;
pub use use_cases::{
    CreateCategoryInput, CreateCategoryUseCase, DeleteCategoryInput, DeleteCategoryUseCase,
    GetCategoryInput, GetCategoryUseCase, ListCategoriesUseCase, UpdateCategoryInput,
    UpdateCategoryUseCase,
};
