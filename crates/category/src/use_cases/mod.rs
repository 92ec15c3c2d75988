//! Application use cases: one single-method operation per module, all
//! orchestrating the same pattern — validate input, load/mutate/persist via
//! the repository contract, map to the output record.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::{CreateCategoryInput, CreateCategoryUseCase};
pub use delete::{DeleteCategoryInput, DeleteCategoryUseCase};
pub use get::{GetCategoryInput, GetCategoryUseCase};
pub use list::ListCategoriesUseCase;
pub use update::{UpdateCategoryInput, UpdateCategoryUseCase};
