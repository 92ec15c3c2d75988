use std::sync::Arc;

use catalog_category::{
    CategoryRepository, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase,
    ListCategoriesUseCase, UpdateCategoryUseCase,
};
use catalog_infra::CategoryInMemoryRepository;

/// Use cases shared by all handlers, bound over one repository instance.
pub struct AppServices {
    pub create_category: CreateCategoryUseCase,
    pub update_category: UpdateCategoryUseCase,
    pub delete_category: DeleteCategoryUseCase,
    pub get_category: GetCategoryUseCase,
    pub list_categories: ListCategoriesUseCase,
}

/// Wires the repository contract to a concrete backend. This is the single
/// swap point for a persistent implementation.
pub fn build_services() -> AppServices {
    let repository: Arc<dyn CategoryRepository> = Arc::new(CategoryInMemoryRepository::new());

    AppServices {
        create_category: CreateCategoryUseCase::new(repository.clone()),
        update_category: UpdateCategoryUseCase::new(repository.clone()),
        delete_category: DeleteCategoryUseCase::new(repository.clone()),
        get_category: GetCategoryUseCase::new(repository.clone()),
        list_categories: ListCategoriesUseCase::new(repository),
    }
}
