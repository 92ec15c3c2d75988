use catalog_core::Repository;

use crate::category::Category;

/// Named storage contract for categories.
///
/// Use cases depend on `Arc<dyn CategoryRepository>`, never on a concrete
/// backend; the implementation is bound at process wiring time. The blanket
/// impl makes any [`Repository<Category>`] qualify.
pub trait CategoryRepository: Repository<Category> {}

impl<T> CategoryRepository for T where T: Repository<Category> {}
