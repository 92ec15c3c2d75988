use std::sync::RwLock;

use async_trait::async_trait;

use catalog_category::Category;
use catalog_core::{DomainError, DomainResult, Entity, Repository};

/// In-memory repository over an ordered sequence.
///
/// Intended for tests/dev. Completes every (nominally async) operation
/// synchronously. Insertion order is meaningful: `find_all` returns it,
/// `update` preserves position, `delete` removes position. Duplicate
/// identities are not rejected on insert; every lookup uses first-match
/// semantics, so the earliest-inserted entity wins.
#[derive(Debug, Default)]
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
}

/// Category adapter over the generic store; the entity supplies the
/// diagnostic type tag, so nothing else is needed per entity.
pub type CategoryInMemoryRepository = InMemoryRepository<Category>;

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync + 'static,
    E::Id: Sync,
{
    async fn insert(&self, entity: E) -> DomainResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| DomainError::internal("lock poisoned"))?;
        items.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| DomainError::internal("lock poisoned"))?;
        items.extend(entities);
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::internal("lock poisoned"))?;
        Ok(items.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::internal("lock poisoned"))?;
        Ok(items.clone())
    }

    async fn update(&self, entity: E) -> DomainResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| DomainError::internal("lock poisoned"))?;
        match items.iter().position(|e| e.id() == entity.id()) {
            Some(index) => {
                items[index] = entity;
                Ok(())
            }
            None => Err(DomainError::not_found(E::KIND, entity.id())),
        }
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| DomainError::internal("lock poisoned"))?;
        match items.iter().position(|e| e.id() == id) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(DomainError::not_found(E::KIND, id)),
        }
    }
}
