//! Generic repository contract, keyed by the entity's identity value.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::DomainResult;

/// Storage contract every backend must satisfy to be substitutable by the
/// use-case layer (in-memory, relational, document, ...).
///
/// Operations are async to match the calling convention of the surrounding
/// web framework and persistent backends; an in-memory implementation
/// completes synchronously. `find_by_id` tolerates absence silently
/// (`Ok(None)`) because reads are speculative; `update`/`delete` escalate to
/// [`DomainError::NotFound`](crate::DomainError::NotFound) because they
/// demand a mutation of existing state.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Adds one entity. Duplicate identities are not guarded against;
    /// lookups use defined first-match semantics.
    async fn insert(&self, entity: E) -> DomainResult<()>;

    /// Adds a sequence of entities, preserving input order. Equivalent to
    /// repeated `insert`.
    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()>;

    /// Returns the first entity whose identity equals `id`, or `None`.
    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>>;

    /// All entities in insertion order, as an owned snapshot.
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    /// Replaces the stored entity with matching identity, in place.
    async fn update(&self, entity: E) -> DomainResult<()>;

    /// Removes the entity with matching identity.
    async fn delete(&self, id: &E::Id) -> DomainResult<()>;
}
