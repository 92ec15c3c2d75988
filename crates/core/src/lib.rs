//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): identifier value objects, the error-notification pattern,
//! the `Entity` trait and the generic `Repository` contract.

pub mod entity;
pub mod error;
pub mod id;
pub mod notification;
pub mod repository;
pub mod use_case;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use notification::Notification;
pub use repository::Repository;
pub use use_case::UseCase;
pub use value_object::ValueObject;
