//! Application use-case interface.

use async_trait::async_trait;

use crate::error::DomainResult;

/// A single application operation: validate input, orchestrate entities and
/// repositories, map to an output record.
#[async_trait]
pub trait UseCase {
    type Input;
    type Output;

    async fn execute(&self, input: Self::Input) -> DomainResult<Self::Output>;
}
