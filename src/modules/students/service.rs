//! The roster provider contract.
//!
//! Every link in the store chain (generator, fault injector, timer) implements
//! [`StudentsStore`] and holds the next link, so the chain can be assembled in
//! any order at startup.

use async_trait::async_trait;
use rollcall_models::{ClassroomId, Roster};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The roster could not be produced.
    #[error("Error retrieving students from store: {0}")]
    Retrieval(String),
}

/// `Ok(None)` means the classroom has no roster.
pub type StoreResult = Result<Option<Roster>, StoreError>;

#[async_trait]
pub trait StudentsStore: Send + Sync {
    async fn get_students(&self, classroom_id: ClassroomId) -> StoreResult;

    /// Short name used when logging the composed chain.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: StudentsStore + ?Sized> StudentsStore for Arc<S> {
    async fn get_students(&self, classroom_id: ClassroomId) -> StoreResult {
        (**self).get_students(classroom_id).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
