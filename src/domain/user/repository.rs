use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::{Role, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Atomic insert-if-absent keyed on the email address; returns the
    /// created user, or `None` when one already existed. Concurrent
    /// callers must never both create a record.
    async fn insert_if_absent(&self, new_user: NewUser) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Batch lookup for author projections on article listings.
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;

    async fn list_with_role(&self, role: Role) -> DomainResult<Vec<User>>;

    async fn count_with_role(&self, role: Role) -> DomainResult<u64>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
