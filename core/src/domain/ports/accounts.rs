//! Accounts gateway port trait

use async_trait::async_trait;

use crate::domain::entities::OwnerAccount;
use crate::error::DomainError;

/// Resolver for user accounts that can own courses
#[async_trait]
pub trait AccountsGateway: Send + Sync {
    /// Look up an account by id, returning its display name and contact
    /// address
    async fn resolve(&self, account_id: &str) -> Result<Option<OwnerAccount>, DomainError>;
}
