use async_trait::async_trait;
use tracing::warn;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::ownership::EmployeeKey;

/// Maps an opaque caller credential to the employee acting on the request.
#[async_trait]
pub trait ActorResolver: Send + Sync {
    async fn resolve_actor(&self, credential: &str) -> Result<Option<EmployeeKey>, AppError>;
}

/// Directory lookup. The credential is the already-verified subject claim,
/// which for this roster is the employee's email.
#[async_trait]
impl ActorResolver for DatabaseService {
    async fn resolve_actor(&self, credential: &str) -> Result<Option<EmployeeKey>, AppError> {
        let subject = credential.trim();
        if subject.is_empty() {
            warn!("Empty credential supplied for actor resolution.");
            return Ok(None);
        }
        let actor = self.find_employee_key_by_email(subject).await?;
        if actor.is_none() {
            warn!("No employee found for credential subject {}", subject);
        }
        Ok(actor)
    }
}

/// Resolves once at the boundary; an unknown credential is an authorization
/// failure.
pub async fn require_actor<R: ActorResolver + ?Sized>(resolver: &R, credential: &str) -> Result<EmployeeKey, AppError> {
    resolver.resolve_actor(credential).await?.ok_or(AppError::Unauthorized)
}
