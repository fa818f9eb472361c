use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::user::{self, User};

use super::errors::RegisterError;
use super::store::UserStore;

/// Registration business service independent of the web framework.
pub struct RegistrationService {
    store: Arc<UserStore>,
}

impl RegistrationService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// Empty or missing credentials are rejected before the store is
    /// touched; a taken username is a conflict. The password is stored
    /// verbatim.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn register(&self, username: &str, password: &str) -> Result<(), RegisterError> {
        if user::validate_credentials(username, password).is_err() {
            return Err(RegisterError::MissingCredentials);
        }

        let added = self
            .store
            .try_insert(User { username: username.to_string(), password: password.to_string() })
            .await;
        if !added {
            debug!("username taken: {}", username);
            return Err(RegisterError::Conflict);
        }

        info!(username = %username, "user_registered");
        Ok(())
    }

    /// Whether a username has completed registration.
    pub async fn is_registered(&self, username: &str) -> bool {
        self.store.contains(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_and_store() -> (RegistrationService, Arc<UserStore>) {
        let store = UserStore::new();
        (RegistrationService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn register_then_duplicate_conflicts() -> Result<(), anyhow::Error> {
        let (svc, store) = service_and_store();

        svc.register("bob", "secret").await?;
        assert!(svc.is_registered("bob").await);
        assert_eq!(store.len().await, 1);

        let err = svc.register("bob", "secret").await;
        assert_eq!(err, Err(RegisterError::Conflict));
        assert_eq!(store.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_credentials_rejected_without_insert() {
        let (svc, store) = service_and_store();

        for (username, password) in [("", "pw"), ("bob", ""), ("", "")] {
            let err = svc.register(username, password).await;
            assert_eq!(err, Err(RegisterError::MissingCredentials));
        }
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn whitespace_credentials_count_as_content() -> Result<(), anyhow::Error> {
        let (svc, store) = service_and_store();

        svc.register("   ", "pw").await?;
        svc.register("bob", " ").await?;
        assert!(svc.is_registered("   ").await);
        assert_eq!(store.len().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn distinct_usernames_both_register() -> Result<(), anyhow::Error> {
        let (svc, store) = service_and_store();

        svc.register("bob", "secret").await?;
        svc.register("alice", "secret").await?;
        assert!(svc.is_registered("alice").await);
        assert!(!svc.is_registered("carol").await);
        assert_eq!(store.len().await, 2);
        Ok(())
    }
}
