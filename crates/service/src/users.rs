use async_trait::async_trait;
use common::users::UserLookupClient;
use tracing::warn;

use crate::errors::ServiceError;

/// Answers whether a user id is known to the identity service.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `Ok(false)` for an unknown user, `Err(Upstream)` when the lookup itself failed.
    async fn user_exists(&self, id_user: i32) -> Result<bool, ServiceError>;
}

#[async_trait]
impl UserDirectory for UserLookupClient {
    async fn user_exists(&self, id_user: i32) -> Result<bool, ServiceError> {
        match self.fetch_user(id_user).await {
            Ok(found) => Ok(found.is_some()),
            Err(e) => {
                warn!(id_user, url = %self.user_url(id_user), err = %e, "user lookup failed");
                Err(ServiceError::Upstream(e.to_string()))
            }
        }
    }
}

/// In-memory directory for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct StaticUserDirectory {
        known: HashSet<i32>,
        failure: Option<String>,
        calls: AtomicUsize,
    }

    impl StaticUserDirectory {
        pub fn with_users(ids: impl IntoIterator<Item = i32>) -> Self {
            Self { known: ids.into_iter().collect(), ..Default::default() }
        }

        /// Every lookup fails as if the service were unreachable.
        pub fn failing(message: &str) -> Self {
            Self { failure: Some(message.to_string()), ..Default::default() }
        }

        /// Number of lookups performed so far.
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl UserDirectory for StaticUserDirectory {
        async fn user_exists(&self, id_user: i32) -> Result<bool, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(msg) = &self.failure {
                return Err(ServiceError::Upstream(msg.clone()));
            }
            Ok(self.known.contains(&id_user))
        }
    }
}
