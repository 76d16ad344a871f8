//! Wrapped client that handles auth errors automatically

use senso_http::types::{AdminStatistics, Registration, RegistrationFilter, StatusUpdate};
use senso_http::{AuthenticatedSensoClient, ClientError};
use std::future::Future;
use std::rc::Rc;

/// Wrapper around `AuthenticatedSensoClient` that reports a rejected credential.
///
/// A 401 from any call runs the `on_auth_expired` hook installed by the auth
/// service, which invalidates the session.
#[derive(Clone)]
pub struct WrappedAuthClient {
    inner: AuthenticatedSensoClient,
    on_auth_expired: Rc<dyn Fn()>,
}

impl WrappedAuthClient {
    pub fn new(client: AuthenticatedSensoClient, on_auth_expired: Rc<dyn Fn()>) -> Self {
        Self {
            inner: client,
            on_auth_expired,
        }
    }

    async fn guarded<T>(
        &self,
        call: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ClientError> {
        match call.await {
            Ok(result) => Ok(result),
            Err(error) => {
                if error.is_auth_expired() {
                    (self.on_auth_expired)();
                }
                Err(error)
            }
        }
    }

    pub async fn admin_statistics(&self) -> Result<AdminStatistics, ClientError> {
        self.guarded(self.inner.admin_statistics()).await
    }

    pub async fn list_registrations(
        &self,
        filter: &RegistrationFilter,
    ) -> Result<Vec<Registration>, ClientError> {
        self.guarded(self.inner.list_registrations(filter)).await
    }

    pub async fn update_registration_status(
        &self,
        id: &str,
        update: &StatusUpdate,
    ) -> Result<(), ClientError> {
        self.guarded(self.inner.update_registration_status(id, update))
            .await
    }
}
