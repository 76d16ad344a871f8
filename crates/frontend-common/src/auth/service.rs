//! Session state machine
//!
//! `AuthService` is the only writer of the in-memory session and of the
//! session store. Views and the route guard read its state and subscribe to
//! changes; they never mutate it directly.

use super::credential::{Credential, Session, UserProfile};
use super::error::{AuthError, GENERIC_AUTH_ERROR};
use super::policy::{self, Capability};
use super::state::AuthState;
use super::store::SessionStore;
use crate::client::ApiClients;
use crate::client_wrapper::WrappedAuthClient;
use crate::config::FrontendConfig;
use crate::timeout::with_timeout;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use senso_http::types::{LoginRequest, LoginResponse};
use senso_http::{ClientError, PublicSensoClient};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Token issuance endpoint
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;
}

#[async_trait(?Send)]
impl AuthBackend for PublicSensoClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        Self::login(self, request).await
    }
}

/// Source of the current time for expiry checks
pub type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

type Listener = Rc<dyn Fn(&AuthState)>;

struct Shared {
    state: RefCell<AuthState>,
    pending_logins: Cell<usize>,
    generation: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
    store: SessionStore,
    backend: Rc<dyn AuthBackend>,
    clients: ApiClients,
    clock: Clock,
    login_timeout: Duration,
}

/// Handle to the application's session.
///
/// Cloning is cheap and every clone refers to the same session.
#[derive(Clone)]
pub struct AuthService {
    shared: Rc<Shared>,
}

impl PartialEq for AuthService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("state", &*self.shared.state.borrow())
            .field("pending_logins", &self.shared.pending_logins.get())
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Service talking to the configured backend and persisting to `localStorage`
    pub fn new(config: &FrontendConfig) -> Result<Self, ClientError> {
        Ok(Self::builder(ApiClients::new(config)?)
            .login_timeout(config.login_timeout)
            .build())
    }

    pub fn builder(clients: ApiClients) -> AuthServiceBuilder {
        AuthServiceBuilder {
            clients,
            store: None,
            backend: None,
            clock: None,
            login_timeout: crate::config::AuthConfig::LOGIN_TIMEOUT,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AuthState {
        self.shared.state.borrow().clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.shared.state.borrow().profile().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.shared.state.borrow().is_authenticated()
    }

    /// Whether the current user holds `required`
    pub fn can_access(&self, required: Option<&Capability>) -> bool {
        policy::can_access(self.shared.state.borrow().profile(), required)
    }

    /// True while at least one login request is outstanding
    pub fn login_in_progress(&self) -> bool {
        self.shared.pending_logins.get() > 0
    }

    pub fn public_client(&self) -> PublicSensoClient {
        self.shared.clients.public().clone()
    }

    /// Bearer-carrying client for back-office calls, `None` while signed out
    pub fn authenticated_client(&self) -> Option<WrappedAuthClient> {
        self.shared.clients.authenticated()
    }

    /// Restore the persisted session. Only the first call has any effect.
    ///
    /// Always leaves the service out of `Unresolved`. Corrupt or expired
    /// persisted data is discarded.
    pub fn hydrate(&self) -> AuthState {
        if !self.shared.state.borrow().is_resolving() {
            return self.state();
        }

        let restored = match self.shared.store.try_load() {
            Ok(Some(session)) if session.credential.is_expired((self.shared.clock)()) => {
                tracing::info!(user_id = session.profile.id, "persisted session has expired");
                self.shared.store.clear();
                None
            }
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, kind = err.kind(), "discarding persisted session");
                self.shared.store.clear();
                None
            }
        };

        match restored {
            Some(session) => {
                tracing::debug!(user_id = session.profile.id, rol = %session.profile.rol, "session restored");
                self.activate(session);
            }
            None => {
                self.shared.clients.clear_auth_token();
                self.transition(AuthState::Anonymous);
            }
        }

        self.state()
    }

    /// Exchange credentials for a session.
    ///
    /// A failed attempt leaves the current state and the store untouched.
    /// When several attempts overlap, the one that completes last wins. A
    /// response arriving after `logout` or `invalidate` is discarded.
    pub async fn login(&self, correo: &str, contrasena: &str) -> Result<UserProfile, AuthError> {
        let _pending = PendingLogin::start(Rc::clone(&self.shared));
        let generation = self.shared.generation.get();
        let backend = Rc::clone(&self.shared.backend);
        let request = LoginRequest {
            correo: correo.to_string(),
            contrasena: contrasena.to_string(),
        };

        let response = match with_timeout(self.shared.login_timeout, backend.login(&request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, status = ?err.status(), "login rejected");
                return Err(err.into());
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.shared.login_timeout, "login timed out");
                return Err(AuthError::timeout());
            }
        };

        if response.access_token.trim().is_empty() {
            tracing::warn!("login response carried an empty token");
            return Err(AuthError::Authentication(GENERIC_AUTH_ERROR.to_string()));
        }

        let credential = Credential::new(response.access_token);
        if credential.is_expired((self.shared.clock)()) {
            tracing::warn!(user_id = response.user.id, "login response carried an expired token");
            return Err(AuthError::Authentication(GENERIC_AUTH_ERROR.to_string()));
        }

        if self.shared.generation.get() != generation {
            tracing::info!(user_id = response.user.id, "discarding login completed after sign-out");
            return Err(AuthError::Authentication(GENERIC_AUTH_ERROR.to_string()));
        }

        let session = Session {
            credential,
            profile: response.user,
        };
        let profile = session.profile.clone();

        self.shared.store.save(&session.credential, &session.profile);
        tracing::info!(user_id = profile.id, rol = %profile.rol, "login succeeded");
        self.activate(session);

        Ok(profile)
    }

    /// Forget the session locally. Never fails.
    pub fn logout(&self) {
        self.bump_generation();
        self.shared.store.clear();
        self.shared.clients.clear_auth_token();
        tracing::info!("logged out");
        self.transition(AuthState::Anonymous);
    }

    /// Drop an active session the backend or the clock no longer accepts
    pub fn invalidate(&self, reason: &str) {
        if !self.is_authenticated() {
            return;
        }
        tracing::warn!(reason, "session invalidated");
        self.bump_generation();
        self.shared.store.clear();
        self.shared.clients.clear_auth_token();
        self.transition(AuthState::Anonymous);
    }

    /// Invalidate the session if its credential has expired.
    /// Returns whether the session is still active.
    pub fn revalidate(&self) -> bool {
        let expired = self
            .shared
            .state
            .borrow()
            .credential()
            .is_some_and(|credential| credential.is_expired((self.shared.clock)()));

        if expired {
            self.invalidate("credential expired");
        }
        self.is_authenticated()
    }

    /// Run `listener` after every state transition until the subscription is dropped
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) -> Subscription {
        let id = self.shared.next_listener.get();
        self.shared.next_listener.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Subscription {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }

    fn bump_generation(&self) {
        self.shared
            .generation
            .set(self.shared.generation.get().wrapping_add(1));
    }

    fn activate(&self, session: Session) {
        let hook = expiry_hook(&self.shared, session.credential.token().to_string());
        self.shared
            .clients
            .set_auth_token(session.credential.token(), hook);
        self.transition(AuthState::Authenticated(session));
    }

    fn transition(&self, next: AuthState) {
        *self.shared.state.borrow_mut() = next;
        notify(&self.shared);
    }
}

/// Invalidates the session when the backend rejects `token`, unless a newer
/// credential has replaced it in the meantime.
fn expiry_hook(shared: &Rc<Shared>, token: String) -> Rc<dyn Fn()> {
    let weak = Rc::downgrade(shared);
    Rc::new(move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let current = shared
            .state
            .borrow()
            .credential()
            .is_some_and(|credential| credential.token() == token);
        if current {
            AuthService { shared }.invalidate("credential rejected by backend");
        }
    })
}

fn notify(shared: &Shared) {
    let state = shared.state.borrow().clone();
    let listeners: Vec<Listener> = shared
        .listeners
        .borrow()
        .iter()
        .map(|(_, listener)| Rc::clone(listener))
        .collect();

    for listener in listeners {
        listener(&state);
    }
}

struct PendingLogin(Rc<Shared>);

impl PendingLogin {
    fn start(shared: Rc<Shared>) -> Self {
        shared.pending_logins.set(shared.pending_logins.get() + 1);
        Self(shared)
    }
}

impl Drop for PendingLogin {
    fn drop(&mut self) {
        self.0
            .pending_logins
            .set(self.0.pending_logins.get().saturating_sub(1));
    }
}

/// Keeps a state listener registered; dropping it unsubscribes
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    shared: Weak<Shared>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Configures an [`AuthService`]; unset parts default to the browser
pub struct AuthServiceBuilder {
    clients: ApiClients,
    store: Option<SessionStore>,
    backend: Option<Rc<dyn AuthBackend>>,
    clock: Option<Clock>,
    login_timeout: Duration,
}

impl AuthServiceBuilder {
    #[must_use]
    pub fn store(mut self, store: SessionStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the login endpoint (defaults to the public client)
    #[must_use]
    pub fn backend(mut self, backend: Rc<dyn AuthBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub const fn login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = timeout;
        self
    }

    pub fn build(self) -> AuthService {
        let backend = self
            .backend
            .unwrap_or_else(|| Rc::new(self.clients.public().clone()));

        AuthService {
            shared: Rc::new(Shared {
                state: RefCell::new(AuthState::Unresolved),
                pending_logins: Cell::new(0),
                generation: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                store: self.store.unwrap_or_else(SessionStore::browser),
                backend,
                clients: self.clients,
                clock: self.clock.unwrap_or_else(|| Rc::new(Utc::now)),
                login_timeout: self.login_timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credential::{test_jwt, Role};
    use crate::auth::store::MemoryStorage;

    fn service(storage: &MemoryStorage, now: DateTime<Utc>) -> AuthService {
        let public = PublicSensoClient::new("http://127.0.0.1:9").unwrap();
        AuthService::builder(ApiClients::from_public(public))
            .store(SessionStore::new(Rc::new(storage.clone())))
            .clock(Rc::new(move || now))
            .build()
    }

    fn admin() -> UserProfile {
        UserProfile {
            id: 1,
            nombre: "Admin".into(),
            correo: None,
            rol: Role::Admin,
        }
    }

    #[test]
    fn hydrate_resolves_exactly_once() {
        let storage = MemoryStorage::new();
        let service = service(&storage, Utc::now());
        assert!(service.state().is_resolving());

        assert_eq!(service.hydrate(), AuthState::Anonymous);

        // A session written after hydration is not picked up by a second pass
        SessionStore::new(Rc::new(storage)).save(&Credential::new("tok1"), &admin());
        assert_eq!(service.hydrate(), AuthState::Anonymous);
    }

    #[test]
    fn hydrate_discards_expired_credential() {
        let storage = MemoryStorage::new();
        let now = Utc::now();
        let store = SessionStore::new(Rc::new(storage.clone()));
        store.save(&Credential::new(test_jwt(now.timestamp() - 60)), &admin());

        let service = service(&storage, now);
        assert_eq!(service.hydrate(), AuthState::Anonymous);
        assert!(store.load().is_none());
    }

    #[test]
    fn hydrate_installs_bearer_client() {
        let storage = MemoryStorage::new();
        SessionStore::new(Rc::new(storage.clone())).save(&Credential::new("tok1"), &admin());

        let service = service(&storage, Utc::now());
        assert!(service.authenticated_client().is_none());
        assert!(service.hydrate().is_authenticated());
        assert!(service.authenticated_client().is_some());
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let storage = MemoryStorage::new();
        let service = service(&storage, Utc::now());
        let seen = Rc::new(Cell::new(0));

        let subscription = {
            let seen = Rc::clone(&seen);
            service.subscribe(move |_| seen.set(seen.get() + 1))
        };
        service.hydrate();
        assert_eq!(seen.get(), 1);

        drop(subscription);
        service.logout();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn revalidate_drops_expired_session() {
        let storage = MemoryStorage::new();
        let now = Utc::now();
        let store = SessionStore::new(Rc::new(storage.clone()));
        store.save(&Credential::new(test_jwt(now.timestamp() + 120)), &admin());

        let clock_now = Rc::new(Cell::new(now));
        let public = PublicSensoClient::new("http://127.0.0.1:9").unwrap();
        let service = {
            let clock_now = Rc::clone(&clock_now);
            AuthService::builder(ApiClients::from_public(public))
                .store(store.clone())
                .clock(Rc::new(move || clock_now.get()))
                .build()
        };

        assert!(service.hydrate().is_authenticated());
        assert!(service.revalidate());

        clock_now.set(now + chrono::Duration::seconds(600));
        assert!(!service.revalidate());
        assert_eq!(service.state(), AuthState::Anonymous);
        assert!(store.load().is_none());
    }
}
