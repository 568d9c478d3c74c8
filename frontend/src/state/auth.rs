//! Client-side session: who is signed in, with which tokens, and the email
//! waiting on OTP verification.
//!
//! [`SessionStore`] is the only writer of [`SessionState`]. Every mutation
//! replaces the whole triple and is mirrored to durable storage under
//! [`AUTH_STATE_STORAGE_KEY`], so a reload comes back in the same phase.

use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{
    api::{ApiClient, ApiError, AuthTokens, LoginCredentials, User},
    config::AUTH_STATE_STORAGE_KEY,
    utils::storage::KeyValueStore,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub tokens: Option<AuthTokens>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl SessionState {
    pub fn authenticated(user: User, tokens: AuthTokens) -> Self {
        Self {
            user: Some(user),
            tokens: Some(tokens),
            is_authenticated: true,
        }
    }

    /// Anything short of a complete authenticated triple collapses to empty.
    fn normalized(self) -> Self {
        if self.is_authenticated && self.user.is_some() && self.tokens.is_some() {
            self
        } else {
            Self::default()
        }
    }
}

/// Storage envelope: `{"state": {...}, "version": 0}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub state: SessionState,
    #[serde(default)]
    pub version: u32,
}

impl PersistedSession {
    pub fn new(state: SessionState) -> Self {
        Self { state, version: 0 }
    }
}

/// Email submitted at login, held until the OTP exchange completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    PendingOtp,
    Authenticated,
}

#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    pending_login: RwSignal<Option<PendingLogin>>,
    last_refresh_error: RwSignal<Option<ApiError>>,
    api: ApiClient,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Builds the store and rehydrates it from the client's storage.
    pub fn new(api: ApiClient) -> Self {
        let storage = api.storage();
        let initial = rehydrate(storage.as_ref());
        Self {
            state: create_rw_signal(initial),
            pending_login: create_rw_signal(None),
            last_refresh_error: create_rw_signal(None),
            api,
            storage,
        }
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Tracked read, for views and effects.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn pending_email(&self) -> Option<String> {
        self.pending_login
            .with_untracked(|p| p.as_ref().map(|p| p.email.clone()))
    }

    pub fn phase(&self) -> SessionPhase {
        if self.state.with_untracked(|s| s.is_authenticated) {
            SessionPhase::Authenticated
        } else if self.pending_login.with_untracked(Option::is_some) {
            SessionPhase::PendingOtp
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn last_refresh_error(&self) -> Signal<Option<ApiError>> {
        self.last_refresh_error.into()
    }

    pub fn set_auth(&self, user: User, tokens: AuthTokens) {
        self.commit(SessionState::authenticated(user, tokens));
    }

    /// Starts a login. Never authenticates on its own; the server answers
    /// by mailing an OTP.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        self.pending_login.set(Some(PendingLogin {
            email: credentials.email.clone(),
        }));
        match self.api.login(credentials).await {
            Ok(()) => {
                log::debug!("OTP requested for pending login");
                self.last_refresh_error.set(None);
                Ok(())
            }
            Err(err) => {
                self.pending_login.set(None);
                Err(err)
            }
        }
    }

    /// Completes the pending login. A failure keeps the pending email so the
    /// user can retry the code without logging in again.
    pub async fn verify_otp(&self, code: &str) -> Result<(), ApiError> {
        let email = self
            .pending_email()
            .ok_or_else(|| ApiError::precondition("No pending login. Please sign in again."))?;
        let verified = self.api.verify_otp(&email, code).await?;
        self.commit(SessionState::authenticated(verified.user, verified.tokens));
        self.pending_login.set(None);
        self.last_refresh_error.set(None);
        Ok(())
    }

    /// Rotates the token pair. Any failure ends the session.
    ///
    /// Concurrent calls are not coordinated; whichever response lands last wins.
    pub async fn refresh_access_token(&self) -> Result<(), ApiError> {
        let refresh_token = self
            .state
            .with_untracked(|s| s.tokens.as_ref().map(|t| t.refresh_token.clone()))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::precondition("No refresh token available"))?;

        match self.api.refresh_tokens(&refresh_token).await {
            Ok(tokens) => {
                let Some(user) = self.state.with_untracked(|s| s.user.clone()) else {
                    log::warn!("Session ended while refreshing; discarding new tokens");
                    return Ok(());
                };
                // A 401 elsewhere clears storage before the page reloads.
                if !rehydrate(self.storage.as_ref()).is_authenticated {
                    log::warn!("Stored session was cleared while refreshing; discarding new tokens");
                    return Ok(());
                }
                self.commit(SessionState::authenticated(user, tokens));
                self.last_refresh_error.set(None);
                Ok(())
            }
            Err(err) => {
                self.logout();
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        self.commit(SessionState::default());
        self.pending_login.set(None);
        self.last_refresh_error.set(None);
    }

    pub(crate) fn record_refresh_failure(&self, err: ApiError) {
        self.last_refresh_error.set(Some(err));
    }

    fn commit(&self, next: SessionState) {
        self.state.set(next.clone());
        persist(self.storage.as_ref(), next);
    }
}

fn persist(storage: &dyn KeyValueStore, state: SessionState) {
    let result = serde_json::to_string(&PersistedSession::new(state))
        .map_err(|e| e.to_string())
        .and_then(|json| storage.set_item(AUTH_STATE_STORAGE_KEY, &json));
    if let Err(err) = result {
        log::error!("Failed to persist auth state: {}", err);
    }
}

fn rehydrate(storage: &dyn KeyValueStore) -> SessionState {
    let raw = match storage.get_item(AUTH_STATE_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SessionState::default(),
        Err(err) => {
            log::warn!("Failed to read auth state: {}", err);
            return SessionState::default();
        }
    };
    match serde_json::from_str::<PersistedSession>(&raw) {
        Ok(persisted) => persisted.state.normalized(),
        Err(err) => {
            log::warn!("Ignoring unreadable auth state: {}", err);
            SessionState::default()
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let store = SessionStore::new(api);
    log::debug!("Session rehydrated as {:?}", store.phase());
    provide_context(store);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_default();
        SessionStore::new(api)
    })
}

pub fn use_login_action() -> Action<LoginCredentials, Result<(), ApiError>> {
    let store = use_session();
    create_action(move |credentials: &LoginCredentials| {
        let store = store.clone();
        let credentials = credentials.clone();
        async move { store.login(&credentials).await }
    })
}

pub fn use_verify_otp_action() -> Action<String, Result<(), ApiError>> {
    let store = use_session();
    create_action(move |code: &String| {
        let store = store.clone();
        let code = code.clone();
        async move { store.verify_otp(&code).await }
    })
}
