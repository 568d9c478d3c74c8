#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::{cell::RefCell, rc::Rc};

    use crate::api::{ApiClient, AuthTokens, User};
    use crate::state::auth::{PersistedSession, SessionState, SessionStore};
    use crate::utils::{
        navigation::Navigator,
        storage::{KeyValueStore, MemoryStorage},
        token::token_expiring_at,
    };
    use leptos::*;

    pub fn sample_user() -> User {
        User {
            id: "u1".into(),
            email: "alice@example.com".into(),
            name: Some("Alice Example".into()),
        }
    }

    pub fn sample_tokens(exp_seconds: i64) -> AuthTokens {
        AuthTokens {
            access_token: token_expiring_at(exp_seconds),
            refresh_token: format!("refresh-{}", exp_seconds),
        }
    }

    /// Tokens whose access token is good for another hour.
    pub fn fresh_tokens() -> AuthTokens {
        sample_tokens(chrono::Utc::now().timestamp() + 3600)
    }

    pub fn persisted_state_json(user: Option<&User>, tokens: Option<&AuthTokens>) -> String {
        let state = SessionState {
            user: user.cloned(),
            tokens: tokens.cloned(),
            is_authenticated: user.is_some() && tokens.is_some(),
        };
        serde_json::to_string(&PersistedSession::new(state)).expect("serialize session")
    }

    /// Records hard navigations instead of performing them.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        path: RefCell<Option<String>>,
        visits: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn at(path: &str) -> Self {
            Self {
                path: RefCell::new(Some(path.to_string())),
                visits: RefCell::new(Vec::new()),
            }
        }

        pub fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> Option<String> {
            self.path.borrow().clone()
        }

        fn hard_navigate(&self, href: &str) {
            self.visits.borrow_mut().push(href.to_string());
            *self.path.borrow_mut() = Some(href.to_string());
        }
    }

    /// A store backed by memory, optionally seeded with a persisted session.
    pub fn memory_store(
        base_url: &str,
        seed: Option<(&User, &AuthTokens)>,
    ) -> (SessionStore, MemoryStorage, Rc<RecordingNavigator>) {
        let storage = MemoryStorage::new();
        if let Some((user, tokens)) = seed {
            storage
                .set_item(
                    crate::config::AUTH_STATE_STORAGE_KEY,
                    &persisted_state_json(Some(user), Some(tokens)),
                )
                .expect("seed storage");
        }
        let navigator = Rc::new(RecordingNavigator::at("/dashboard"));
        let api = ApiClient::new_with_base_url(base_url)
            .with_storage(Rc::new(storage.clone()))
            .with_navigator(navigator.clone());
        (SessionStore::new(api), storage, navigator)
    }

    /// Provides a session store in context, authenticated when `user` is set.
    pub fn provide_session(user: Option<User>) -> SessionStore {
        let (store, _, navigator) = match user.as_ref() {
            Some(u) => memory_store("http://unused.test/api", Some((u, &fresh_tokens()))),
            None => memory_store("http://unused.test/api", None),
        };
        provide_context(store.clone());
        provide_context::<Rc<dyn Navigator>>(navigator);
        store
    }
}
