use crate::{
    config::TOKEN_REFRESH_BUFFER_MS,
    router::routes,
    state::auth::{use_session, SessionState, SessionStore},
    utils::{
        navigation::{login_redirect_href, use_app_navigation, AppNavigation},
        time::now_millis,
        token::is_near_expiry_at,
    },
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    RedirectToLogin,
    Render { refresh: bool },
}

pub fn require_auth_decision(state: &SessionState, now_ms: i64) -> AuthDecision {
    if !state.is_authenticated {
        return AuthDecision::RedirectToLogin;
    }
    AuthDecision::Render {
        refresh: is_near_expiry_at(state.tokens.as_ref(), TOKEN_REFRESH_BUFFER_MS, now_ms),
    }
}

pub fn should_leave_anonymous_route(state: &SessionState) -> bool {
    state.is_authenticated
}

/// Refreshes without holding up the render. Failure already ends the
/// session inside the store; here it is only logged and kept observable.
pub fn spawn_background_refresh(session: SessionStore) {
    spawn_local(async move {
        if let Err(err) = session.refresh_access_token().await {
            log::warn!("Background token refresh failed: {}", err);
            session.record_refresh_failure(err);
        }
    });
}

/// Acts on the current session for a protected route: redirects when
/// anonymous, starts a background refresh when the token is close to expiry.
pub fn enforce_auth(session: &SessionStore, navigation: &AppNavigation, now_ms: i64) -> AuthDecision {
    let decision = session
        .state()
        .with_untracked(|state| require_auth_decision(state, now_ms));
    match decision {
        AuthDecision::RedirectToLogin => {
            let href = login_redirect_href(navigation.current_path().as_deref());
            log::debug!("Unauthenticated; redirecting to {}", href);
            navigation.go(&href);
        }
        AuthDecision::Render { refresh: true } => spawn_background_refresh(session.clone()),
        AuthDecision::Render { refresh: false } => {}
    }
    decision
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigation = use_app_navigation();
    let state = session.state();
    let authenticated = create_memo(move |_| state.with(|s| s.is_authenticated));

    // Re-evaluated on mount and whenever authentication flips, not on token
    // rotation, so a refresh cannot trigger another refresh.
    create_effect(move |_| {
        let _ = authenticated.get();
        enforce_auth(&session, &navigation, now_millis());
    });

    view! {
        <Show when=move || authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAnonymous(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigation = use_app_navigation();
    let state = session.state();
    let authenticated = create_memo(move |_| state.with(should_leave_anonymous_route));

    create_effect(move |_| {
        if authenticated.get() {
            navigation.go(routes::DASHBOARD);
        }
    });

    view! {
        <Show when=move || !authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}
