use std::rc::Rc;

use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions, RouterContext};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::router::routes;

/// Full-page navigation, as opposed to the router's in-app transitions.
pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn hard_navigate(&self, href: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }

    fn hard_navigate(&self, href: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn hard_navigate(&self, href: &str) {
        log::debug!("navigation to {} skipped outside the browser", href);
    }
}

/// Navigator from context, or the real browser one.
pub fn use_navigator() -> Rc<dyn Navigator> {
    use_context::<Rc<dyn Navigator>>().unwrap_or_else(|| Rc::new(BrowserNavigator))
}

/// Moves between routes, in-app when a router is mounted so memory-only
/// state (the pending login) survives the transition.
#[derive(Clone)]
pub struct AppNavigation {
    in_app: Option<Rc<dyn Fn(&str)>>,
    navigator: Rc<dyn Navigator>,
}

impl AppNavigation {
    pub fn go(&self, href: &str) {
        match &self.in_app {
            Some(navigate) => navigate(href),
            None => self.navigator.hard_navigate(href),
        }
    }

    pub fn current_path(&self) -> Option<String> {
        self.navigator.current_path()
    }
}

pub fn use_app_navigation() -> AppNavigation {
    let in_app = use_context::<RouterContext>().map(|_| {
        let navigate = use_navigate();
        Rc::new(move |href: &str| navigate(href, NavigateOptions::default())) as Rc<dyn Fn(&str)>
    });
    AppNavigation {
        in_app,
        navigator: use_navigator(),
    }
}

/// Current pathname; reactive under a router, fixed at call time otherwise.
pub fn use_current_path() -> Signal<String> {
    if use_context::<RouterContext>().is_some() {
        let location = use_location();
        Signal::derive(move || location.pathname.get())
    } else {
        let path = use_navigator().current_path().unwrap_or_default();
        Signal::derive(move || path.clone())
    }
}

pub fn is_login_path(path: &str) -> bool {
    path.contains(routes::LOGIN)
}

/// Login URL remembering where the user was headed.
pub fn login_redirect_href(from: Option<&str>) -> String {
    match from.filter(|path| !path.is_empty() && !is_login_path(path)) {
        Some(path) => format!(
            "{}?redirect={}",
            routes::LOGIN,
            utf8_percent_encode(path, NON_ALPHANUMERIC)
        ),
        None => routes::LOGIN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirect_encodes_origin() {
        assert_eq!(
            login_redirect_href(Some("/dashboard")),
            "/login?redirect=%2Fdashboard"
        );
    }

    #[test]
    fn login_redirect_without_origin_is_plain_login() {
        assert_eq!(login_redirect_href(None), "/login");
        assert_eq!(login_redirect_href(Some("")), "/login");
        assert_eq!(login_redirect_href(Some("/login")), "/login");
    }

    #[test]
    fn login_path_detection_matches_nested_paths() {
        assert!(is_login_path("/login"));
        assert!(is_login_path("/app/login"));
        assert!(!is_login_path("/dashboard"));
    }
}
