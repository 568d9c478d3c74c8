use std::rc::Rc;

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RequireAnonymous, RequireAuth},
        layout::DashboardLayout,
    },
    pages::{DashboardPage, LoginPage, NotFoundPage, OtpPage},
    state::auth::SessionProvider,
    utils::navigation::{BrowserNavigator, Navigator},
};

pub mod routes {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const OTP: &str = "/otp";
    pub const DASHBOARD: &str = "/dashboard";
    pub const NOT_FOUND: &str = "/404";
}

pub const ROUTE_PATHS: &[&str] = &[
    routes::ROOT,
    routes::LOGIN,
    routes::OTP,
    routes::DASHBOARD,
    routes::NOT_FOUND,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[routes::DASHBOARD];

pub const ANONYMOUS_ROUTE_PATHS: &[&str] = &[routes::LOGIN, routes::OTP];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context::<Rc<dyn Navigator>>(Rc::new(BrowserNavigator));
    view! {
        <Title formatter=|page: String| format!("{} | Admin Dashboard", page) />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path=routes::ROOT view=|| view! { <Redirect path=routes::DASHBOARD /> } />
                    <Route path=routes::LOGIN view=AnonymousLogin />
                    <Route path=routes::OTP view=AnonymousOtp />
                    <Route path=routes::DASHBOARD view=ProtectedDashboard />
                    <Route path=routes::NOT_FOUND view=MissingPage />
                    <Route path="/*any" view=MissingPage />
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn AnonymousLogin() -> impl IntoView {
    view! {
        <Title text="Login" />
        <RequireAnonymous><LoginPage /></RequireAnonymous>
    }
}

#[component]
fn AnonymousOtp() -> impl IntoView {
    view! {
        <Title text="Verify" />
        <RequireAnonymous><OtpPage /></RequireAnonymous>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <Title text="Dashboard" />
        <RequireAuth>
            <DashboardLayout><DashboardPage /></DashboardLayout>
        </RequireAuth>
    }
}

#[component]
fn MissingPage() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <NotFoundPage />
    }
}
