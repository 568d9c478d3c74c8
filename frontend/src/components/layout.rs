use crate::{
    api::User,
    components::{cards::Card, common::Logo},
    router::routes,
    state::auth::use_session,
    utils::navigation::{use_app_navigation, use_current_path},
};
use leptos::*;

/// Centered card for the signed-out screens.
#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
    #[prop(optional, into)] brand_name: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface-muted py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6">
                <div class="flex justify-center">
                    <Logo brand_name=brand_name.unwrap_or_else(|| crate::components::common::DEFAULT_BRAND_NAME.to_string()) />
                </div>
                <Card title=title description=description>
                    {children()}
                </Card>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Main Dashboard", path: routes::DASHBOARD, icon: "fas fa-home" },
    NavItem { label: "AI Chat UI", path: "/chat", icon: "fas fa-comments" },
    NavItem { label: "AI Text Generator", path: "/text-generator", icon: "fas fa-file-alt" },
    NavItem { label: "AI Image Generator", path: "/image-generator", icon: "fas fa-image" },
    NavItem { label: "AI Text to Speech", path: "/text-to-speech", icon: "fas fa-microphone" },
    NavItem { label: "Users List", path: "/users", icon: "fas fa-users" },
    NavItem { label: "Profile Settings", path: "/settings", icon: "fas fa-cog" },
    NavItem { label: "History", path: "/history", icon: "fas fa-history" },
    NavItem { label: "Authentication", path: "/authentication", icon: "fas fa-shield-alt" },
];

pub fn breadcrumb_label(path: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|item| item.path == path)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}

fn user_initial(user: &User) -> String {
    user.email
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

fn display_name(user: &User) -> String {
    user.name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "User".to_string())
}

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = use_session();
    let navigation = use_app_navigation();
    let current_path = use_current_path();
    let (expanded, set_expanded) = create_signal(true);
    let state = session.state();
    let user = create_memo(move |_| state.with(|s| s.user.clone()));

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            navigation.go(routes::LOGIN);
        }
    };
    let toggle = move |_| set_expanded.update(|open| *open = !*open);
    let item_class = move |active: bool| {
        format!(
            "flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium transition-colors {} {}",
            if active {
                "bg-action-primary-bg text-action-primary-text"
            } else {
                "text-fg-muted hover:bg-action-ghost-bg-hover hover:text-fg"
            },
            if expanded.get() { "" } else { "justify-center" }
        )
    };

    view! {
        <div class="flex h-screen overflow-hidden bg-surface-muted">
            <aside class=move || {
                format!(
                    "flex flex-col border-r border-border bg-surface-elevated transition-all duration-300 {}",
                    if expanded.get() { "w-64" } else { "w-16" }
                )
            }>
                <div class="flex h-16 items-center border-b border-border px-4">
                    <Logo brand_name="Horizon AI" compact=false />
                </div>
                <nav class="flex-1 space-y-1 overflow-y-auto p-2">
                    <button
                        type="button"
                        class="flex w-full items-center gap-3 rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=toggle
                    >
                        <i class="fas fa-bars"></i>
                        <Show when=move || expanded.get()>
                            <span>"Toggle Menu"</span>
                        </Show>
                    </button>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            let active = move || current_path.with(|path| path == item.path);
                            view! {
                                <a
                                    href=item.path
                                    class=move || item_class(active())
                                    aria-current=move || active().then_some("page")
                                >
                                    <i class=item.icon></i>
                                    <Show when=move || expanded.get()>
                                        <span>{item.label}</span>
                                    </Show>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="border-t border-border p-2">
                    <button
                        type="button"
                        class="flex w-full items-center gap-3 rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:bg-status-error-bg hover:text-status-error-text"
                        on:click=on_logout
                    >
                        <i class="fas fa-sign-out-alt"></i>
                        <Show when=move || expanded.get()>
                            <span>"Logout"</span>
                        </Show>
                    </button>
                    {move || {
                        user.get()
                            .filter(|_| expanded.get())
                            .map(|u| view! {
                                <div class="mt-2 flex items-center gap-2 rounded-md bg-surface-muted p-2">
                                    <div class="flex h-8 w-8 items-center justify-center rounded-full bg-action-primary-bg text-sm font-semibold text-action-primary-text">
                                        {user_initial(&u)}
                                    </div>
                                    <div class="flex-1 overflow-hidden">
                                        <p class="truncate text-sm font-medium text-fg">{display_name(&u)}</p>
                                        <p class="truncate text-xs text-fg-muted">{u.email.clone()}</p>
                                    </div>
                                </div>
                            })
                    }}
                </div>
            </aside>
            <div class="flex flex-1 flex-col overflow-hidden">
                <header class="flex h-16 items-center border-b border-border bg-surface-elevated px-6">
                    <nav aria-label="Breadcrumb" class="flex items-center gap-2 text-sm">
                        <span class="text-fg-muted">"Pages"</span>
                        <span class="text-fg-muted">"/"</span>
                        <span class="font-medium text-fg">
                            {move || current_path.with(|path| breadcrumb_label(path))}
                        </span>
                    </nav>
                </header>
                <main class="flex-1 overflow-y-auto p-6">{children()}</main>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn auth_layout_renders_title_and_slot() {
        let html = render_to_string(move || {
            view! {
                <AuthLayout title="Login to your account">
                    <div>"form-slot"</div>
                </AuthLayout>
            }
        });
        assert!(html.contains("Login to your account"));
        assert!(html.contains("form-slot"));
        assert!(html.contains(crate::components::common::DEFAULT_BRAND_NAME));
    }

    #[test]
    fn dashboard_layout_renders_nav_user_and_breadcrumb() {
        let html = render_to_string(move || {
            provide_session(Some(sample_user()));
            view! {
                <DashboardLayout>
                    <div>"page-slot"</div>
                </DashboardLayout>
            }
        });
        assert!(html.contains("page-slot"));
        assert!(html.contains("Users List"));
        assert!(html.contains("Logout"));
        assert!(html.contains("Alice Example"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("aria-current=\"page\""));
        assert!(html.contains("Main Dashboard"));
    }
}
