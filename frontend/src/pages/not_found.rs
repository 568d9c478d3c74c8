use crate::{components::common::Button, router::routes, utils::navigation::use_app_navigation};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigation = use_app_navigation();
    let go_home = Callback::new(move |_: ev::MouseEvent| navigation.go(routes::DASHBOARD));
    view! {
        <div class="flex min-h-screen items-center justify-center bg-surface-muted p-4">
            <div class="text-center">
                <h1 class="text-9xl font-bold text-action-primary-bg">"404"</h1>
                <p class="mt-4 text-xl text-fg-muted">
                    "Oops, it looks like the page you're looking for doesn't exist."
                </p>
                <Button class="mt-8" on_click=go_home>"Go to Homepage"</Button>
            </div>
        </div>
    }
}
