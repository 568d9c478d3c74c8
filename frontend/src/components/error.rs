use crate::api::ApiError;
use leptos::*;

/// Consolidated error banner for a form or page.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.message).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .and_then(|e| e.code)
                        .map(|code| view! { <div class="text-xs opacity-80">{code}</div> })
                }}
            </div>
        </Show>
    }
}
