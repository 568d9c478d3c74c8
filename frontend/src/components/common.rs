use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-elevated border border-border text-fg hover:bg-surface-muted",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

/// While `loading`, the button is disabled and shows `loading_text` (when
/// given) in place of its children.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] loading_text: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    let loading_text = store_value(loading_text);
    view! {
        <button
            type=button_type
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().to_string()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.call(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {move || match (loading.get(), loading_text.get_value()) {
                (true, Some(text)) => text.into_view(),
                _ => children().into_view(),
            }}
        </button>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LinkVariant {
    #[default]
    Primary,
    Muted,
}

impl LinkVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            LinkVariant::Primary => "text-action-primary-bg hover:text-action-primary-bg-hover font-semibold",
            LinkVariant::Muted => "text-fg-muted hover:text-fg",
        }
    }
}

/// Text-styled action. With `href` it is an anchor, otherwise a button.
#[component]
pub fn LinkButton(
    #[prop(optional)] variant: LinkVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = format!("text-sm underline-offset-2 hover:underline {}", variant.classes());
    match href {
        Some(href) => view! { <a href=href class=class>{children()}</a> }.into_view(),
        None => view! {
            <button
                type="button"
                class=class
                on:click=move |ev| {
                    if let Some(cb) = on_click {
                        cb.call(ev);
                    }
                }
            >
                {children()}
            </button>
        }
        .into_view(),
    }
}

pub const DEFAULT_BRAND_NAME: &str = "Acme Inc.";

#[component]
pub fn Logo(
    #[prop(optional, into)] brand_name: Option<String>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let brand_name = brand_name.unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string());
    let initial = brand_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    view! {
        <div class="flex items-center gap-2">
            <div class="w-9 h-9 rounded-xl bg-action-primary-bg text-action-primary-text flex items-center justify-center font-display font-bold">
                {initial}
            </div>
            <Show when=move || !compact>
                <span class="text-lg font-display font-bold text-fg">{brand_name.clone()}</span>
            </Show>
        </div>
    }
}
