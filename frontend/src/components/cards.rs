use leptos::*;

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    view! {
        <div class=format!("bg-surface-elevated overflow-hidden shadow rounded-lg {}", class)>
            {has_header.then(|| view! {
                <div class="px-4 pt-5 sm:px-6">
                    {title.map(|t| view! { <h3 class="text-lg leading-6 font-medium text-fg">{t}</h3> })}
                    {description
                        .filter(|d| !d.is_empty())
                        .map(|d| view! { <p class="mt-1 text-sm text-fg-muted">{d}</p> })}
                </div>
            })}
            <div class="px-4 py-5 sm:p-6">{children()}</div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    pub fn classes(&self) -> &'static str {
        match self {
            Trend::Up => "text-status-success-text",
            Trend::Down => "text-status-error-text",
            Trend::Neutral => "text-fg-muted",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "fas fa-arrow-up",
            Trend::Down => "fas fa-arrow-down",
            Trend::Neutral => "fas fa-minus",
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional)] trend: Trend,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <div class="flex items-center justify-between">
                    <dt class="text-sm font-medium text-fg-muted">{title}</dt>
                    {icon.map(|icon| view! { <i class=format!("{} text-action-primary-bg", icon)></i> })}
                </div>
                <dd class="mt-1 text-2xl font-semibold text-fg">{value}</dd>
                {description.map(|d| view! {
                    <p class=format!("mt-2 text-xs flex items-center gap-1 {}", trend.classes())>
                        <i class=trend.icon()></i>
                        {d}
                    </p>
                })}
            </div>
        </div>
    }
}
