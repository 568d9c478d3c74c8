use crate::{
    components::{
        cards::{Card, StatCard},
        table::{Table, TableColumn},
    },
    pages::dashboard::utils::{recent_users, stat_summaries, RecentUser},
};
use leptos::*;

fn user_columns() -> Vec<TableColumn<RecentUser>> {
    vec![
        TableColumn::new("Email Address", |u: &RecentUser| u.email.to_string()),
        TableColumn::new("Provider", |u: &RecentUser| u.provider.to_string()).muted(),
        TableColumn::new("Created", |u: &RecentUser| u.created.to_string()).muted(),
        TableColumn::new("Last Sign In", |u: &RecentUser| u.last_sign_in.to_string()).muted(),
        TableColumn::new("User UID", |u: &RecentUser| u.uid.to_string()).muted(),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-display font-bold text-fg">"Main Dashboard"</h1>
                <p class="text-sm text-fg-muted">"Welcome to your admin panel"</p>
            </div>
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 xl:grid-cols-4">
                {stat_summaries()
                    .into_iter()
                    .map(|stat| view! {
                        <StatCard
                            title=stat.title
                            value=stat.value
                            description=stat.description
                            icon=stat.icon
                            trend=stat.trend
                        />
                    })
                    .collect_view()}
            </div>
            <Card title="Credits Usage Last Year">
                <div class="h-64 flex items-center justify-center rounded-md border border-dashed border-border">
                    <p class="text-sm text-fg-muted">"Chart visualization area"</p>
                </div>
            </Card>
            <Card title="Recent Users">
                <Table columns=user_columns() rows=recent_users() />
            </Card>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_renders_stats_chart_and_users() {
        let html = render_to_string(move || view! { <DashboardPage /> });
        assert!(html.contains("Main Dashboard"));
        assert!(html.contains("Total Users"));
        assert!(html.contains("Credits Usage"));
        assert!(html.contains("Chart visualization area"));
        assert!(html.contains("Recent Users"));
        assert!(html.contains("thomas@gmail.com"));
        assert!(html.contains("Last Sign In"));
    }
}
