use crate::components::cards::Trend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSummary {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUser {
    pub email: &'static str,
    pub provider: &'static str,
    pub created: &'static str,
    pub last_sign_in: &'static str,
    pub uid: &'static str,
}

// Static until the API exposes usage metrics.
pub fn stat_summaries() -> Vec<StatSummary> {
    vec![
        StatSummary {
            title: "Total Users",
            value: "2,345",
            description: "+20.1% from last month",
            icon: "fas fa-users",
            trend: Trend::Up,
        },
        StatSummary {
            title: "Active Sessions",
            value: "573",
            description: "+12.5% from last hour",
            icon: "fas fa-bolt",
            trend: Trend::Up,
        },
        StatSummary {
            title: "Revenue",
            value: "$45,231",
            description: "+8.2% from last month",
            icon: "fas fa-dollar-sign",
            trend: Trend::Up,
        },
        StatSummary {
            title: "Credits Usage",
            value: "149,758",
            description: "Last year usage",
            icon: "fas fa-chart-line",
            trend: Trend::Neutral,
        },
    ]
}

pub fn recent_users() -> Vec<RecentUser> {
    vec![
        RecentUser {
            email: "hello@horizon-ui.com",
            provider: "Google",
            created: "06 Nov, 2023 11:33",
            last_sign_in: "06 Nov, 2023 11:33",
            uid: "f3f42fc419-ce32-49fc-92df...",
        },
        RecentUser {
            email: "thomas@gmail.com",
            provider: "Google",
            created: "06 Nov, 2023 11:29",
            last_sign_in: "06 Nov, 2023 11:29",
            uid: "f3f42fc419-ce32-49fc-92df...",
        },
        RecentUser {
            email: "markwilliam@hotmail.com",
            provider: "Email",
            created: "06 Nov, 2023 11:21",
            last_sign_in: "06 Nov, 2023 11:21",
            uid: "f3f42fc419-ce32-49fc-92df...",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_has_four_stats() {
        let stats = stat_summaries();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[3].trend, Trend::Neutral);
    }
}
