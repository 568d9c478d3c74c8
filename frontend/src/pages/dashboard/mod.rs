pub mod panel;
pub mod utils;

pub use panel::DashboardPage;
