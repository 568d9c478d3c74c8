pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod otp;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use otp::OtpPage;
