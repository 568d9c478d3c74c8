use leptos::*;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::OtpPanel;

#[component]
pub fn OtpPage() -> impl IntoView {
    view! { <OtpPanel /> }
}
