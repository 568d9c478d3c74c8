use crate::{
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::{Form, FormField},
        layout::AuthLayout,
    },
    pages::login::view_model::use_login_view_model,
    state::auth::use_session,
};
use leptos::{Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    // Why the last session ended, if a background refresh ended it.
    let session_error = use_session().last_refresh_error();
    let pending = vm.login_action.pending();

    let on_submit = Callback::new(move |_| {
        vm.submit();
    });
    let on_email = Callback::new(move |value: String| vm.edit("email", value));
    let on_password = Callback::new(move |value: String| vm.edit("password", value));

    view! {
        <AuthLayout title="Login to your account">
            <InlineErrorMessage error=session_error />
            <Form on_submit=on_submit error=vm.error>
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="m@example.com"
                    autocomplete="email"
                    value=vm.form.email
                    error=vm.field_error("email")
                    on_input=on_email
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=vm.form.password
                    error=vm.field_error("password")
                    on_input=on_password
                />
                <Button
                    button_type="submit"
                    class="w-full"
                    loading=pending
                    loading_text="Logging in..."
                    disabled=Signal::derive(move || !vm.can_submit())
                >
                    "Login"
                </Button>
            </Form>
        </AuthLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_form() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Login to your account"));
        assert!(html.contains("m@example.com"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Login"));
    }

    #[test]
    fn login_panel_explains_an_ended_session() {
        let html = render_to_string(move || {
            let session = provide_session(None);
            session.record_refresh_failure(ApiError::network());
            view! { <LoginPanel /> }
        });
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Network error. Please check your connection."));
    }

    #[test]
    fn login_panel_has_no_banner_for_a_fresh_visit() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <LoginPanel /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
