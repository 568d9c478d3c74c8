use crate::{
    components::{
        common::{Button, LinkButton, LinkVariant},
        forms::{Form, FormField},
        layout::AuthLayout,
    },
    pages::otp::view_model::use_otp_view_model,
    router::routes,
    utils::validation::OTP_LENGTH,
};
use leptos::{Callback, *};

#[component]
pub fn OtpPanel() -> impl IntoView {
    let vm = use_otp_view_model();
    let pending = vm.verify_action.pending();

    let on_submit = Callback::new(move |_| {
        vm.submit();
    });
    let on_code = Callback::new(move |value: String| vm.edit(value));

    view! {
        <AuthLayout
            title="Verify your account"
            description=format!("Enter the {}-digit verification code we sent to your email", OTP_LENGTH)
        >
            <Form on_submit=on_submit error=vm.error>
                <FormField
                    id="otp"
                    label="Verification Code"
                    placeholder="12345678"
                    autocomplete="one-time-code"
                    inputmode="numeric"
                    maxlength=OTP_LENGTH
                    value=vm.code
                    error=vm.field_error()
                    on_input=on_code
                />
                <Button
                    button_type="submit"
                    class="w-full"
                    loading=pending
                    loading_text="Verifying..."
                    disabled=Signal::derive(move || !vm.can_submit())
                >
                    "Verify"
                </Button>
                <p class="text-center text-sm text-fg-muted">
                    "Didn't receive the code? "
                    // Resending is not wired to the API yet.
                    <LinkButton>"Resend"</LinkButton>
                </p>
                <p class="text-center">
                    <LinkButton variant=LinkVariant::Muted href=routes::LOGIN>
                        "Back to login"
                    </LinkButton>
                </p>
            </Form>
        </AuthLayout>
    }
}
