use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

/// Labelled input with its own inline error.
#[component]
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] inputmode: Option<&'static str>,
    #[prop(optional)] maxlength: Option<usize>,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let error_id = format!("{}-error", id);
    let described_by = error_id.clone();
    view! {
        <div class="space-y-1">
            <label for=id.clone() class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id.clone()
                name=id
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                inputmode=inputmode
                maxlength=maxlength.map(|n| n.to_string())
                aria-invalid=move || error.with(Option::is_some).to_string()
                aria-describedby=move || error.with(Option::is_some).then(|| described_by.clone())
                class=move || {
                    format!(
                        "appearance-none block w-full px-3 py-2 rounded-md border bg-form-control-bg text-fg placeholder-text-muted focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm {}",
                        if error.with(Option::is_some) {
                            "border-status-error-border"
                        } else {
                            "border-form-control-border"
                        }
                    )
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <p id=error_id.clone() class="text-xs text-status-error-text">{msg}</p>
                        }
                    })
            }}
        </div>
    }
}

/// Wraps fields with a submit handler and one consolidated API error.
#[component]
pub fn Form(
    on_submit: Callback<()>,
    #[prop(optional, into)] error: MaybeSignal<Option<ApiError>>,
    children: Children,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    view! {
        <form class="space-y-5" novalidate=true on:submit=handle_submit>
            {children()}
            <InlineErrorMessage error=error />
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_field_renders_label_value_and_error() {
        let html = render_to_string(move || {
            let value = create_rw_signal("a@b".to_string());
            let error = create_rw_signal(Some("Please enter a valid email address".to_string()));
            view! {
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    value=value
                    error=error
                    on_input=Callback::new(move |v| value.set(v))
                />
            }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Please enter a valid email address"));
        assert!(html.contains("email-error"));
    }

    #[test]
    fn form_field_without_error_has_no_message() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::new());
            view! {
                <FormField
                    id="otp"
                    label="OTP"
                    value=value
                    maxlength=8
                    on_input=Callback::new(move |v| value.set(v))
                />
            }
        });
        assert!(html.contains("maxlength=\"8\""));
        assert!(!html.contains("otp-error"));
    }

    #[test]
    fn form_field_accepts_a_static_error() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::new());
            view! {
                <FormField
                    id="password"
                    label="Password"
                    value=value
                    error=Some("Password is required".to_string())
                    on_input=Callback::new(move |v| value.set(v))
                />
            }
        });
        assert!(html.contains("Password is required"));
        assert!(html.contains("aria-invalid=\"true\""));
    }

    #[test]
    fn form_accepts_a_static_error() {
        let html = render_to_string(move || {
            view! {
                <Form on_submit=Callback::new(|_| ()) error=Some(ApiError::validation("Check the form"))>
                    <div>"field-slot"</div>
                </Form>
            }
        });
        assert!(html.contains("Check the form"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn form_renders_children_and_api_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::network()));
            view! {
                <Form on_submit=Callback::new(|_| ()) error=error>
                    <div>"field-slot"</div>
                </Form>
            }
        });
        assert!(html.contains("field-slot"));
        assert!(html.contains("Network error. Please check your connection."));
    }
}
