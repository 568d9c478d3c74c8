use super::utils::otp_failure;
use crate::{
    api::ApiError,
    router::routes,
    state::auth,
    utils::{
        navigation::use_app_navigation,
        validation::{otp_form_ready, sanitize_otp_input, validate_otp, FieldErrors},
    },
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct OtpViewModel {
    pub code: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub verify_action: Action<String, Result<(), ApiError>>,
}

impl OtpViewModel {
    /// Typed input is reduced to digits before it is stored.
    pub fn edit(&self, raw: String) {
        self.code.set(sanitize_otp_input(&raw));
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);
    }

    pub fn field_error(&self) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get("otp").cloned()))
    }

    pub fn can_submit(&self) -> bool {
        let code = self.code.get();
        self.field_errors.with(|errors| otp_form_ready(&code, errors))
            && !self.verify_action.pending().get()
    }

    pub fn submit(&self) -> bool {
        if self.verify_action.pending().get_untracked() {
            return false;
        }
        self.error.set(None);
        let code = self.code.get_untracked();
        if let Err(errors) = validate_otp(&code) {
            self.field_errors.set(errors);
            return false;
        }
        self.field_errors.set(FieldErrors::new());
        self.verify_action.dispatch(code);
        true
    }
}

pub fn use_otp_view_model() -> OtpViewModel {
    let code = create_rw_signal(String::new());
    let field_errors = create_rw_signal(FieldErrors::new());
    let error = create_rw_signal(None::<ApiError>);
    let verify_action = auth::use_verify_otp_action();
    let navigation = use_app_navigation();

    create_effect(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    code.set(String::new());
                    navigation.go(routes::DASHBOARD);
                }
                Err(err) => error.set(Some(otp_failure(err))),
            }
        }
    });

    OtpViewModel {
        code,
        field_errors,
        error,
        verify_action,
    }
}
