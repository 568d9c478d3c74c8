use super::utils::login_failure;
use crate::{
    api::{ApiError, LoginCredentials},
    router::routes,
    state::auth,
    utils::{
        navigation::use_app_navigation,
        validation::{login_form_ready, validate_login, FieldErrors},
    },
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginCredentials, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Editing a field drops its own error and any server error.
    pub fn edit(&self, field: &'static str, value: String) {
        match field {
            "email" => self.form.email.set(value),
            "password" => self.form.password.set(value),
            _ => return,
        }
        self.field_errors.update(|errors| {
            errors.remove(field);
        });
        self.error.set(None);
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).cloned()))
    }

    pub fn can_submit(&self) -> bool {
        let email = self.form.email.get();
        let password = self.form.password.get();
        self.field_errors
            .with(|errors| login_form_ready(&email, &password, errors))
            && !self.login_action.pending().get()
    }

    /// Validates locally and dispatches only a well-formed form.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        self.error.set(None);
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(errors) = validate_login(&email, &password) {
            self.field_errors.set(errors);
            return false;
        }
        self.field_errors.set(FieldErrors::new());
        self.login_action
            .dispatch(LoginCredentials { email, password });
        true
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let field_errors = create_rw_signal(FieldErrors::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let navigation = use_app_navigation();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.password.set(String::new());
                    navigation.go(routes::OTP);
                }
                Err(err) => error.set(Some(login_failure(err))),
            }
        }
    });

    LoginViewModel {
        form,
        field_errors,
        error,
        login_action,
    }
}
