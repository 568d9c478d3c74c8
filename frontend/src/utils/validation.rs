use std::collections::BTreeMap;

pub const OTP_LENGTH: usize = 8;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Field name to the first message that field failed with.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if email.is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address".into());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required".into());
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        );
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_otp(otp: &str) -> Result<(), FieldErrors> {
    let message = if otp.is_empty() {
        Some("OTP is required".to_string())
    } else if otp.chars().count() != OTP_LENGTH {
        Some(format!("OTP must be exactly {} characters", OTP_LENGTH))
    } else if !otp.chars().all(|c| c.is_ascii_digit()) {
        Some("OTP must contain only numbers".to_string())
    } else {
        None
    };
    match message {
        Some(message) => Err(FieldErrors::from([("otp", message)])),
        None => Ok(()),
    }
}

/// Keeps digits only, capped at the code length.
pub fn sanitize_otp_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LENGTH)
        .collect()
}

pub fn login_form_ready(email: &str, password: &str, errors: &FieldErrors) -> bool {
    !email.trim().is_empty() && !password.trim().is_empty() && errors.is_empty()
}

pub fn otp_form_ready(otp: &str, errors: &FieldErrors) -> bool {
    otp.len() == OTP_LENGTH && errors.is_empty()
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let valid_labels = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .map(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);
    valid_labels && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_accepts_well_formed_credentials() {
        assert!(validate_login("a@b.com", "secret1").is_ok());
    }

    #[test]
    fn login_reports_required_fields() {
        let errors = validate_login("", "").unwrap_err();
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn login_rejects_malformed_email_and_short_password() {
        let errors = validate_login("not-an-email", "12345").unwrap_err();
        assert_eq!(errors["email"], "Please enter a valid email address");
        assert_eq!(errors["password"], "Password must be at least 6 characters");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("m@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a@b.c"));
    }

    #[test]
    fn otp_rules_apply_in_order() {
        assert_eq!(validate_otp("").unwrap_err()["otp"], "OTP is required");
        assert_eq!(
            validate_otp("1234").unwrap_err()["otp"],
            "OTP must be exactly 8 characters"
        );
        assert_eq!(
            validate_otp("1234abcd").unwrap_err()["otp"],
            "OTP must contain only numbers"
        );
        assert!(validate_otp("12345678").is_ok());
    }

    #[test]
    fn otp_input_is_sanitized() {
        assert_eq!(sanitize_otp_input("12-34 56a78"), "12345678");
        assert_eq!(sanitize_otp_input("1234567890"), "12345678");
        assert_eq!(sanitize_otp_input("abc"), "");
    }

    #[test]
    fn submit_readiness() {
        let none = FieldErrors::new();
        assert!(login_form_ready("a@b.com", "secret1", &none));
        assert!(!login_form_ready(" ", "secret1", &none));
        let errors = FieldErrors::from([("email", "bad".to_string())]);
        assert!(!login_form_ready("a@b.com", "secret1", &errors));

        assert!(otp_form_ready("12345678", &none));
        assert!(!otp_form_ready("1234567", &none));
    }
}
