use regex::Regex;

// Registration field rules. The patterns and messages are the contract the
// backend tests assert against, so they are reproduced exactly.

pub fn validate_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Name is required".to_string());
    }
    let pattern = Regex::new(r"^[a-zA-Z\s'-]{2,50}$").unwrap();
    if !pattern.is_match(value) {
        return Some(
            "Name must be 2-50 characters, letters, spaces, apostrophes, hyphens only"
                .to_string(),
        );
    }
    None
}

pub fn validate_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    let pattern = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    if !pattern.is_match(value) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Requires lowercase, uppercase, digit and one of `@$!%*?&`, minimum 8
/// characters out of that alphabet. The regex crate has no lookahead, so the
/// JS pattern `(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[@$!%*?&])` is expressed
/// as one class check per requirement.
pub fn validate_password(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Password is required".to_string());
    }
    let alphabet = Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$").unwrap();
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| "@$!%*?&".contains(c));
    if !alphabet.is_match(value) || !has_lower || !has_upper || !has_digit || !has_special {
        return Some(
            "Password must be 8+ characters with uppercase, lowercase, number, and special character"
                .to_string(),
        );
    }
    None
}

pub fn validate_confirm_password(value: &str, password: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Password confirmation is required".to_string());
    }
    if value != password {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// Per-field validation errors for the register form. Empty string = valid,
/// mirroring how the form renders them inline.
#[derive(Clone, PartialEq, Default)]
pub struct RegisterValidation {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterValidation {
    pub fn has_errors(&self) -> bool {
        !self.name.is_empty()
            || !self.email.is_empty()
            || !self.password.is_empty()
            || !self.confirm_password.is_empty()
    }

    /// Validates every field at once (submit path).
    pub fn validate_all(name: &str, email: &str, password: &str, confirm: &str) -> Self {
        Self {
            name: validate_name(name).unwrap_or_default(),
            email: validate_email(email).unwrap_or_default(),
            password: validate_password(password).unwrap_or_default(),
            confirm_password: validate_confirm_password(confirm, password).unwrap_or_default(),
        }
    }
}

/// Submit stays disabled while any error is pending, any field is empty, or
/// the terms checkbox is unchecked.
pub fn can_submit_registration(
    errors: &RegisterValidation,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    agreed: bool,
) -> bool {
    agreed
        && !errors.has_errors()
        && !name.is_empty()
        && !email.is_empty()
        && !password.is_empty()
        && !confirm.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_spaces_and_punctuation() {
        assert_eq!(validate_name("John Doe"), None);
        assert_eq!(validate_name("O'Brien-Smith"), None);
    }

    #[test]
    fn name_rejects_short_and_invalid() {
        assert_eq!(validate_name(""), Some("Name is required".to_string()));
        assert!(validate_name("J").is_some());
        assert!(validate_name("John99").is_some());
        assert!(validate_name(&"a".repeat(51)).is_some());
    }

    #[test]
    fn email_accepts_normal_addresses() {
        assert_eq!(validate_email("guest@wegavilla.com"), None);
        assert_eq!(validate_email("a.b+c@sub.example.co"), None);
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert_eq!(validate_email(""), Some("Email is required".to_string()));
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("user@domain").is_some());
        assert!(validate_email("user@domain.c").is_some());
    }

    #[test]
    fn password_accepts_all_four_classes() {
        assert_eq!(validate_password("Abcd123!"), None);
        assert_eq!(validate_password("Str0ng&Pass"), None);
    }

    #[test]
    fn password_rejects_missing_classes() {
        // no uppercase / special
        assert!(validate_password("abcd1234").is_some());
        // no digit
        assert!(validate_password("Abcdefg!").is_some());
        // no special
        assert!(validate_password("Abcd1234").is_some());
        // too short
        assert!(validate_password("Ab1!").is_some());
        // character outside the allowed alphabet
        assert!(validate_password("Abcd123! ").is_some());
    }

    #[test]
    fn confirm_must_match_exactly() {
        assert_eq!(validate_confirm_password("Abcd123!", "Abcd123!"), None);
        assert_eq!(
            validate_confirm_password("Abcd123?", "Abcd123!"),
            Some("Passwords do not match".to_string())
        );
        assert_eq!(
            validate_confirm_password("", "Abcd123!"),
            Some("Password confirmation is required".to_string())
        );
    }

    #[test]
    fn submit_gating() {
        let ok = RegisterValidation::validate_all("John Doe", "j@d.com", "Abcd123!", "Abcd123!");
        assert!(!ok.has_errors());
        assert!(can_submit_registration(
            &ok, "John Doe", "j@d.com", "Abcd123!", "Abcd123!", true
        ));
        // terms unchecked blocks submission
        assert!(!can_submit_registration(
            &ok, "John Doe", "j@d.com", "Abcd123!", "Abcd123!", false
        ));
        // mismatch blocks submission
        let bad = RegisterValidation::validate_all("John Doe", "j@d.com", "Abcd123!", "Abcd123?");
        assert_eq!(bad.confirm_password, "Passwords do not match");
        assert!(!can_submit_registration(
            &bad, "John Doe", "j@d.com", "Abcd123!", "Abcd123?", true
        ));
    }
}
