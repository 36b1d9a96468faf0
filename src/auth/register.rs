use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Passwords don't match!")]
    PasswordMismatch,
    #[error("Please agree to the terms and conditions!")]
    TermsNotAccepted,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub subscribe_newsletter: bool,
}

impl RegisterForm {
    /// Checks run before anything is submitted. The password check wins
    /// when both fail.
    pub fn validate(&self) -> Result<(), RegisterError> {
        if self.password != self.confirm_password {
            return Err(RegisterError::PasswordMismatch);
        }
        if !self.agree_to_terms {
            return Err(RegisterError::TermsNotAccepted);
        }
        Ok(())
    }

    pub fn strength(&self) -> Strength {
        Strength::of(&self.password)
    }
}

static CHECKS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    ["[A-Z]", "[a-z]", "[0-9]", "[^A-Za-z0-9]"].map(|pattern| {
        Regex::new(pattern).unwrap_or_else(|err| panic!("invalid pattern {pattern}: {err}"))
    })
});

/// Password strength score in `0..=5`.
pub fn password_strength(password: &str) -> u8 {
    let long_enough = u8::from(password.chars().count() >= 8);
    let classes = CHECKS
        .iter()
        .filter(|check| check.is_match(password))
        .count() as u8;
    long_enough + classes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn of(password: &str) -> Self {
        match password_strength(password) {
            0..=1 => Self::Weak,
            2..=3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str, terms: bool) -> RegisterForm {
        RegisterForm {
            email: "ada@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            agree_to_terms: terms,
            ..RegisterForm::default()
        }
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        assert_eq!(
            form("abc123", "xyz987", true).validate(),
            Err(RegisterError::PasswordMismatch)
        );
    }

    #[test]
    fn mismatch_is_reported_before_terms() {
        assert_eq!(
            form("abc123", "xyz987", false).validate(),
            Err(RegisterError::PasswordMismatch)
        );
    }

    #[test]
    fn terms_must_be_accepted() {
        let err = form("abc123", "abc123", false).validate().unwrap_err();
        assert_eq!(err, RegisterError::TermsNotAccepted);
        assert_eq!(err.to_string(), "Please agree to the terms and conditions!");
    }

    #[test]
    fn valid_form_passes() {
        assert!(form("abc123", "abc123", true).validate().is_ok());
    }

    #[test]
    fn strength_scores() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 1);
        assert_eq!(password_strength("abc123"), 2);
        assert_eq!(password_strength("Abcdefg1"), 4);
        assert_eq!(password_strength("Abcdefg1!"), 5);
    }

    #[test]
    fn strength_labels() {
        assert_eq!(Strength::of("abc"), Strength::Weak);
        assert_eq!(Strength::of("abc123"), Strength::Medium);
        assert_eq!(Strength::of("Abcdefg1"), Strength::Strong);
    }
}
