//! Input checks that run before a request is built.
//!
//! A failed check is an [`Error::Validation`] carrying the text to show the
//! user. Nothing is sent to the backend.

use crate::error::Error;
use crate::models::{Credentials, NewWorkout, Registration};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

impl NewWorkout {
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("Workout name is required".into()));
        }
        if self.duration.trim().is_empty() {
            return Err(Error::Validation("Workout duration is required".into()));
        }
        Ok(())
    }
}

impl Credentials {
    pub fn validate(&self) -> Result<(), Error> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(Error::Validation(
                "Email and password are required".into(),
            ));
        }
        Ok(())
    }
}

impl Registration {
    /// Checks run in order; the first failure wins.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.email.contains('@') {
            return Err(Error::Validation(
                "Please enter a valid email address".into(),
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(
                "Password must be at least 8 characters long".into(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(Error::Validation("Passwords do not match".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), Error>) -> String {
        match result {
            Err(Error::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_workout_requires_name_and_duration() {
        assert!(NewWorkout::new("Run", "30").validate().is_ok());
        assert!(NewWorkout::new("Run", "thirty minutes").validate().is_ok());
        assert_eq!(
            message(NewWorkout::new("  ", "30").validate()),
            "Workout name is required"
        );
        assert_eq!(
            message(NewWorkout::new("Run", "").validate()),
            "Workout duration is required"
        );
    }

    #[test]
    fn test_credentials_require_both_fields() {
        assert!(Credentials::new("a@b.com", "secret12").validate().is_ok());
        assert!(Credentials::new("", "secret12").validate().is_err());
        assert!(Credentials::new("a@b.com", "").validate().is_err());
    }

    #[test]
    fn test_registration_rules_in_order() {
        assert!(Registration::new("a@b.com", "secret12", "secret12")
            .validate()
            .is_ok());

        // Bad email reported even when the password is also bad
        assert_eq!(
            message(Registration::new("ab.com", "short", "other").validate()),
            "Please enter a valid email address"
        );
        assert_eq!(
            message(Registration::new("a@b.com", "short", "short").validate()),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            message(Registration::new("a@b.com", "secret12", "secret13").validate()),
            "Passwords do not match"
        );
    }
}
