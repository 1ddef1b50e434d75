//! Common validation utilities for admin account fields.

use validator::ValidationError;

/// Username length bounds enforced at account creation.
const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;

/// Minimum password length for new accounts.
const PASSWORD_MIN: usize = 8;

/// Validates a username: 3-50 characters, ASCII alphanumerics plus `.`, `_`
/// and `-`, and must not start or end with a separator.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        let mut err = ValidationError::new("username_length");
        err.message = Some("Username must be 3-50 characters".into());
        return Err(err);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        let mut err = ValidationError::new("username_charset");
        err.message =
            Some("Username may only contain letters, digits, '.', '_' and '-'".into());
        return Err(err);
    }

    let first = username.chars().next().unwrap_or(' ');
    let last = username.chars().last().unwrap_or(' ');
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        let mut err = ValidationError::new("username_boundary");
        err.message = Some("Username must start and end with a letter or digit".into());
        return Err(err);
    }

    Ok(())
}

/// Validates password strength for new accounts: at least 8 characters with
/// one uppercase letter, one lowercase letter and one digit.
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN {
        let mut err = ValidationError::new("password_length");
        err.message = Some("Password must be at least 8 characters".into());
        return Err(err);
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_upper && has_lower && has_digit) {
        let mut err = ValidationError::new("password_strength");
        err.message = Some(
            "Password must contain an uppercase letter, a lowercase letter and a digit".into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username_accepts_common_forms() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("jane.doe").is_ok());
        assert!(validate_username("ops_team-2").is_ok());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_username_length_bounds() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_validate_username_rejects_bad_charset() {
        assert!(validate_username("jane doe").is_err());
        assert!(validate_username("jane@doe").is_err());
        assert!(validate_username("jánedoe").is_err());
    }

    #[test]
    fn test_validate_username_rejects_separator_boundaries() {
        assert!(validate_username(".jane").is_err());
        assert!(validate_username("jane-").is_err());
        assert!(validate_username("_jane_").is_err());
    }

    #[test]
    fn test_validate_new_password_strength() {
        assert!(validate_new_password("Passw0rd").is_ok());
        assert!(validate_new_password("Str0ng-and-long").is_ok());

        assert!(validate_new_password("short1A").is_err());
        assert!(validate_new_password("alllowercase1").is_err());
        assert!(validate_new_password("ALLUPPERCASE1").is_err());
        assert!(validate_new_password("NoDigitsHere").is_err());
    }
}
