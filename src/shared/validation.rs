use email_address::EmailAddress;

/// Trims the value and turns blank input into `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if EmailAddress::is_valid(email) {
        Ok(())
    } else {
        Err(format!("Invalid email address: {email}"))
    }
}
