use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();

        if length < MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort(MIN_LENGTH));
        }

        if length > MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong(MAX_LENGTH));
        }

        Ok(())
    }
}
