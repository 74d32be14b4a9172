use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_PARALLELISM: u32 = 1;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::from_params(Params::default())
    }
}

impl Argon2Hasher {
    fn from_params(params: Params) -> Self {
        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    /// Invalid combinations fall back to the argon2 crate defaults.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        match Params::new(memory_kib, iterations, parallelism, None) {
            Ok(params) => Self::from_params(params),
            Err(e) => {
                tracing::warn!(error = %e, "Invalid Argon2 parameters, using defaults");
                Self::default()
            }
        }
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`.
    pub fn from_env() -> Self {
        fn var(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        Self::with_params(
            var("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB),
            var("ARGON2_ITERATIONS", DEFAULT_ITERATIONS),
            var("ARGON2_PARALLELISM", DEFAULT_PARALLELISM),
        )
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        let mut hasher = Self::with_params(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, 1);
        hasher.salt_override = Some(SaltString::from_b64(salt).expect("Invalid salt"));
        hasher
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    /// Parameters are read back from the PHC string, so hashes made with
    /// older settings keep verifying after a configuration change.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
