//! bcrypt implementation of [`PasswordHasher`].

use async_trait::async_trait;
use tokio::task;
use zeroize::Zeroizing;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Hashes on the blocking pool with a fixed work factor.
///
/// # Examples
/// ```
/// use bloglist::outbound::security::BcryptPasswordHasher;
///
/// let hasher = BcryptPasswordHasher::new(4);
/// assert_eq!(hasher.cost(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Use `cost` as the bcrypt work factor for new hashes.
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured work factor.
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let cost = self.cost;
        let hashed = task::spawn_blocking(move || bcrypt::hash(password.as_bytes(), cost))
            .await
            .map_err(|err| PasswordHashError::failed(err.to_string()))?
            .map_err(|err| PasswordHashError::failed(err.to_string()))?;
        Ok(PasswordHash::new(hashed))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.as_ref().to_owned();
        let outcome = task::spawn_blocking(move || bcrypt::verify(password.as_bytes(), &hash))
            .await
            .map_err(|err| PasswordHashError::failed(err.to_string()))?;
        match outcome {
            Ok(matches) => Ok(matches),
            // A stored value that is not a usable bcrypt hash never matches.
            Err(bcrypt::BcryptError::InvalidHash(_) | bcrypt::BcryptError::CostNotAllowed(_)) => {
                Ok(false)
            }
            Err(err) => Err(PasswordHashError::failed(err.to_string())),
        }
    }
}
