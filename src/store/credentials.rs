use dashmap::{mapref::entry::Entry, DashMap};
use log::{debug, info};

use crate::auth::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::{Identity, User};

const EMPTY_FIELDS: &str = "Username or Password empty";
const USERNAME_TAKEN: &str = "Username already exist";
const BAD_CREDENTIALS: &str = "Wrong User or Password!";

/// Registered accounts keyed by username.
pub struct CredentialStore {
    users: DashMap<String, User>,
    bcrypt_cost: u32,
}

impl CredentialStore {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            users: DashMap::new(),
            bcrypt_cost,
        }
    }

    /// Creates an account.
    ///
    /// The password is hashed before the map entry is taken, so the shard lock is
    /// held only for the existence check and the insert, which happen together.
    pub fn register(&self, username: &str, secret: &str) -> Result<Identity, AppError> {
        if username.is_empty() || secret.is_empty() {
            return Err(AppError::InvalidInput(EMPTY_FIELDS.into()));
        }
        // Cheap early exit so an obvious duplicate does not pay for a bcrypt round.
        if self.users.contains_key(username) {
            return Err(AppError::Conflict(USERNAME_TAKEN.into()));
        }

        let secret_hash = hash_password(secret, self.bcrypt_cost)?;

        match self.users.entry(username.to_owned()) {
            Entry::Occupied(_) => {
                debug!("lost registration race for {}", username);
                Err(AppError::Conflict(USERNAME_TAKEN.into()))
            }
            Entry::Vacant(slot) => {
                slot.insert(User::new(username, secret_hash));
                info!("registered user {}", username);
                Ok(Identity::new(username))
            }
        }
    }

    /// Verifies a username/password pair.
    ///
    /// Unknown users and wrong passwords produce the same error.
    pub fn authenticate(&self, username: &str, secret: &str) -> Result<Identity, AppError> {
        if username.is_empty() || secret.is_empty() {
            return Err(AppError::InvalidInput(EMPTY_FIELDS.into()));
        }

        // Clone the hash out so the shard is not locked while bcrypt runs.
        let secret_hash = self
            .users
            .get(username)
            .map(|user| user.secret_hash.clone())
            .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.into()))?;

        if verify_password(secret, &secret_hash)? {
            Ok(Identity::new(username))
        } else {
            debug!("password mismatch for {}", username);
            Err(AppError::Unauthorized(BAD_CREDENTIALS.into()))
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
