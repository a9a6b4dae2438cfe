//! Session and auth context.
//!
//! An explicit application-state object, not a singleton: construct it at
//! startup, pass it to the components that need the signed-in identity, and
//! drop it (or `logout`) on teardown. There is no real authentication
//! protocol behind it — `login` is a lookup against an in-memory account
//! directory, and every failure is an inline display string.

use tracing::{info, warn};

use carelink_core::error::{Error, Result};
use carelink_core::models::{Role, User};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A registration form, as submitted.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
    pub confirm_password: String,
}

/// Name/email changes to apply to the signed-in user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

struct AccountRecord {
    user: User,
    // Plain text: there is no credential storage in the portal, only a
    // lookup against the demo directory.
    password: String,
}

/// The portal's auth context.
///
/// Lifecycle: `init → login/register/update → logout`.
pub struct Session {
    accounts: Vec<AccountRecord>,
    current: Option<i64>,
    next_user_id: i64,
}

impl Session {
    /// An empty, signed-out session with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::with_accounts(std::iter::empty())
    }

    /// A signed-out session over the given account directory.
    pub fn with_accounts(accounts: impl IntoIterator<Item = (User, String)>) -> Self {
        let accounts: Vec<AccountRecord> = accounts
            .into_iter()
            .map(|(user, password)| AccountRecord { user, password })
            .collect();
        let next_user_id = accounts.iter().map(|a| a.user.id).max().unwrap_or(0) + 1;
        Self {
            accounts,
            current: None,
            next_user_id,
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current
            .and_then(|id| self.accounts.iter().find(|a| a.user.id == id))
            .map(|a| &a.user)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Sign in with email and password.
    ///
    /// Unknown email and wrong password both surface the same generic
    /// `InvalidCredentials` display string.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if password.is_empty() {
            return Err(Error::MissingField("password"));
        }

        let record = self
            .accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email));
        match record {
            Some(a) if a.password == password => {
                self.current = Some(a.user.id);
                info!(user_id = a.user.id, role = a.user.role.label(), "user signed in");
                Ok(a.user.clone())
            }
            _ => {
                warn!(email, "failed sign-in attempt");
                Err(Error::InvalidCredentials)
            }
        }
    }

    /// Create an account from the registration form and sign it in.
    pub fn register(&mut self, form: &RegisterForm) -> Result<User> {
        let name = form.name.trim();
        let email = form.email.trim();
        if name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if form.password.is_empty() {
            return Err(Error::MissingField("password"));
        }
        if form.password.len() < MIN_PASSWORD_LEN {
            return Err(Error::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if form.password != form.confirm_password {
            return Err(Error::PasswordMismatch);
        }
        if self
            .accounts
            .iter()
            .any(|a| a.user.email.eq_ignore_ascii_case(email))
        {
            return Err(Error::DuplicateEmail(email.to_string()));
        }

        let user = User {
            id: self.next_user_id,
            name: name.to_string(),
            email: email.to_string(),
            role: form.role,
            two_factor_enabled: false,
        };
        self.next_user_id += 1;
        self.current = Some(user.id);
        self.accounts.push(AccountRecord {
            user: user.clone(),
            password: form.password.clone(),
        });
        info!(user_id = user.id, role = user.role.label(), "account registered");
        Ok(user)
    }

    /// Merge name/email changes into the signed-in user.
    pub fn update_user(&mut self, patch: &UserPatch) -> Result<User> {
        let current_id = self.current.ok_or(Error::NotSignedIn)?;

        if let Some(email) = patch.email.as_deref() {
            let email = email.trim();
            if email.is_empty() {
                return Err(Error::MissingField("email"));
            }
            if self
                .accounts
                .iter()
                .any(|a| a.user.id != current_id && a.user.email.eq_ignore_ascii_case(email))
            {
                return Err(Error::DuplicateEmail(email.to_string()));
            }
        }
        if let Some(name) = patch.name.as_deref() {
            if name.trim().is_empty() {
                return Err(Error::MissingField("name"));
            }
        }

        let record = self
            .accounts
            .iter_mut()
            .find(|a| a.user.id == current_id)
            .ok_or(Error::NotSignedIn)?;
        if let Some(name) = patch.name.as_deref() {
            record.user.name = name.trim().to_string();
        }
        if let Some(email) = patch.email.as_deref() {
            record.user.email = email.trim().to_string();
        }
        Ok(record.user.clone())
    }

    /// Flip the simulated 2FA flag on the signed-in user; returns the new state.
    pub fn set_two_factor(&mut self, enabled: bool) -> Result<bool> {
        let current_id = self.current.ok_or(Error::NotSignedIn)?;
        let record = self
            .accounts
            .iter_mut()
            .find(|a| a.user.id == current_id)
            .ok_or(Error::NotSignedIn)?;
        record.user.two_factor_enabled = enabled;
        Ok(enabled)
    }

    /// Clear the signed-in user. Idempotent.
    pub fn logout(&mut self) {
        if let Some(id) = self.current.take() {
            info!(user_id = id, "user signed out");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
