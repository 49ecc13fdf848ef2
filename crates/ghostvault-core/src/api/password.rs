use std::fmt::{self, Debug, Formatter};

use zeroize::Zeroize;

/// An optional password that never shows up in `Debug` output and is wiped
/// from memory on drop, the same hygiene the crypto module applies to
/// derived keys.
#[derive(Default)]
pub struct Password(Option<String>);

impl Password {
    /// The password, if one was set.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        if let Some(password) = self.0.as_mut() {
            password.zeroize();
        }
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // fixed-width mask, the length would already leak information
        if self.is_set() {
            write!(f, "Password(<hidden>)")
        } else {
            write!(f, "Password(<none>)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}
