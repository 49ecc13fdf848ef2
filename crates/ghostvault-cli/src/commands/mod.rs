pub mod hide;
pub mod reveal;
pub mod scan;

use std::io;

/// Resolves the password from the flag or an interactive hidden prompt.
pub(crate) fn resolve_password(
    password: Option<String>,
    prompt: bool,
) -> io::Result<Option<String>> {
    if password.is_some() {
        return Ok(password);
    }
    if prompt {
        let entered = dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        return Ok(Some(entered));
    }
    Ok(None)
}
