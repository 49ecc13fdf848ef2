use std::path::{Path, PathBuf};

use rand::rngs::OsRng;

use crate::api::Password;
use crate::capacity::ensure_fits;
use crate::crypto;
use crate::error::GhostError;
use crate::framing::frame_bits;
use crate::media::{LsbCodec, Media, Persist};
use crate::result::Result;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl HideApi {
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password used to encrypt the message.
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password.
    /// `None` means no password, the message is embedded as plain UTF-8.
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// Loads the carrier, builds the payload, validates capacity, embeds and
    /// writes the output file. On any failure the output stays unwritten.
    pub fn execute(self) -> Result<()> {
        let Some(message) = self.message else {
            return Err(GhostError::MissingMessage);
        };
        let Some(media) = self.media else {
            return Err(GhostError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(GhostError::TargetNotSet);
        };

        let mut media = Media::from_file(&media)?;

        let payload = match self.password.as_deref() {
            Some(password) => crypto::encrypt(&message, password, &mut OsRng)?,
            None => message.into_bytes(),
        };

        ensure_fits(&media, payload.len())?;
        LsbCodec::embed(&mut media, frame_bits(&payload));

        media.save_as(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_a_message() {
        let result = prepare()
            .with_media("carrier.png")
            .with_output("out.png")
            .execute();
        assert!(matches!(result, Err(GhostError::MissingMessage)));
    }

    #[test]
    fn should_require_a_carrier() {
        let result = prepare()
            .with_message("psst")
            .with_output("out.png")
            .execute();
        assert!(matches!(result, Err(GhostError::CarrierNotSet)));
    }

    #[test]
    fn should_require_an_output() {
        let result = prepare()
            .with_message("psst")
            .with_media("carrier.png")
            .execute();
        assert!(matches!(result, Err(GhostError::TargetNotSet)));
    }
}
