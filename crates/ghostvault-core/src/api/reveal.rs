use std::path::{Path, PathBuf};

use crate::api::Password;
use crate::crypto;
use crate::error::GhostError;
use crate::framing::{decode_text, recover_payload};
use crate::media::{LsbCodec, Media};
use crate::result::Result;

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    media: Option<PathBuf>,
    password: Password,
}

impl RevealApi {
    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    /// Set the password used to decrypt the message.
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password.
    /// `None` means the recovered payload is treated as plain UTF-8 text.
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// Reads the carrier LSBs, recovers the framed payload and decodes (or
    /// decrypts) it back into the message text.
    pub fn execute(self) -> Result<String> {
        let Some(media) = self.media else {
            return Err(GhostError::CarrierNotSet);
        };

        let media = Media::from_file(&media)?;
        let payload =
            recover_payload(LsbCodec::read(&media)).ok_or(GhostError::NoHiddenMessage)?;

        let message = match self.password.as_deref() {
            Some(password) => crypto::decrypt(&payload, password)?,
            None => decode_text(&payload),
        };

        if message.is_empty() {
            return Err(GhostError::NoHiddenMessage);
        }
        Ok(message)
    }
}
