//! Thin command wrappers around the builder API, plus the best-effort
//! carrier scan.

use std::path::Path;

use crate::framing::recover_payload;
use crate::media::{LsbCodec, Media};
use crate::result::Result;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &str,
    password: Option<String>,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_media(media)
        .with_output(write_to_file)
        .with_message(message)
        .use_password(password)
        .execute()
}

pub fn reveal(secret_media: &Path, password: Option<String>) -> Result<String> {
    crate::api::reveal::prepare()
        .with_media(secret_media)
        .use_password(password)
        .execute()
}

/// What a [`scan`] found inside a carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Whether the recovered payload looks like an encrypted envelope rather
    /// than plain text. Content sniffing is inherently unreliable, treat this
    /// as a hint, not a verdict.
    pub looks_encrypted: bool,
}

/// Checks a carrier for a hidden payload without decoding it. `Ok(None)`
/// means no payload was found.
pub fn scan(secret_media: &Path) -> Result<Option<ScanReport>> {
    let media = Media::from_file(secret_media)?;
    let Some(payload) = recover_payload(LsbCodec::read(&media)) else {
        return Ok(None);
    };
    if payload.is_empty() {
        return Ok(None);
    }

    let looks_encrypted = payload
        .iter()
        .take(50)
        .any(|&b| b > 127 || (b < 32 && !matches!(b, b'\n' | b'\r' | b'\t')));

    Ok(Some(ScanReport { looks_encrypted }))
}
