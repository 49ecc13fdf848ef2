use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhostError {
    /// Represents an unsupported carrier media, for example a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier audio media, for example a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an invalid carrier image media, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// The framed message does not fit into the carrier. Raised before any
    /// sample is mutated.
    #[error("Capacity error: the message needs {required} bits but the carrier only holds {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents an error when encrypting the message
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Authenticated decryption failed. Deliberately opaque: wrong password
    /// and corrupted data are indistinguishable.
    #[error("Decryption failed - incorrect password or corrupted data")]
    DecryptionFailed,

    /// No terminator was found and the decoded prefix is below the noise floor
    #[error("No hidden message found")]
    NoHiddenMessage,

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when creating an audio file.
    #[error("Audio creation error")]
    AudioCreationError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
