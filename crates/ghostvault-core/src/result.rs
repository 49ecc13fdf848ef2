use crate::error::GhostError;

pub type Result<T> = std::result::Result<T, GhostError>;
