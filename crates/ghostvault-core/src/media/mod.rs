pub mod lsb;
mod primitives;
mod types;

use std::path::Path;

pub use lsb::LsbCodec;
pub use primitives::*;
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
