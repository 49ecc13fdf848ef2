pub mod hide;
pub mod reveal;

mod password;

pub use password::Password;
