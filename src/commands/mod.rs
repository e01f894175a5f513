//! Command implementations

mod backup;
mod init;
mod status;

pub use backup::backup;
pub use init::init;
pub use status::status;
