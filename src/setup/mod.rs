pub mod init;
pub mod input;

pub use init::setup;
pub use input::read_stops;
