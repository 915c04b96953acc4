//! Data models for pacman-overwrite
//!
//! Plain data passed between the pacman layer and the driver.

mod capture;
mod outcome;
mod scan;

pub use capture::CapturedOutput;
pub use outcome::Outcome;
pub use scan::ScanStream;
