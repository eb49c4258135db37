pub mod cli;
pub mod loader;
pub mod report;
pub mod song;

pub use loader::{LoadError, load};
pub use report::{ReportOptions, WriteError, generate, generate_with};
pub use song::Song;
