#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod report;

pub use config::{DriverConfig, OverwritePolicy};
pub use driver::{FileInspection, FsDriver};
pub use error::DriverError;
pub use report::{FileFailure, FileReport, FolderReport};
