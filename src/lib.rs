pub mod config;
pub mod error;
pub mod image;
pub mod utils;

pub use error::{FotaError, Result};
