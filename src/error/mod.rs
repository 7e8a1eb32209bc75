use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FotaError>;

#[derive(Error, Debug)]
pub enum FotaError {
    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
