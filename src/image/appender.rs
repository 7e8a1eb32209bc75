use crate::config::ImagePaths;
use crate::image::layout::FotaImage;
use crate::utils::crypto::Sha256Digest;
use crate::{FotaError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct AppendReport {
    pub binary_path: PathBuf,
    pub output_path: PathBuf,
    pub payload_len: usize,
    pub digest: Sha256Digest,
}

pub struct ImageAppender {
    paths: ImagePaths,
}

impl ImageAppender {
    pub fn new(target: impl AsRef<Path>) -> Self {
        Self {
            paths: ImagePaths::derive(target),
        }
    }

    /// Reads `<base>.bin`, and writes `<base>_fota_image.bin` containing the
    /// binary, zero padding and the SHA-256 of the binary.
    ///
    /// Only the target's existence is checked up front. A missing `.bin`
    /// surfaces as the IO error from opening it.
    pub fn append(&self) -> Result<AppendReport> {
        let ImagePaths {
            target,
            binary,
            output,
        } = &self.paths;

        if !target.exists() {
            error!("File {} does not exist", target.display());
            return Err(FotaError::NotFound(target.clone()));
        }

        info!("Using binary: {}", binary.display());

        remove_stale_output(output)?;

        let payload = fs::read(binary)?;
        let image = FotaImage::from_payload(payload);
        debug!("Read {} bytes from {}", image.payload().len(), binary.display());

        let file = File::create(output)?;
        image.write_to(BufWriter::with_capacity(image.encoded_len(), file))?;

        info!("Output path: {}", output.display());

        Ok(AppendReport {
            binary_path: binary.clone(),
            output_path: output.clone(),
            payload_len: image.payload().len(),
            digest: *image.digest(),
        })
    }
}

fn remove_stale_output(output: &Path) -> Result<()> {
    match fs::remove_file(output) {
        Ok(()) => {
            debug!("Removed previous output {}", output.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
