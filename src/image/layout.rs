use crate::utils::crypto::{self, Sha256Digest, DIGEST_LEN};
use std::io::{self, Write};

/// Padding plus digest, appended after every payload.
pub const TRAILER_LEN: usize = 256;
pub const PADDING_LEN: usize = TRAILER_LEN - DIGEST_LEN;

/// A firmware payload together with the SHA-256 digest the device checks.
///
/// Serialised as `payload | 224 x 0x00 | digest`. The digest covers the
/// payload only.
#[derive(Debug, Clone)]
pub struct FotaImage {
    payload: Vec<u8>,
    digest: Sha256Digest,
}

impl FotaImage {
    pub fn from_payload(payload: Vec<u8>) -> Self {
        let digest = crypto::sha256(&payload);
        Self { payload, digest }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn digest(&self) -> &Sha256Digest {
        &self.digest
    }

    /// Length of the serialised image.
    pub fn encoded_len(&self) -> usize {
        self.payload.len() + TRAILER_LEN
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.payload)?;
        writer.write_all(&[0u8; PADDING_LEN])?;
        writer.write_all(&self.digest)?;
        writer.flush()
    }
}
