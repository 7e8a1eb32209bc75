use sha2::{Digest, Sha256};

pub const DIGEST_LEN: usize = 32;

pub type Sha256Digest = [u8; DIGEST_LEN];

pub fn sha256(data: &[u8]) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

pub fn to_hex(digest: &Sha256Digest) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
