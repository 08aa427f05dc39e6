//! MD5 content checksums for migration files.
//!
//! The hex digest is persisted in the ledger's `md5_sum` column, so the
//! algorithm is part of the on-disk format: deployed databases already
//! hold MD5 digests and a different hash would flag every applied
//! migration as tampered with.

use md5::{Digest, Md5};

/// Compute the lowercase hex MD5 digest of the exact file bytes.
pub fn content_checksum(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            content_checksum(b"CREATE TABLE t(x);"),
            "6195bfaba2a0ebbeba1f6191fa861827"
        );
    }

    #[test]
    fn deterministic_for_identical_bytes() {
        let a = content_checksum(b"SELECT 1;");
        let b = content_checksum(b"SELECT 1;");
        assert_eq!(a, b);
    }

    #[test]
    fn single_byte_change_changes_digest() {
        assert_ne!(content_checksum(b"SELECT 1;"), content_checksum(b"SELECT 2;"));
    }

    #[test]
    fn empty_input_digest() {
        assert_eq!(
            content_checksum(b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn digest_is_32_lowercase_hex_chars() {
        let digest = content_checksum(b"anything");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
