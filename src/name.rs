//! Hash-then-stamp procedure shared by the name-based versions.

use md5::Digest;

use crate::{Uuid, Version};

/// Hashes the 16 bytes of `namespace` followed by `name`, takes the first 16 bytes of the digest,
/// and stamps the RFC 4122 variant and the given version onto them.
pub(crate) fn from_name_digest<D: Digest>(
    namespace: &Uuid,
    name: &[u8],
    version: Version,
) -> Uuid {
    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes[6] = (bytes[6] & 0x0f) | (version.number() << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from(bytes)
}
