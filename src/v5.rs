//! UUIDv5-related functionality

use sha1::Sha1;

use crate::{name::from_name_digest, Uuid, Version};

/// Generates a UUIDv5 object from a namespace and a name, hashed with SHA-1.
///
/// Same protocol as [`uuid3`](crate::uuid3) except for the hash function: the 20-byte SHA-1 digest
/// is truncated to its first 16 bytes before the version and variant are stamped.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{ns, uuid5};
///
/// let uuid = uuid5(ns::DNS, "0123456789ABCDEF");
/// assert_eq!(uuid.to_string(), "a1075986-c842-5f1a-80b2-142154f0fad6");
/// ```
pub fn uuid5(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    from_name_digest::<Sha1>(&namespace, name.as_ref(), Version::Sha1)
}

/// Generates a UUIDv5 object from a namespace and a name given as a sequence of bytes.
///
/// Collects the bytes and then behaves exactly like [`uuid5`].
pub fn uuid5_from_iter(namespace: Uuid, name: impl IntoIterator<Item = u8>) -> Uuid {
    let name: Vec<u8> = name.into_iter().collect();
    uuid5(namespace, name)
}
