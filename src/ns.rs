//! Well-known namespace UUIDs (RFC 4122 appendix C) for use with [`uuid3`](crate::uuid3) and
//! [`uuid5`](crate::uuid5).

use crate::Uuid;

/// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
pub const DNS: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
pub const URL: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for ISO object identifiers (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
pub const OID: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
pub const X500: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

#[cfg(test)]
mod tests {
    use super::{DNS, OID, URL, X500};
    use crate::{Variant, Version};

    /// Matches canonical string representations
    #[test]
    fn matches_canonical_string_representations() {
        let cases = [
            (DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];

        for (e, text) in cases {
            assert_eq!(e.to_string(), text);
            assert_eq!(e.version(), Version::TimeBased);
            assert_eq!(e.variant(), Variant::Rfc4122);
        }
    }
}
