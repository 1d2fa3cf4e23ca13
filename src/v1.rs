//! UUIDv1-related functionality

use crate::{Uuid, Version};

/// Number of 100-nanosecond intervals between the Gregorian reform (1582-10-15T00:00:00Z) and
/// the Unix epoch (1970-01-01T00:00:00Z).
pub const GREGORIAN_UNIX_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Converts a Unix time into the 60-bit timestamp of UUIDv1, i.e., the number of 100-nanosecond
/// intervals since 1582-10-15T00:00:00Z.
///
/// Sub-100-nanosecond precision is truncated. This function only does arithmetic; reading the
/// clock is up to the caller.
pub const fn gregorian_timestamp(unix_secs: u64, subsec_nanos: u32) -> u64 {
    unix_secs * 10_000_000 + (subsec_nanos / 100) as u64 + GREGORIAN_UNIX_OFFSET
}

/// Creates a UUIDv1 object from a timestamp, a clock sequence, and a node ID.
///
/// `timestamp` counts 100-nanosecond intervals since 1582-10-15T00:00:00Z; only its least
/// significant 60 bits are used. The two most significant bits of `clock_seq` are replaced with the
/// variant, and only the least significant 48 bits of `node` are used.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{gregorian_timestamp, uuid1};
///
/// let uuid = uuid1(gregorian_timestamp(1497624119, 1234), 42, 0x0102_0304_0506);
/// assert_eq!(uuid.to_string(), "f3b4958c-52a1-11e7-802a-010203040506");
/// ```
pub const fn uuid1(timestamp: u64, clock_seq: u16, node: u64) -> Uuid {
    Uuid::from_time_fields(timestamp, Version::TimeBased, clock_seq, node)
}

/// Creates a UUIDv1 object from a timestamp, a clock sequence, and a six-byte MAC address.
///
/// The first byte of `mac_address` becomes the most significant byte of the node field, so this
/// function returns the same value as [`uuid1`] given the address as a big-endian integer.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid1, uuid1_with_mac};
///
/// let x = uuid1_with_mac(0, 0, &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);
/// assert_eq!(x, uuid1(0, 0, 0x0123_4567_89ab));
/// ```
pub const fn uuid1_with_mac(timestamp: u64, clock_seq: u16, mac_address: &[u8; 6]) -> Uuid {
    let [a, b, c, d, e, f] = *mac_address;
    uuid1(timestamp, clock_seq, u64::from_be_bytes([0, 0, a, b, c, d, e, f]))
}

#[cfg(test)]
mod tests {
    use super::{gregorian_timestamp, uuid1, uuid1_with_mac};
    use crate::{Variant, Version};

    /// Reproduces same value from integer and byte array nodes
    #[test]
    fn reproduces_same_value_from_integer_and_byte_array_nodes() {
        let id1 = uuid1(0, 0, 0x0123_4567_89ab);
        let id2 = uuid1_with_mac(0, 0, &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);
        assert_eq!(id1.version(), Version::TimeBased);
        assert_eq!(id2.version(), Version::TimeBased);
        assert_eq!(id1.variant(), Variant::Rfc4122);
        assert_eq!(id2.variant(), Variant::Rfc4122);
        assert_eq!(id1, id2);
        assert_eq!(id1.to_string(), "00000000-0000-1000-8000-0123456789ab");

        let mac = [0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54];
        assert_eq!(
            uuid1_with_mac(0x0fed_cba9_8765_4321, 0x1234, &mac),
            uuid1(0x0fed_cba9_8765_4321, 0x1234, 0xfedc_ba98_7654)
        );
    }

    /// Encodes prepared cases correctly
    #[test]
    fn encodes_prepared_cases_correctly() {
        let cases = [
            (
                (gregorian_timestamp(1497624119, 1234), 42, 0x0102_0304_0506),
                "f3b4958c-52a1-11e7-802a-010203040506",
            ),
            (
                (14976234442241191232, 42, 0x0102_0304_0506),
                "b2c1ad40-45e0-1fd6-802a-010203040506",
            ),
            (
                ((1 << 60) - 1, u16::MAX, u64::MAX),
                "ffffffff-ffff-1fff-bfff-ffffffffffff",
            ),
            ((0, 0, 0), "00000000-0000-1000-8000-000000000000"),
        ];

        for ((ts, clock_seq, node), text) in cases {
            let e = uuid1(ts, clock_seq, node);
            assert_eq!(e.to_string(), text);
            assert_eq!(e.version(), Version::TimeBased);
            assert_eq!(e.variant(), Variant::Rfc4122);
        }
    }

    /// Converts Unix epoch to Gregorian offset
    #[test]
    fn converts_unix_epoch_to_gregorian_offset() {
        assert_eq!(gregorian_timestamp(0, 0), 0x01b2_1dd2_1381_4000);
        assert_eq!(gregorian_timestamp(0, 99), 0x01b2_1dd2_1381_4000);
        assert_eq!(gregorian_timestamp(1, 100), 0x01b2_1dd2_1381_4000 + 10_000_001);
    }
}
