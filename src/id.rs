use std::{array, fmt, ops, slice, str};

use fstr::FStr;

use crate::{FromSliceError, ParseError, Variant, Version};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Represents a Universally Unique IDentifier.
///
/// The value is an opaque 16-byte big-endian array. Ordering compares the bytes as unsigned
/// integers from byte 0 to byte 15, so sorting a collection of UUIDs is equivalent to sorting
/// their canonical string representations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates an object from a byte slice of at most 16 bytes.
    ///
    /// A shorter slice fills the leading bytes and leaves the rest zero, just like the Nil UUID.
    /// A longer slice is rejected instead of being truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = Uuid::from_slice(&[0xf0, 0x01])?;
    /// assert_eq!(x.to_string(), "f0010000-0000-0000-0000-000000000000");
    /// assert!(Uuid::from_slice(&[0u8; 17]).is_err());
    /// # Ok::<(), uuid4122::FromSliceError>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, FromSliceError> {
        if src.len() > 16 {
            return Err(FromSliceError { len: src.len() });
        }
        let mut bytes = [0u8; 16];
        bytes[..src.len()].copy_from_slice(src);
        Ok(Self(bytes))
    }

    /// Creates an object from an iterator yielding at most 16 bytes.
    ///
    /// Follows the same rules as [`Uuid::from_slice`]. The iterator is not drained past the
    /// seventeenth item, so [`FromSliceError::len`] reports `17` for any overlong input.
    pub fn try_from_iter<I: IntoIterator<Item = u8>>(src: I) -> Result<Self, FromSliceError> {
        let mut bytes = [0u8; 16];
        let mut iter = src.into_iter();
        for (dst, e) in bytes.iter_mut().zip(&mut iter) {
            *dst = e;
        }
        match iter.next() {
            None => Ok(Self(bytes)),
            Some(_) => Err(FromSliceError { len: 17 }),
        }
    }

    /// Creates an object from the most and least significant 64 bits, each written in big-endian
    /// order.
    pub const fn from_u64_pair(msb: u64, lsb: u64) -> Self {
        Self((((msb as u128) << 64) | lsb as u128).to_be_bytes())
    }

    /// Returns the most and least significant 64 bits.
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        let n = u128::from_be_bytes(self.0);
        ((n >> 64) as u64, n as u64)
    }

    /// Creates an object from the field decomposition of RFC 4122 section 4.1.2.
    ///
    /// The two most significant bits of `clock_seq` are replaced with `10` to mark the RFC 4122
    /// variant. Only the least significant 48 bits of `node` are used. `time_hi_and_version` is
    /// written as is; see [`Uuid::from_time_fields`] to have the version merged in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = Uuid::from_fields(0x00010203, 0x0405, 0x0607, 0x0809, 0x0a0b0c0d0e0f);
    /// assert_eq!(x.to_string(), "00010203-0405-0607-8809-0a0b0c0d0e0f");
    /// ```
    pub const fn from_fields(
        time_low: u32,
        time_mid: u16,
        time_hi_and_version: u16,
        clock_seq: u16,
        node: u64,
    ) -> Self {
        let clock_seq = (clock_seq & 0x3fff) | 0x8000;

        Self([
            (time_low >> 24) as u8,
            (time_low >> 16) as u8,
            (time_low >> 8) as u8,
            time_low as u8,
            (time_mid >> 8) as u8,
            time_mid as u8,
            (time_hi_and_version >> 8) as u8,
            time_hi_and_version as u8,
            (clock_seq >> 8) as u8,
            clock_seq as u8,
            (node >> 40) as u8,
            (node >> 32) as u8,
            (node >> 24) as u8,
            (node >> 16) as u8,
            (node >> 8) as u8,
            node as u8,
        ])
    }

    /// Creates an object from a 60-bit timestamp, a version, a clock sequence, and a node.
    ///
    /// The timestamp is split into `time_low` (bits 0-31), `time_mid` (bits 32-47), and the low
    /// twelve bits of `time_hi_and_version` (bits 48-59); bits above 59 are dropped. The version
    /// number occupies the top four bits of `time_hi_and_version`.
    pub const fn from_time_fields(time: u64, version: Version, clock_seq: u16, node: u64) -> Self {
        Self::from_fields(
            time as u32,
            (time >> 32) as u16,
            ((time >> 48) & 0x0fff) as u16 | ((version.number() as u16) << 12),
            clock_seq,
            node,
        )
    }

    /// Returns `true` if all the 16 bytes are zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        Variant::from_octet(self.0[8])
    }

    /// Returns the version field value of the UUID.
    ///
    /// The field is read regardless of the variant, so a value not produced by this crate may
    /// report [`Version::Unrecognized`].
    pub const fn version(&self) -> Version {
        Version::from_number(self.0[6] >> 4)
    }

    /// Returns an iterator over the 16 bytes.
    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// [`FStr`], which can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in self.0.iter().enumerate() {
            for digit in hex_pair(*e) {
                if let Some(dst) = buf_iter.next() {
                    *dst = digit;
                }
            }
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if let Some(dst) = buf_iter.next() {
                    *dst = b'-';
                }
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte written is an ASCII hex digit or hyphen
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 32-digit hexadecimal string representation without hyphens.
    pub fn encode_hex(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (dst, e) in buffer.chunks_exact_mut(2).zip(self.0) {
            dst.copy_from_slice(&hex_pair(e));
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte written is an ASCII hex digit
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 8-4-4-4-12 representation enclosed in curly braces, as used for Microsoft
    /// GUIDs.
    pub fn encode_msguid(&self) -> FStr<38> {
        let mut buffer = [0u8; 38];
        buffer[0] = b'{';
        buffer[1..37].copy_from_slice(self.encode().as_bytes());
        buffer[37] = b'}';
        debug_assert!(buffer.is_ascii());
        // SAFETY: braces around an ASCII representation
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 8-4-4-4-12 representation prefixed by `urn:uuid:` (RFC 4122 section 3).
    pub fn encode_urn(&self) -> FStr<45> {
        let mut buffer = [0u8; 45];
        buffer[..9].copy_from_slice(b"urn:uuid:");
        buffer[9..].copy_from_slice(self.encode().as_bytes());
        debug_assert!(buffer.is_ascii());
        // SAFETY: ASCII prefix followed by an ASCII representation
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 32-digit hexadecimal string representation, e.g.,
    /// `"6ba7b8109dad11d180b400c04fd430c8"`.
    pub fn to_hex(&self) -> String {
        String::from(&*self.encode_hex())
    }

    /// Returns the brace-enclosed representation, e.g.,
    /// `"{6ba7b810-9dad-11d1-80b4-00c04fd430c8}"`.
    pub fn to_msguid(&self) -> String {
        String::from(&*self.encode_msguid())
    }

    /// Returns the URN representation, e.g., `"urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8"`.
    pub fn to_urn(&self) -> String {
        String::from(&*self.encode_urn())
    }
}

/// Returns the high and low nibbles of `e` as lowercase hex digits.
const fn hex_pair(e: u8) -> [u8; 2] {
    [DIGITS[(e >> 4) as usize], DIGITS[(e & 15) as usize]]
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from any of the 32-digit, 8-4-4-4-12, brace-enclosed, or `urn:uuid:`
    /// hexadecimal string representations. Hex digits are accepted in either case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let src = src.as_bytes();
        let body = match src.len() {
            32 | 36 => src,
            38 if src[0] == b'{' && src[37] == b'}' => &src[1..37],
            45 if src[..9].eq_ignore_ascii_case(b"urn:uuid:") => &src[9..],
            _ => return Err(ERR),
        };

        let hyphenated = body.len() == 36;
        let mut dst = [0u8; 16];
        let mut iter = body.iter();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().and_then(|c| hex_value(*c)).ok_or(ERR)?;
            let lo = iter.next().and_then(|c| hex_value(*c)).ok_or(ERR)?;
            *e = (hi << 4) | lo;
            if hyphenated && (i == 3 || i == 5 || i == 7 || i == 9) && iter.next() != Some(&b'-') {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

fn hex_value(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

impl ops::Index<usize> for Uuid {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Uuid {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Uuid {
    type Item = u8;
    type IntoIter = array::IntoIter<u8, 16>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = FromSliceError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl TryFrom<Vec<u8>> for Uuid {
    type Error = FromSliceError;

    fn try_from(src: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_slice(&src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        // exactly 16 bytes; the zero-padding rule of `from_slice` does not apply here
        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "b21f1f88-e52f-3026-8f6a-219d5b420288",
                    &[
                        178, 31, 31, 136, 229, 47, 48, 38, 143, 106, 33, 157, 91, 66, 2, 136,
                    ],
                ),
                (
                    "a1075986-c842-5f1a-80b2-142154f0fad6",
                    &[
                        161, 7, 89, 134, 200, 66, 95, 26, 128, 178, 20, 33, 84, 240, 250, 214,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Rejects short byte input on deserialization
        #[test]
        fn rejects_short_byte_input_on_deserialization() {
            assert_de_tokens_error::<serde_test::Compact<Uuid>>(
                &[Token::Bytes(&[1, 2, 3])],
                "could not convert slice to array",
            );
        }
    }
}
