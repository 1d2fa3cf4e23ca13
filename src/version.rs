//! Version and variant discriminators.

/// The variant field of a UUID, read from the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility. Covers the Nil UUID.
    Ncs,

    /// `10xx`: the layout described in RFC 4122. Every constructor of this crate except the raw
    /// byte and field ones produces this variant.
    Rfc4122,

    /// `110x`: reserved for Microsoft backward compatibility.
    Microsoft,

    /// `111x`: reserved for future definition. Covers the Max UUID.
    Future,
}

impl Variant {
    /// Classifies the byte at offset 8 of a UUID.
    pub const fn from_octet(octet: u8) -> Self {
        if octet & 0x80 == 0x00 {
            Self::Ncs
        } else if octet & 0xc0 == 0x80 {
            Self::Rfc4122
        } else if octet & 0xe0 == 0xc0 {
            Self::Microsoft
        } else {
            Self::Future
        }
    }
}

/// The version field of a UUID, i.e., the most significant four bits of byte 6.
///
/// The field is meaningful only for the [`Variant::Rfc4122`] variant, but it is extracted from any
/// 16-byte value. Numbers with no assigned meaning come back as [`Version::Unrecognized`] rather
/// than as an error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Version {
    /// `0`: unset, e.g., the Nil UUID.
    Nil,

    /// `1`: Gregorian time and node based.
    TimeBased,

    /// `2`: DCE Security. Recognized but never produced by this crate.
    DceSecurity,

    /// `3`: name based, hashed with MD5.
    Md5,

    /// `4`: random.
    Random,

    /// `5`: name based, hashed with SHA-1.
    Sha1,

    /// `6` to `15`: not assigned by RFC 4122.
    Unrecognized(u8),
}

impl Version {
    /// Creates a value from a version number. Only the least significant four bits are used.
    pub const fn from_number(number: u8) -> Self {
        match number & 0x0f {
            0 => Self::Nil,
            1 => Self::TimeBased,
            2 => Self::DceSecurity,
            3 => Self::Md5,
            4 => Self::Random,
            5 => Self::Sha1,
            n => Self::Unrecognized(n),
        }
    }

    /// Returns the four-bit version number.
    pub const fn number(self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::TimeBased => 1,
            Self::DceSecurity => 2,
            Self::Md5 => 3,
            Self::Random => 4,
            Self::Sha1 => 5,
            Self::Unrecognized(n) => n & 0x0f,
        }
    }
}
