//! UUIDv3-related functionality

use md5::Md5;

use crate::{name::from_name_digest, Uuid, Version};

/// Generates a UUIDv3 object from a namespace and a name, hashed with MD5.
///
/// The result depends on nothing but the bytes of `namespace` and `name`, so any implementation
/// of RFC 4122 computes the same UUID from the same inputs. `name` is taken as raw bytes: a `&str`
/// or `String` contributes its UTF-8 encoding, and a C string should be passed as
/// [`CStr::to_bytes`](std::ffi::CStr::to_bytes) (without the terminating nul).
///
/// # Examples
///
/// ```rust
/// use uuid4122::{ns, uuid3};
///
/// let uuid = uuid3(ns::DNS, "0123456789ABCDEF");
/// assert_eq!(uuid.to_string(), "b21f1f88-e52f-3026-8f6a-219d5b420288");
/// assert_eq!(uuid, uuid3(ns::DNS, b"0123456789ABCDEF"));
///
/// let c_name = std::ffi::CString::new("0123456789ABCDEF").unwrap();
/// assert_eq!(uuid, uuid3(ns::DNS, c_name.as_bytes()));
/// ```
pub fn uuid3(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    from_name_digest::<Md5>(&namespace, name.as_ref(), Version::Md5)
}

/// Generates a UUIDv3 object from a namespace and a name given as a sequence of bytes.
///
/// Collects the bytes and then behaves exactly like [`uuid3`].
///
/// # Examples
///
/// ```rust
/// use uuid4122::{ns, uuid3, uuid3_from_iter};
///
/// let text = "0123456789ABCDEF";
/// assert_eq!(uuid3_from_iter(ns::DNS, text.bytes()), uuid3(ns::DNS, text));
/// ```
pub fn uuid3_from_iter(namespace: Uuid, name: impl IntoIterator<Item = u8>) -> Uuid {
    let name: Vec<u8> = name.into_iter().collect();
    uuid3(namespace, name)
}

#[cfg(test)]
mod tests {
    use super::{uuid3, uuid3_from_iter};
    use crate::{ns, Uuid, Variant, Version};

    const NAME: &str = "0123456789ABCDEF";

    /// Generates known vectors for each namespace
    #[test]
    fn generates_known_vectors_for_each_namespace() {
        let cases = [
            (ns::DNS, NAME, "b21f1f88-e52f-3026-8f6a-219d5b420288"),
            (ns::URL, NAME, "a1f5b2a5-8a32-3919-8cf2-2c10e49ea9d1"),
            (ns::OID, NAME, "c0d80567-feac-32c0-87f1-b22c420bea66"),
            (ns::X500, NAME, "e7d423b4-af73-3ee7-90f8-9ba99ea52630"),
            (ns::DNS, "python.org", "6fa459ea-ee8a-3ca4-894e-db77e160355e"),
            (ns::DNS, "", "c87ee674-4ddc-3efe-a74e-dfe25da5d7b3"),
        ];

        for (namespace, name, text) in cases {
            let e = uuid3(namespace, name);
            assert_eq!(e.to_string(), text);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Version::Md5);
        }
    }

    /// Returns same value regardless of name container
    #[test]
    fn returns_same_value_regardless_of_name_container() {
        let expected = uuid3(ns::DNS, NAME);
        let c_name = std::ffi::CString::new(NAME).unwrap();

        assert_eq!(uuid3(ns::DNS, NAME.as_bytes()), expected);
        assert_eq!(uuid3(ns::DNS, String::from(NAME)), expected);
        assert_eq!(uuid3(ns::DNS, NAME.as_bytes().to_vec()), expected);
        assert_eq!(uuid3(ns::DNS, c_name.as_bytes()), expected);
        assert_eq!(uuid3(ns::DNS, &NAME.as_bytes()[..]), expected);
        assert_eq!(uuid3_from_iter(ns::DNS, NAME.bytes()), expected);
        assert_eq!(
            uuid3_from_iter(ns::DNS, NAME.as_bytes().iter().copied()),
            expected
        );
    }

    /// Is deterministic and sensitive to namespace and name
    #[test]
    fn is_deterministic_and_sensitive_to_namespace_and_name() {
        assert_eq!(uuid3(ns::URL, NAME), uuid3(ns::URL, NAME));
        assert_ne!(uuid3(ns::URL, NAME), uuid3(ns::DNS, NAME));
        assert_ne!(uuid3(ns::URL, NAME), uuid3(ns::URL, "0123456789ABCDEf"));
        assert_ne!(uuid3(Uuid::NIL, NAME), uuid3(ns::DNS, NAME));
    }
}
