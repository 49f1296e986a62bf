//! Legacy classful address classification.
//!
//! Classful addressing predates CIDR and is independent of the prefix
//! length. It is carried as an annotation next to the subnet math and can
//! be switched off via [`crate::processing::CalcOptions`].

use serde::Serialize;
use std::net::Ipv4Addr;

/// Historical address class, decided by the most-significant octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NetworkClass {
    A,
    B,
    C,
    D,
    E,
    Unknown,
}

impl NetworkClass {
    /// Classify an address by its first octet.
    ///
    /// Octets 0 and 127 match none of the historical ranges and stay
    /// [`NetworkClass::Unknown`].
    pub fn of(addr: Ipv4Addr) -> NetworkClass {
        match addr.octets()[0] {
            1..=126 => NetworkClass::A,
            128..=191 => NetworkClass::B,
            192..=223 => NetworkClass::C,
            224..=239 => NetworkClass::D,
            240..=255 => NetworkClass::E,
            _ => NetworkClass::Unknown,
        }
    }

    /// The implicit classful prefix length, for the classes that have one.
    pub fn major_prefix(&self) -> Option<u8> {
        match self {
            NetworkClass::A => Some(8),
            NetworkClass::B => Some(16),
            NetworkClass::C => Some(24),
            _ => None,
        }
    }
}

impl std::fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
            NetworkClass::D => "D (Multicast)",
            NetworkClass::E => "E (Reserved)",
            NetworkClass::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

impl Serialize for NetworkClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
