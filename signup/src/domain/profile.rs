//! Nested profile records where every level may be missing.

/// Country an address belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Country {
    /// Display name, when known.
    pub name: Option<String>,
}

impl Country {
    /// Country with a known name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Country, when recorded.
    pub country: Option<Country>,
    /// Street line, when recorded.
    pub street: Option<String>,
}

/// User profile holding an optional address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Home address, when recorded.
    pub address: Option<Address>,
}

impl Profile {
    /// Profile with the given address.
    #[must_use]
    pub const fn with_address(address: Address) -> Self {
        Self {
            address: Some(address),
        }
    }
}
