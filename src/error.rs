//! Error type shared by parsing and address arithmetic.

/// Errors returned by fallible address and prefix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The literal does not match the IPv4/IPv6 grammar.
    #[error("Invalid address format: {0}")]
    Format(String),

    /// A prefix length or subnet/supernet bound is out of range.
    #[error("Value out of range: {0}")]
    Range(String),

    /// The netmask bit pattern is not `1^k 0^(n-k)`.
    #[error("Not a netmask: {0}")]
    NotANetmask(String),

    /// A mapped IPv4 address would need more host bits than IPv4 has.
    #[error("Incompatible address family: {0}")]
    IncompatibleFamily(String),
}
