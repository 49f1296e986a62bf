//! IPv4 subnet arithmetic primitives.
//!
//! All operations work on the 32-bit big-endian word an [`Ipv4Addr`]
//! converts to and from (octet 0 is the most significant byte).

use crate::error::{CalcError, CalcResult};
use std::net::{IpAddr, Ipv4Addr};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> CalcResult<u32> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefixLength)
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the subnet mask in dotted-decimal form.
pub fn mask_addr(len: u8) -> CalcResult<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Get the network address (host bits cleared) for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> CalcResult<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits))
}

/// Get the broadcast address (host bits set) for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> CalcResult<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Count the usable host addresses in a subnet.
///
/// The network and broadcast addresses are excluded, so /31 and /32
/// subnets hold no usable hosts.
pub fn num_hosts(len: u8) -> CalcResult<u64> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefixLength)
    } else if len >= MAX_LENGTH - 1 {
        Ok(0)
    } else {
        Ok((1u64 << (MAX_LENGTH - len)) - 2)
    }
}

/// Offset of an address within its subnet (0 for the network address).
pub fn host_offset(addr: Ipv4Addr, len: u8) -> CalcResult<u32> {
    let network = network_addr(addr, len)?;
    Ok(u32::from(addr) - u32::from(network))
}

/// Parse dotted-decimal IPv4 text, rejecting anything else.
///
/// Malformed text maps to [`CalcError::InvalidAddress`]; a well-formed
/// IPv6 literal maps to [`CalcError::UnsupportedAddressFamily`].
pub fn parse_ipv4(text: &str) -> CalcResult<Ipv4Addr> {
    match text.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => Ok(addr),
        Ok(IpAddr::V6(_)) => Err(CalcError::UnsupportedAddressFamily),
        Err(_) => Err(CalcError::InvalidAddress),
    }
}
