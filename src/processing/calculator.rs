//! Input validation and the subnet calculation itself.

use crate::error::{CalcError, CalcResult};
use crate::models::{
    broadcast_addr, get_cidr_mask, host_offset, mask_addr, network_addr, num_hosts, parse_ipv4,
    NetworkClass, SubnetResult, TargetHost, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Calculation switches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CalcOptions {
    /// Attach the legacy classful annotation (class and subnet number).
    pub classify: bool,
}

impl Default for CalcOptions {
    fn default() -> Self {
        CalcOptions { classify: true }
    }
}

/// Calculate every derived field for `ip_text` under `prefix`.
///
/// Validation fails fast, in order: address syntax, address family, prefix
/// range, host-index sign. A host index past the subnet broadcast is not a
/// failure; it yields [`TargetHost::OutOfRange`] inside a normal result.
pub fn calculate(ip_text: &str, prefix: i32, host_index: Option<i64>) -> CalcResult<SubnetResult> {
    calculate_with(ip_text, prefix, host_index, &CalcOptions::default())
}

/// [`calculate`] with explicit [`CalcOptions`].
pub fn calculate_with(
    ip_text: &str,
    prefix: i32,
    host_index: Option<i64>,
    opts: &CalcOptions,
) -> CalcResult<SubnetResult> {
    let ip = parse_ipv4(ip_text)?;
    if prefix < 0 || prefix > i32::from(MAX_LENGTH) {
        return Err(CalcError::InvalidPrefixLength);
    }
    let prefix = prefix as u8;
    if host_index.is_some_and(|index| index < 0) {
        return Err(CalcError::InvalidHostIndex);
    }
    log::debug!("calculate({ip}/{prefix}, host_index={host_index:?})");

    let network = network_addr(ip, prefix)?;
    let broadcast = broadcast_addr(ip, prefix)?;
    let total_hosts = num_hosts(prefix)?;

    let (first_host, last_host) = if total_hosts > 0 {
        (
            Some(Ipv4Addr::from(u32::from(network) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
        )
    } else {
        (None, None)
    };

    let network_class = if opts.classify {
        Some(NetworkClass::of(ip))
    } else {
        None
    };
    let subnet_number = match network_class.and_then(|class| class.major_prefix()) {
        Some(major) if prefix > major => Some(subnet_index(ip, major, prefix)?),
        _ => None,
    };

    Ok(SubnetResult {
        ip,
        cidr: format!("/{prefix}"),
        mask: mask_addr(prefix)?,
        network,
        broadcast,
        first_host,
        last_host,
        total_hosts,
        host_number: host_offset(ip, prefix)?,
        network_class,
        subnet_number,
        target_host_index: host_index,
        target_host: host_index.map(|index| resolve_target(network, broadcast, index)),
    })
}

/// 1-based index of the subnet within its classful major block: the value
/// of the address bits between the major prefix and `prefix`, plus one.
fn subnet_index(addr: Ipv4Addr, major: u8, prefix: u8) -> CalcResult<u32> {
    let major_mask = get_cidr_mask(major)?;
    let subnet_bits = (u32::from(addr) & !major_mask) >> (MAX_LENGTH - prefix);
    Ok(subnet_bits + 1)
}

/// Resolve the address `index` hosts above the network address.
fn resolve_target(network: Ipv4Addr, broadcast: Ipv4Addr, index: i64) -> TargetHost {
    // index is validated non-negative before this point
    let target = u64::from(u32::from(network)) + index as u64;
    if target <= u64::from(u32::from(broadcast)) {
        TargetHost::Addr(Ipv4Addr::from(target as u32))
    } else {
        TargetHost::OutOfRange
    }
}
