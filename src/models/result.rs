//! The computed subnet record.

use super::NetworkClass;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Address resolved for a requested host index.
///
/// An index past the subnet broadcast is a soft result, not an error: the
/// calculation still succeeds and the marker renders as "out of range".
/// This asymmetry with the hard validation errors is deliberate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetHost {
    Addr(Ipv4Addr),
    OutOfRange,
}

impl std::fmt::Display for TargetHost {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TargetHost::Addr(addr) => write!(f, "{addr}"),
            TargetHost::OutOfRange => write!(f, "out of range"),
        }
    }
}

impl Serialize for TargetHost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Everything derived from one (address, prefix length, host index) call.
///
/// Value type with no shared state; create, read, drop.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// The address as supplied by the caller.
    pub ip: Ipv4Addr,
    /// Prefix length in `/n` notation.
    pub cidr: String,
    /// Subnet mask in dotted-decimal form.
    pub mask: Ipv4Addr,
    /// Lowest address of the subnet (host bits all zero).
    pub network: Ipv4Addr,
    /// Highest address of the subnet (host bits all one).
    pub broadcast: Ipv4Addr,
    /// First usable host, absent when the subnet holds none.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, absent when the subnet holds none.
    pub last_host: Option<Ipv4Addr>,
    /// Usable host count (network and broadcast excluded).
    pub total_hosts: u64,
    /// Offset of the address within its subnet.
    pub host_number: u32,
    /// Legacy classful category, absent when classification is disabled.
    pub network_class: Option<NetworkClass>,
    /// 1-based index of this subnet within its classful major block.
    pub subnet_number: Option<u32>,
    /// Host index the caller asked for, echoed back.
    pub target_host_index: Option<i64>,
    /// Address at the requested host index.
    pub target_host: Option<TargetHost>,
}
