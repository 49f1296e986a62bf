//! Domain models for subnet calculations.
//!
//! This module contains the core data structures and arithmetic primitives:
//! - [`NetworkClass`] - legacy classful address categories
//! - [`SubnetResult`] and [`TargetHost`] - the computed record
//! - mask, network, broadcast and host-count functions over [`std::net::Ipv4Addr`]

mod class;
mod ipv4;
mod result;

// Re-export public types
pub use class::NetworkClass;
pub use ipv4::{
    broadcast_addr, get_cidr_mask, host_offset, mask_addr, network_addr, num_hosts, parse_ipv4,
    MAX_LENGTH,
};
pub use result::{SubnetResult, TargetHost};
