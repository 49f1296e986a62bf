// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

//! IPv4 subnet arithmetic.
//!
//! From one `(address, prefix length, optional host index)` input this
//! crate derives the network and broadcast addresses, the usable host
//! range and count, the legacy classful category, the subnet index within
//! the classful block and, when asked, the address at a host offset.
//! The calculation is pure and stateless: same inputs, bit-identical
//! output, safe to call from any number of threads.

pub mod cli;
mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, CalcResult};
pub use models::{NetworkClass, SubnetResult, TargetHost};
pub use processing::{calculate, calculate_with, CalcOptions};
