//! rangemask - set algebra over IP, port and IP:port intervals
//!
//! Inclusive intervals over fixed-width unsigned domains are collected into
//! canonical [`IntervalSet`]s supporting union, intersection, complement,
//! difference and symmetric difference. A [`RangeMask`] expands
//! (address range × port range) rules into socket intervals `(ip << 16) | port`.

pub mod domain;
pub mod error;
pub mod mask;
pub mod operations;
pub mod set;

pub use domain::{socket, split_socket, Domain, Ip, Port, Socket};
pub use error::RangeError;
pub use mask::RangeMask;
pub use set::{Interval, IntervalSet};
