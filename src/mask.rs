//! Expansion of (address range × port range) rules into socket intervals.

use tracing::{debug, debug_span};

use crate::domain::{socket, Domain, Port, Socket};
use crate::error::RangeError;
use crate::set::{Interval, IntervalSet, IpRange, PortRange, SocketSet};

/// The Cartesian product of a list of address ranges and a list of port ranges.
///
/// Every `(ip, port)` pair with `ip` in some address range and `port` in some
/// port range belongs to the mask, encoded as the socket value
/// `(ip << 16) | port`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeMask {
    pub ip_ranges: Vec<IpRange>,
    pub port_ranges: Vec<PortRange>,
}

impl RangeMask {
    /// Creates a mask without validating the ranges.
    pub fn new(ip_ranges: Vec<IpRange>, port_ranges: Vec<PortRange>) -> Self {
        Self {
            ip_ranges,
            port_ranges,
        }
    }

    /// Creates a mask, rejecting any inverted address or port range.
    pub fn try_new(
        ip_ranges: Vec<IpRange>,
        port_ranges: Vec<PortRange>,
    ) -> Result<Self, RangeError> {
        check_bounds(&ip_ranges)?;
        check_bounds(&port_ranges)?;
        Ok(Self::new(ip_ranges, port_ranges))
    }

    /// Number of individual addresses across all address ranges.
    pub fn address_count(&self) -> u128 {
        self.ip_ranges.iter().map(Interval::len).sum()
    }

    /// Number of intervals [`RangeMask::expand`] emits.
    pub fn entry_count(&self) -> u128 {
        self.address_count() * self.port_ranges.len() as u128
    }

    /// Enumerates the mask address by address.
    ///
    /// For every address of every address range, and for every port range, one
    /// socket interval `[socket(ip, port.begin), socket(ip, port.end)]` is
    /// emitted, in address-then-port order. The output is neither sorted nor
    /// merged; the work is proportional to the number of addresses, not the
    /// number of ranges.
    pub fn expand(&self) -> Vec<Interval<Socket>> {
        let capacity = usize::try_from(self.entry_count()).unwrap_or(0);
        let mut intervals = Vec::with_capacity(capacity);

        for addr in &self.ip_ranges {
            for ip in addr.begin()..=addr.end() {
                for port_range in &self.port_ranges {
                    intervals.push(Interval::new(
                        socket(ip, port_range.begin()),
                        socket(ip, port_range.end()),
                    ));
                }
            }
        }

        intervals
    }

    /// Expands the mask into a canonical socket set.
    ///
    /// The set is always normalized, so it can be passed straight to any of
    /// the set operators.
    pub fn to_collapsed(&self) -> SocketSet {
        let _span = debug_span!(
            "to_collapsed",
            ip_ranges = self.ip_ranges.len(),
            port_ranges = self.port_ranges.len()
        )
        .entered();

        let raw = self.expand();
        let raw_len = raw.len();
        let collapsed = IntervalSet::from(raw);
        debug!(raw_len, collapsed_len = collapsed.len(), "collapsed range mask");
        collapsed
    }
}

fn check_bounds<T: Domain>(ranges: &[Interval<T>]) -> Result<(), RangeError> {
    for range in ranges {
        Interval::try_new(range.begin(), range.end())?;
    }
    Ok(())
}
