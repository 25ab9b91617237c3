//! Intervals and canonical interval sets over unsigned domains.

mod interval;
mod interval_set;


pub use interval::Interval;
pub use interval_set::IntervalSet;

use crate::domain::{Ip, Port, Socket};

pub type PortRange = Interval<Port>;
pub type IpRange = Interval<Ip>;
pub type SocketRange = Interval<Socket>;

pub type PortSet = IntervalSet<Port>;
pub type IpSet = IntervalSet<Ip>;
pub type SocketSet = IntervalSet<Socket>;
