//! Fixed-width unsigned domains and the IP / port / socket aliases built on them.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An unsigned integer type usable as the value domain of an interval.
///
/// `[MIN, MAX]` is the universe against which sets over this domain are
/// complemented. Successor and predecessor are checked: they return `None`
/// at the domain boundaries instead of wrapping.
pub trait Domain: Copy + Ord + Hash + Debug + Display + Default + Into<u64> + 'static {
    /// Smallest value of the domain.
    const MIN: Self;

    /// Largest value of the domain.
    const MAX: Self;

    /// Returns `self + 1`, or `None` when `self == Self::MAX`.
    fn checked_succ(self) -> Option<Self>;

    /// Returns `self - 1`, or `None` when `self == Self::MIN`.
    fn checked_pred(self) -> Option<Self>;

    /// Widens the value without loss.
    #[inline]
    fn to_u64(self) -> u64 {
        self.into()
    }
}

macro_rules! impl_domain_for {
    ($t:ty) => {
        impl Domain for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn checked_succ(self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline]
            fn checked_pred(self) -> Option<Self> {
                self.checked_sub(1)
            }
        }
    };
}

impl_domain_for!(u8);
impl_domain_for!(u16);
impl_domain_for!(u32);
impl_domain_for!(u64);

/// A transport-layer port number.
pub type Port = u16;

/// An IPv4 address in host order.
pub type Ip = u32;

/// A combined `IP:port` value, `(ip << 16) | port`.
pub type Socket = u64;

pub const MAX_PORT: Port = Port::MAX;
pub const MAX_IP: Ip = Ip::MAX;

/// Upper bound of the socket universe used for complementation.
pub const MAX_SOCKET: Socket = Socket::MAX;

/// Largest socket value [`socket`] can produce (`2^48 - 1`).
pub const MAX_ENCODED_SOCKET: Socket = (1u64 << (Ip::BITS + Port::BITS)) - 1;

/// Packs an address and a port into a single socket value.
#[inline]
pub const fn socket(ip: Ip, port: Port) -> Socket {
    ((ip as Socket) << Port::BITS) | port as Socket
}

/// Splits a socket value back into its address and port.
///
/// Bits above [`MAX_ENCODED_SOCKET`] are discarded.
#[inline]
pub const fn split_socket(value: Socket) -> (Ip, Port) {
    ((value >> Port::BITS) as Ip, value as Port)
}
