//! Consistent-hashing ring.
//!
//! Maps string keys to named nodes over a circular `0..2^32` hash space.
//! Each node is registered as a number of virtual replica points scattered
//! around the ring, and a key belongs to the node owning the nearest point
//! clockwise from the key's hash. Membership changes therefore remap only
//! the keys adjacent to the points that appeared or disappeared, instead of
//! rehashing everything.
//!
//! The hash function is pluggable (any [`RingHasher`], including plain
//! closures); the default is CRC-32/IEEE, compatible with groupcache-style
//! rings.
//!
//! ```
//! use crc_ring::HashRing;
//!
//! let mut ring = HashRing::new();
//! assert!(ring.is_empty());
//!
//! ring.add("node-a", 3);
//! ring.add("node-b", 3);
//!
//! let owner = ring.get("hello").expect("ring has nodes");
//! assert!(owner == "node-a" || owner == "node-b");
//! ```

mod error;
mod hash;
mod ring;

pub use {
    error::{RingError, RingResult},
    hash::{Crc32Hasher, RapidHasher, RingHasher},
    ring::HashRing,
};
