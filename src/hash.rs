use rapidhash::v3::rapidhash_v3;

/// Hash function used to place both replica points and keys on the ring.
///
/// The ring space is `0..2^32`, so the hasher maps arbitrary bytes to a
/// `u32` position. The function must be pure and stable for the lifetime of
/// the ring: positions computed at insertion time are never recomputed on
/// lookup, so a hasher that changes its output invalidates the ring.
///
/// Any `Fn(&[u8]) -> u32` qualifies, so plain functions and closures can be
/// plugged in directly.
pub trait RingHasher {
    /// Maps `bytes` to a position on the ring.
    fn hash(&self, bytes: &[u8]) -> u32;
}

impl<F> RingHasher for F
where
    F: Fn(&[u8]) -> u32,
{
    fn hash(&self, bytes: &[u8]) -> u32 {
        self(bytes)
    }
}

/// Default hasher for the ring.
///
/// CRC-32/IEEE, the checksum most memcached-style rings use. The output is
/// portable across platforms and releases.
#[derive(Debug, Default, Clone, Copy)]
pub struct Crc32Hasher;

impl RingHasher for Crc32Hasher {
    fn hash(&self, bytes: &[u8]) -> u32 {
        crc32fast::hash(bytes)
    }
}

/// Alternative hasher based on rapidhash V3, truncated to the ring space.
///
/// Rapidhash has better avalanche behavior than CRC-32, at the cost of ring
/// positions that are not comparable with CRC-32 based rings. For portability,
/// relies on the default seed and secrets.
#[derive(Debug, Default, Clone, Copy)]
pub struct RapidHasher;

impl RingHasher for RapidHasher {
    fn hash(&self, bytes: &[u8]) -> u32 {
        rapidhash_v3(bytes) as u32
    }
}
