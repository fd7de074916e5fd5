use {
    crate::{
        error::{RingError, RingResult},
        hash::{Crc32Hasher, RingHasher},
    },
    rapidhash::fast::RapidBuildHasher,
    std::collections::HashMap,
    tracing::debug,
};

/// Consistent-hashing ring.
///
/// Nodes are placed on a circular `0..2^32` hash space as multiple virtual
/// replica points, and a key is owned by the node whose point is nearest
/// clockwise from the key's hash. Adding or removing a node remaps only the
/// keys that fall between its points and their ring predecessors, roughly a
/// `R / (N + R)` fraction for `R` new points on a ring of `N`.
///
/// The ring is a single-threaded structure: mutation takes `&mut self` and
/// callers sharing it across threads must provide their own synchronization.
pub struct HashRing<H: RingHasher = Crc32Hasher> {
    hasher: H,

    /// Replica point positions, sorted ascending.
    points: Vec<u32>,

    /// Point position to the name of the node that owns it.
    owners: HashMap<u32, String, RapidBuildHasher>,

    /// Replica count recorded per node, so that removal can recompute the
    /// exact point values the node claimed.
    replicas: HashMap<String, usize, RapidBuildHasher>,
}

impl HashRing<Crc32Hasher> {
    /// Creates an empty ring with the default CRC-32 hasher.
    pub fn new() -> Self {
        Self::with_hasher(Crc32Hasher)
    }
}

impl Default for HashRing<Crc32Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: RingHasher> HashRing<H> {
    /// Creates an empty ring with the given hasher.
    ///
    /// The hasher must stay stable for the ring's lifetime: points are hashed
    /// once at insertion and never recomputed on lookup.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            hasher,
            points: Vec::new(),
            owners: HashMap::default(),
            replicas: HashMap::default(),
        }
    }

    /// Returns `true` if no nodes have been added to the ring.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of replica points currently on the ring.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterator over the names of the nodes registered on the ring.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.replicas.keys().map(String::as_str)
    }

    /// Adds a node to the ring as `replicas` virtual points.
    ///
    /// Each point is placed at `hash("{i}{node}")` for replica index `i`, so
    /// the points of a single node scatter independently around the ring.
    /// A `replicas` of zero is a no-op. If two insertions collide on the
    /// exact same point value, the later insertion owns that point.
    ///
    /// Re-adding a node with a smaller replica count than before changes
    /// nothing; with a larger count it is recorded at the larger count, since
    /// replica indexes always start from zero.
    pub fn add(&mut self, node: &str, replicas: usize) {
        if replicas == 0 {
            return;
        }

        for i in 0..replicas {
            let point = self.point_for(node, i);
            self.points.push(point);
            self.owners.insert(point, node.to_string());
        }
        self.points.sort_unstable();

        let recorded = self.replicas.entry(node.to_string()).or_insert(0);
        *recorded = (*recorded).max(replicas);

        debug!(node, replicas, total_points = self.points.len(), "added node to ring");
    }

    /// Removes a node and all of its replica points from the ring.
    ///
    /// The node's point values are recomputed from its recorded replica
    /// count and deleted. Returns [`RingError::UnknownNode`] if the node was
    /// never added (or was already removed).
    pub fn remove(&mut self, node: &str) -> RingResult<()> {
        let replicas = self
            .replicas
            .remove(node)
            .ok_or_else(|| RingError::UnknownNode(node.to_string()))?;

        for i in 0..replicas {
            let point = self.point_for(node, i);
            // A collided point may have been claimed by a later insertion;
            // it then stays with its current owner.
            if self.owners.get(&point).is_some_and(|owner| owner == node) {
                self.owners.remove(&point);
            }
        }
        self.points.retain(|point| self.owners.contains_key(point));

        debug!(node, total_points = self.points.len(), "removed node from ring");
        Ok(())
    }

    /// Returns the node that owns the given key.
    ///
    /// The owner is the node whose point is the first at or clockwise from
    /// the key's hash; a key hashing past the highest point wraps around to
    /// the lowest one. Returns `None` on an empty ring, which callers must
    /// treat as "no owner" rather than an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        if self.is_empty() {
            return None;
        }

        let hash = self.hasher.hash(key.as_bytes());

        // Lower bound: first point >= hash, wrapping past the end.
        let idx = self.points.partition_point(|&point| point < hash);
        let idx = if idx == self.points.len() { 0 } else { idx };

        self.owners.get(&self.points[idx]).map(String::as_str)
    }

    /// Point position for the replica index of a node.
    ///
    /// The replica index is prepended in decimal, so rings built with the
    /// same hasher and membership place keys identically to groupcache-style
    /// rings.
    fn point_for(&self, node: &str, replica: usize) -> u32 {
        self.hasher.hash(format!("{replica}{node}").as_bytes())
    }
}
