//! Ring record storage and editing primitives.

use tracing::warn;

/// One record in a vertex's one-ring.
///
/// At vertex `v`, the record `(a, b, face)` states that `(v, a, b)` is a
/// counter-clockwise traversal of triangle `face`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingEntry {
    /// First neighbor vertex of the CCW corner.
    pub a: u32,
    /// Second neighbor vertex of the CCW corner.
    pub b: u32,
    /// Index of the face formed by `(v, a, b)`.
    pub face: u32,
}

impl RingEntry {
    /// Create a new ring record.
    #[inline]
    #[must_use]
    pub const fn new(a: u32, b: u32, face: u32) -> Self {
        Self { a, b, face }
    }
}

/// One-ring adjacency for every vertex of a mesh.
///
/// Built by [`build_rings`](crate::build_rings); mutated in place by the
/// edge-flipping and decimation passes, which keep the cyclic CCW
/// invariant intact through their splices.
#[derive(Debug, Clone, Default)]
pub struct VertexRings {
    rings: Vec<Vec<RingEntry>>,
}

impl VertexRings {
    /// Create rings for `vertex_count` vertices, all empty.
    #[must_use]
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            rings: vec![Vec::new(); vertex_count],
        }
    }

    /// Number of vertices covered.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rings.len()
    }

    /// The ring of vertex `v`.
    #[inline]
    #[must_use]
    pub fn ring(&self, v: u32) -> &[RingEntry] {
        &self.rings[v as usize]
    }

    /// Mutable access to the ring of vertex `v`.
    #[inline]
    pub fn ring_mut(&mut self, v: u32) -> &mut Vec<RingEntry> {
        &mut self.rings[v as usize]
    }

    /// Ring degree (number of incident faces) of vertex `v`.
    #[inline]
    #[must_use]
    pub fn degree(&self, v: u32) -> usize {
        self.rings[v as usize].len()
    }

    /// Move the ring of `v` out, leaving it empty.
    #[must_use]
    pub fn take_ring(&mut self, v: u32) -> Vec<RingEntry> {
        std::mem::take(&mut self.rings[v as usize])
    }

    /// Prepend a record to the ring of `v`.
    ///
    /// New records land at the front, matching insertion during
    /// construction; [`order_ring`](Self::order_ring) restores the cyclic
    /// CCW order afterwards.
    pub fn push_entry(&mut self, v: u32, entry: RingEntry) {
        self.rings[v as usize].insert(0, entry);
    }

    /// Total number of records across all rings.
    ///
    /// For a closed manifold this equals `3 * face_count`: every face
    /// appears exactly once in each of its three corners' rings.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    /// Re-order the ring of `v` so consecutive records share an edge,
    /// splicing each record's successor into place.
    ///
    /// Returns `true` when the ring closes into a cycle (every record's
    /// `b` is the next record's `a`, wrapping around), `false` otherwise.
    /// A single boundary record never wraps, so lone corners read as open.
    pub fn order_ring(&mut self, v: u32) -> bool {
        let ring = &mut self.rings[v as usize];
        if ring.len() > 1 {
            for i in 0..ring.len() - 1 {
                let (want, avoid) = (ring[i].b, ring[i].a);
                let found = ring[i + 1..]
                    .iter()
                    .position(|e| e.a == want && e.b != avoid)
                    .map(|offset| i + 1 + offset);
                if let Some(j) = found {
                    let entry = ring.remove(j);
                    ring.insert(i + 1, entry);
                }
            }
        }
        Self::is_ring_closed(ring)
    }

    /// Check the cyclic successor invariant without reordering.
    #[must_use]
    pub fn is_closed(&self, v: u32) -> bool {
        Self::is_ring_closed(&self.rings[v as usize])
    }

    fn is_ring_closed(ring: &[RingEntry]) -> bool {
        let Some(last) = ring.last() else {
            return true;
        };
        for window in ring.windows(2) {
            if window[0].b != window[1].a {
                return false;
            }
        }
        last.b == ring[0].a
    }

    /// Compact rings in step with a vertex compaction: keep rings of
    /// surviving vertices, in order, dropping the rest.
    ///
    /// `vertex_map[old] = Some(new)` for survivors, `None` for removed
    /// vertices; survivors must map to a dense prefix in ascending order.
    pub fn compact(&mut self, vertex_map: &[Option<u32>]) {
        let mut write = 0;
        for (read, mapped) in vertex_map.iter().enumerate() {
            if mapped.is_some() {
                self.rings.swap(write, read);
                write += 1;
            }
        }
        self.rings.truncate(write);
    }

    /// Rewrite every record's vertex and face indices through remap
    /// tables produced by a compaction pass.
    ///
    /// Records pointing at removed vertices or faces should no longer
    /// exist at this point; any stragglers are reported and left with
    /// their stale index.
    pub fn remap(&mut self, vertex_map: &[Option<u32>], face_map: &[Option<u32>]) {
        for (v, ring) in self.rings.iter_mut().enumerate() {
            for entry in ring.iter_mut() {
                match (
                    vertex_map[entry.a as usize],
                    vertex_map[entry.b as usize],
                    face_map[entry.face as usize],
                ) {
                    (Some(a), Some(b), Some(face)) => {
                        entry.a = a;
                        entry.b = b;
                        entry.face = face;
                    }
                    _ => {
                        warn!(vertex = v, ?entry, "ring record survived compaction of its target");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(a: u32, b: u32, face: u32) -> RingEntry {
        RingEntry::new(a, b, face)
    }

    #[test]
    fn order_ring_closes_shuffled_triangle_fan() {
        let mut rings = VertexRings::with_vertex_count(1);
        // Fan around vertex 0 with rim 1-2-3, inserted out of order.
        rings.ring_mut(0).extend([
            entry(2, 3, 1),
            entry(3, 1, 2),
            entry(1, 2, 0),
        ]);
        assert!(rings.order_ring(0));
        let ring = rings.ring(0);
        for i in 0..3 {
            assert_eq!(ring[i].b, ring[(i + 1) % 3].a);
        }
    }

    #[test]
    fn order_ring_detects_open_ring() {
        let mut rings = VertexRings::with_vertex_count(1);
        // Two fan corners that do not connect: 1->2 and 3->4.
        rings.ring_mut(0).extend([entry(1, 2, 0), entry(3, 4, 1)]);
        assert!(!rings.order_ring(0));
    }

    #[test]
    fn take_ring_leaves_empty() {
        let mut rings = VertexRings::with_vertex_count(2);
        rings.ring_mut(1).push(entry(0, 2, 0));
        let taken = rings.take_ring(1);
        assert_eq!(taken.len(), 1);
        assert!(rings.ring(1).is_empty());
    }

    #[test]
    fn compact_drops_removed_rings() {
        let mut rings = VertexRings::with_vertex_count(3);
        rings.ring_mut(0).push(entry(1, 2, 0));
        rings.ring_mut(2).push(entry(0, 1, 1));
        let vertex_map = vec![Some(0), None, Some(1)];
        rings.compact(&vertex_map);
        assert_eq!(rings.vertex_count(), 2);
        assert_eq!(rings.ring(1)[0].face, 1);
    }

    #[test]
    fn remap_rewrites_indices() {
        let mut rings = VertexRings::with_vertex_count(2);
        rings.ring_mut(0).push(entry(3, 5, 4));
        rings.ring_mut(1).push(entry(5, 3, 2));
        let mut vertex_map = vec![None; 6];
        vertex_map[3] = Some(0);
        vertex_map[5] = Some(1);
        let mut face_map = vec![None; 5];
        face_map[4] = Some(0);
        face_map[2] = Some(1);
        rings.remap(&vertex_map, &face_map);
        assert_eq!(rings.ring(0)[0], entry(0, 1, 0));
        assert_eq!(rings.ring(1)[0], entry(1, 0, 1));
    }
}
