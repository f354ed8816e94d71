//! Polygon retriangulation by recursive minimum-valence splitting.

use tessel_rings::{RingEntry, VertexRings};
use tessel_types::{Face, SurfaceMesh};
use tracing::warn;

/// One boundary vertex of the hole, with its current ring degree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PolygonNode {
    pub vertex: u32,
    pub degree: u32,
}

/// Pool of face slots freed by a vertex removal, handed out in order.
#[derive(Debug)]
pub(crate) struct SlotPool {
    slots: Vec<u32>,
    next: usize,
}

impl SlotPool {
    pub(crate) fn new(slots: Vec<u32>) -> Self {
        Self { slots, next: 0 }
    }

    fn take(&mut self) -> Option<u32> {
        let slot = self.slots.get(self.next).copied();
        if slot.is_some() {
            self.next += 1;
        }
        slot
    }

    /// Slots handed out so far.
    pub(crate) fn consumed(&self) -> usize {
        self.next
    }
}

/// Retriangulate the polygonal hole bounded by `cycle`, consuming face
/// slots from `pool` and stamping `marker` on every emitted face.
///
/// The base case emits one triangle and prepends the three matching ring
/// records to its corners (the caller restores CCW order afterwards).
/// Larger polygons split along a chord between the two lowest-degree
/// non-adjacent boundary vertices, so the retriangulation avoids piling
/// edges onto already-busy vertices.
pub(crate) fn subdivide_polygon(
    cycle: Vec<PolygonNode>,
    pool: &mut SlotPool,
    marker: i32,
    mesh: &mut SurfaceMesh,
    rings: &mut VertexRings,
) {
    let k = cycle.len();
    if k < 3 {
        warn!(nodes = k, "retriangulation requires at least 3 boundary vertices");
        return;
    }

    if k == 3 {
        let Some(slot) = pool.take() else {
            warn!("retriangulation ran out of face slots");
            return;
        };
        let (a, b, c) = (cycle[0].vertex, cycle[1].vertex, cycle[2].vertex);
        mesh.faces[slot as usize] = Face {
            v: [a, b, c],
            marker,
            selected: true,
        };
        rings.push_entry(a, RingEntry::new(b, c, slot));
        rings.push_entry(b, RingEntry::new(c, a, slot));
        rings.push_entry(c, RingEntry::new(a, b, slot));
        return;
    }

    // First chord endpoint: lowest degree anywhere on the cycle.
    let mut first = 0;
    for (j, node) in cycle.iter().enumerate().skip(1) {
        if node.degree < cycle[first].degree {
            first = j;
        }
    }

    // Second endpoint: lowest degree among vertices not adjacent to the
    // first on the cycle.
    let mut second: Option<usize> = None;
    for (j, node) in cycle.iter().enumerate() {
        if j == first || j == (first + 1) % k || (j + 1) % k == first {
            continue;
        }
        match second {
            Some(s) if cycle[s].degree <= node.degree => {}
            _ => second = Some(j),
        }
    }
    let Some(second) = second else {
        warn!(nodes = k, "no chord candidate found");
        return;
    };

    // Both endpoints gain an edge.
    let mut cycle = cycle;
    cycle[first].degree += 1;
    cycle[second].degree += 1;

    // Split along the chord into the two sub-cycles sharing it.
    let span = (second + k - first) % k;
    let near: Vec<PolygonNode> = (0..=span).map(|t| cycle[(first + t) % k]).collect();
    let mut far: Vec<PolygonNode> = vec![cycle[first], cycle[second]];
    far.extend(((span + 1)..k).map(|t| cycle[(first + t) % k]));

    subdivide_polygon(near, pool, marker, mesh, rings);
    subdivide_polygon(far, pool, marker, mesh, rings);
}
