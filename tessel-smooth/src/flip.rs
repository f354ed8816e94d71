//! Edge flipping for angle maximization.

use nalgebra::{Point3, Vector3};
use tessel_geometry::{corner_cosine, corner_normal};
use tessel_rings::{RingEntry, VertexRings};
use tessel_types::SurfaceMesh;
use tracing::warn;

/// Dihedral guard: face normals must be within 30 degrees of co-planar
/// for a flip to cross the edge when ridge preservation is on.
const RIDGE_COSINE: f32 = 0.866;

/// Walk the outgoing edges of `v` and flip each one whose flipped
/// diagonal has a strictly larger minimum interior angle.
///
/// Degenerate rings (degree 3 or less) collapse `v` onto the centroid of
/// its neighbors instead. Flips are refused when the opposite endpoint
/// has degree 3 or less, or when the would-be diagonal already exists.
pub(crate) fn flip_vertex_edges(
    mesh: &mut SurfaceMesh,
    rings: &mut VertexRings,
    v: u32,
    preserve_ridges: bool,
) {
    let mut i = 0;
    loop {
        let degree = rings.degree(v);
        if degree <= 3 {
            if degree > 0 {
                let mut centroid = Vector3::zeros();
                for entry in rings.ring(v) {
                    centroid += mesh.position(entry.a).coords;
                }
                #[allow(clippy::cast_precision_loss)]
                let averaged = centroid / degree as f32;
                mesh.vertices[v as usize].position = Point3::from(averaged);
            }
            return;
        }
        if i >= degree {
            return;
        }

        let entry = rings.ring(v)[i];
        let (a, b) = (entry.a, entry.b);
        let succ = (i + 1) % degree;
        let c = rings.ring(v)[succ].b;

        let duplicate_edge = rings.ring(a).iter().any(|e| e.a == c)
            || rings.ring(c).iter().any(|e| e.a == a);

        if rings.degree(b) > 3
            && !duplicate_edge
            && should_flip(mesh, v, b, a, c, preserve_ridges)
            && commit_flip(mesh, rings, v, i, a, b, c)
        {
            if succ == 0 {
                // The successor wrapped to the ring head; the current
                // record was the tail, so the walk is complete.
                return;
            }
        }
        i += 1;
    }
}

/// Compare the "bad cosine" (largest corner cosine, i.e. smallest angle)
/// of the present triangle pair across diagonal `(v, b)` against the
/// flipped pair across `(a, c)`.
fn should_flip(
    mesh: &SurfaceMesh,
    v: u32,
    b: u32,
    a: u32,
    c: u32,
    preserve_ridges: bool,
) -> bool {
    let present = [
        corner_cosine(mesh, v, b, a),
        corner_cosine(mesh, v, b, c),
        corner_cosine(mesh, b, v, a),
        corner_cosine(mesh, b, v, c),
    ];
    let flipped = [
        corner_cosine(mesh, a, v, c),
        corner_cosine(mesh, a, b, c),
        corner_cosine(mesh, c, v, a),
        corner_cosine(mesh, c, b, a),
    ];

    let bad_present = present.into_iter().fold(f32::NEG_INFINITY, f32::max);
    let bad_flipped = flipped.into_iter().fold(f32::NEG_INFINITY, f32::max);

    if bad_present <= bad_flipped {
        return false;
    }

    if preserve_ridges {
        let n1 = corner_normal(mesh, v, a, b);
        let n2 = corner_normal(mesh, v, b, c);
        if n1.dot(&n2) <= RIDGE_COSINE {
            return false;
        }
    }
    true
}

/// Rewrite the two faces across `(v, b)` and splice all four rings.
///
/// Every ring record the rewrite touches is located first; if any search
/// fails the flip is abandoned with the mesh untouched. Returns whether
/// the flip was committed.
fn commit_flip(
    mesh: &mut SurfaceMesh,
    rings: &mut VertexRings,
    v: u32,
    i: usize,
    a: u32,
    b: u32,
    c: u32,
) -> bool {
    let degree = rings.degree(v);
    let succ = (i + 1) % degree;
    let f1 = rings.ring(v)[i].face;
    let f2 = rings.ring(v)[succ].face;

    // At b the shared edge reads (c, v, f2); at a the old corner of f1
    // reads (b, v, f1); at c the old corner of f2 reads (v, b, f2).
    let Some(jb) = rings.ring(b).iter().position(|e| e.b == v) else {
        warn!(vertex = v, neighbor = b, "flip: shared edge missing from neighbor ring");
        return false;
    };
    if rings.ring(b)[jb].a != c {
        warn!(vertex = v, neighbor = b, "flip: neighbor ring out of order");
        return false;
    }

    let wing = |e: &RingEntry| (e.a == v && e.b == b) || (e.a == b && e.b == v);
    let Some(ja) = rings.ring(a).iter().position(wing) else {
        warn!(vertex = v, wing = a, "flip: wing corner missing");
        return false;
    };
    if !(rings.ring(a)[ja].a == b && rings.ring(a)[ja].b == v) {
        warn!(vertex = v, wing = a, "flip: wing ring out of order");
        return false;
    }
    let Some(jc) = rings.ring(c).iter().position(wing) else {
        warn!(vertex = v, wing = c, "flip: wing corner missing");
        return false;
    };
    if !(rings.ring(c)[jc].a == v && rings.ring(c)[jc].b == b) {
        warn!(vertex = v, wing = c, "flip: wing ring out of order");
        return false;
    }

    // Commit. New faces: f1 = (v, a, c), f2 = (b, c, a).
    mesh.faces[f1 as usize].v = [v, a, c];
    mesh.faces[f2 as usize].v = [b, c, a];

    {
        let ring = rings.ring_mut(v);
        ring[i].b = c; // (a, c, f1)
        ring.remove(succ);
    }
    {
        let ring = rings.ring_mut(b);
        ring[jb].b = a;
        ring[jb].face = f2; // (c, a, f2)
        let next = (jb + 1) % ring.len();
        ring.remove(next);
    }
    {
        let ring = rings.ring_mut(a);
        ring[ja].b = c;
        ring[ja].face = f2; // (b, c, f2)
        ring.insert(ja + 1, RingEntry::new(c, v, f1));
    }
    {
        let ring = rings.ring_mut(c);
        ring[jc].b = a;
        ring[jc].face = f1; // (v, a, f1)
        ring.insert(jc + 1, RingEntry::new(a, b, f2));
    }

    true
}
