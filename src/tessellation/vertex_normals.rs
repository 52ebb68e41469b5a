use crate::math::{Point3, Vector3, TOLERANCE};

/// Computes smooth normals for a ring-major `major × minor` vertex grid.
///
/// Each normal is `profile_tangent × ring_tangent`, normalized:
/// - the ring tangent is the central difference between the previous and
///   next slot on the same ring, wrapping around the circle;
/// - the profile tangent is the central difference between the rings below
///   and above, falling back to a one-sided difference on the first and last
///   ring since the grid does not wrap vertically.
///
/// For a profile revolved counter-clockwise around +Y this points away from
/// the axis. Where the tangents are collinear or vanish (a ring of zero
/// radius) the cross product carries no direction; such vertices inherit the
/// normal of the ring below, or point straight down on the first ring.
pub(super) fn ring_normals(vertices: &[Point3], major: usize, minor: usize) -> Vec<Vector3> {
    debug_assert_eq!(vertices.len(), major * minor);

    let at = |i: usize, j: usize| vertices[i * minor + j];
    let mut normals: Vec<Vector3> = Vec::with_capacity(major * minor);

    for i in 0..major {
        for j in 0..minor {
            let prev_j = (j + minor - 1) % minor;
            let next_j = (j + 1) % minor;
            let ring_tangent = at(i, next_j) - at(i, prev_j);

            let profile_tangent = if i == 0 {
                at(i + 1, j) - at(i, j)
            } else if i == major - 1 {
                at(i, j) - at(i - 1, j)
            } else {
                at(i + 1, j) - at(i - 1, j)
            };

            let normal = match profile_tangent
                .cross(&ring_tangent)
                .try_normalize(TOLERANCE)
            {
                Some(n) => n,
                None => {
                    tracing::debug!(
                        ring = i,
                        slot = j,
                        "degenerate tangent frame, using fallback normal"
                    );
                    if i == 0 {
                        -Vector3::y()
                    } else {
                        normals[(i - 1) * minor + j]
                    }
                }
            };
            normals.push(normal);
        }
    }

    normals
}
