use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::Profile;
use crate::math::{Point3, Vector3};

use super::vertex_normals::ring_normals;
use super::{Color, RevolutionParams, TriangleMesh};

/// Tessellates a profile revolved around the Y axis into a ring grid mesh.
///
/// Ring `i` of `M` sits at normalized height `t = i / M`, so the grid spans
/// `[-H/2, H/2)`: the bottom ring lies on `y = -H/2` and the top ring stops
/// one ring spacing short of `H/2`. The bottom is closed by a fan around an
/// extra center vertex; the top stays open.
///
/// Vertex layout is ring-major: vertex `(i, j)` has index `i * N + j`, and
/// the bottom center comes last at index `M * N`.
pub struct TessellateRevolution<'a> {
    profile: &'a Profile,
    params: RevolutionParams,
}

impl<'a> TessellateRevolution<'a> {
    /// Creates a new `TessellateRevolution` operation.
    #[must_use]
    pub fn new(profile: &'a Profile, params: RevolutionParams) -> Self {
        Self { profile, params }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// Produces `M * N + 1` vertices and `N + 2 * (M - 1) * N` triangles.
    /// All triangles wind counter-clockwise seen from outside the shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail [`RevolutionParams::validate`].
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn execute(&self) -> Result<TriangleMesh> {
        self.params.validate()?;

        let RevolutionParams {
            height,
            base_radius,
            major_resolution: m,
            minor_resolution: n,
        } = self.params;

        let vertex_count = m * n + 1;
        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(vertex_count);
        mesh.normals.reserve(vertex_count);
        mesh.colors.reserve(vertex_count);
        mesh.indices.reserve(n + 2 * (m - 1) * n);

        for i in 0..m {
            let t = i as f64 / m as f64;
            let radius = base_radius * self.profile.radius_at(t);
            let y = (t - 0.5) * height;
            for j in 0..n {
                let phi = TAU * j as f64 / n as f64;
                mesh.vertices
                    .push(Point3::new(radius * phi.cos(), y, radius * phi.sin()));
                mesh.colors.push(grid_color(i, j, m, n));
            }
        }

        let center = (m * n) as u32;
        mesh.vertices.push(Point3::new(0.0, -0.5 * height, 0.0));
        mesh.colors.push(Color::RED);

        // Bottom fan over ring 0
        for j in 0..n {
            let next_j = (j + 1) % n;
            mesh.indices.push([center, j as u32, next_j as u32]);
        }

        // Lateral quads; ring M-1 is not joined back to ring 0
        for i in 0..m - 1 {
            for j in 0..n {
                let next_j = (j + 1) % n;
                let i00 = (i * n + j) as u32;
                let i01 = (i * n + next_j) as u32;
                let i11 = ((i + 1) * n + next_j) as u32;
                let i10 = ((i + 1) * n + j) as u32;
                mesh.indices.push([i00, i11, i01]);
                mesh.indices.push([i00, i10, i11]);
            }
        }

        mesh.normals = ring_normals(&mesh.vertices[..m * n], m, n);
        mesh.normals.push(-Vector3::y());

        Ok(mesh)
    }
}

/// Builds the amphora mesh: the built-in amphora profile revolved with the
/// given height, base radius and ring grid resolution.
///
/// # Errors
///
/// Returns an error if `major_resolution < 2`, `minor_resolution < 3`, or the
/// height or base radius is not positive and finite.
pub fn build_mesh(
    height: f64,
    base_radius: f64,
    major_resolution: usize,
    minor_resolution: usize,
) -> Result<TriangleMesh> {
    let profile = Profile::amphora();
    let params = RevolutionParams {
        height,
        base_radius,
        major_resolution,
        minor_resolution,
    };
    TessellateRevolution::new(&profile, params).execute()
}

/// Debug color encoding the grid coordinates: red follows the ring, green
/// follows the slot within the ring.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn grid_color(i: usize, j: usize, m: usize, n: usize) -> Color {
    let r = 255.0 * (i as f64 + 0.001) / m as f64;
    let g = 255.0 * (j as f64 + 0.001) / n as f64;
    Color::new(r as u8, g as u8, 127)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::geometry::ProfilePoint;
    use approx::assert_abs_diff_eq;

    fn params(m: usize, n: usize) -> RevolutionParams {
        RevolutionParams {
            height: 240.0,
            base_radius: 100.0,
            major_resolution: m,
            minor_resolution: n,
        }
    }

    fn cylinder_profile() -> Profile {
        Profile::new(vec![ProfilePoint::new(0.0, 1.0), ProfilePoint::new(1.0, 1.0)]).unwrap()
    }

    #[test]
    fn default_amphora_counts() {
        let mesh = build_mesh(240.0, 100.0, 20, 20).unwrap();
        assert_eq!(mesh.vertex_count(), 401);
        assert_eq!(mesh.index_count(), 2340);
        assert_eq!(mesh.normals.len(), 401);
        assert_eq!(mesh.colors.len(), 401);
    }

    #[test]
    fn counts_follow_resolution() {
        for &(m, n) in &[(2, 3), (3, 4), (5, 7), (12, 3), (2, 40)] {
            let mesh = build_mesh(10.0, 2.0, m, n).unwrap();
            assert_eq!(mesh.vertex_count(), m * n + 1, "m={m}, n={n}");
            assert_eq!(mesh.index_count(), n * 3 + (m - 1) * n * 6, "m={m}, n={n}");
        }
    }

    #[test]
    fn indices_are_in_range() {
        let mesh = build_mesh(240.0, 100.0, 9, 11).unwrap();
        let count = mesh.vertex_count() as u32;
        assert!(mesh.flat_indices().all(|idx| idx < count));
        for tri in &mesh.indices {
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let mesh = build_mesh(240.0, 100.0, 20, 20).unwrap();
        for (k, n) in mesh.normals.iter().enumerate() {
            assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-9);
            assert!(n.iter().all(|c| c.is_finite()), "normal {k} is not finite");
        }
    }

    #[test]
    fn building_twice_is_identical() {
        let a = build_mesh(240.0, 100.0, 13, 17).unwrap();
        let b = build_mesh(240.0, 100.0, 13, 17).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ring_positions_follow_profile() {
        let profile = Profile::amphora();
        let mesh = TessellateRevolution::new(&profile, params(20, 20))
            .execute()
            .unwrap();

        // Ring 0 at t = 0: radius 0.5 * 100, on the bottom plane.
        assert_abs_diff_eq!(mesh.vertices[0], Point3::new(50.0, -120.0, 0.0), epsilon = 1e-9);
        // Quarter turn along ring 0.
        assert_abs_diff_eq!(mesh.vertices[5], Point3::new(0.0, -120.0, 50.0), epsilon = 1e-9);

        // Ring 10 at t = 0.5 is the belly: radius 0.8 * 100, at y = 0.
        let belly = mesh.vertices[10 * 20];
        assert_abs_diff_eq!(belly, Point3::new(80.0, 0.0, 0.0), epsilon = 1e-9);

        // Top ring stops one spacing short of H / 2.
        let top = mesh.vertices[19 * 20];
        assert_abs_diff_eq!(top.y, (19.0 / 20.0 - 0.5) * 240.0, epsilon = 1e-9);
        let top_radius = 100.0 * profile.radius_at(19.0 / 20.0);
        assert_abs_diff_eq!(top.x, top_radius, epsilon = 1e-9);
    }

    #[test]
    fn mesh_is_closed_except_top_ring() {
        for &(m, n) in &[(2, 3), (3, 4), (5, 7), (20, 20)] {
            let mesh = build_mesh(240.0, 100.0, m, n).unwrap();

            let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
            for &[a, b, c] in &mesh.indices {
                for edge in [(a, b), (b, c), (c, a)] {
                    *directed.entry(edge).or_insert(0) += 1;
                }
            }
            assert!(
                directed.values().all(|&uses| uses == 1),
                "m={m}, n={n}: a directed edge is used twice"
            );

            // Edges without a reversed twin form the open rim.
            let mut boundary: Vec<(u32, u32)> = directed
                .keys()
                .filter(|&&(a, b)| !directed.contains_key(&(b, a)))
                .copied()
                .collect();
            boundary.sort_unstable();

            let top = ((m - 1) * n) as u32;
            let n32 = n as u32;
            let mut expected: Vec<(u32, u32)> = (0..n32)
                .map(|j| (top + j, top + (j + 1) % n32))
                .collect();
            expected.sort_unstable();
            assert_eq!(boundary, expected, "m={m}, n={n}");
        }
    }

    #[test]
    fn bottom_center_vertex() {
        let mesh = build_mesh(240.0, 100.0, 6, 8).unwrap();
        let center = mesh.vertex_count() - 1;
        assert_abs_diff_eq!(mesh.vertices[center], Point3::new(0.0, -120.0, 0.0));
        assert_abs_diff_eq!(mesh.normals[center], -Vector3::y());
        assert_eq!(mesh.colors[center], Color::RED);
    }

    #[test]
    fn colors_encode_grid_coordinates() {
        let mesh = build_mesh(240.0, 100.0, 20, 20).unwrap();
        assert_eq!(mesh.colors[0], Color::new(0, 0, 127));
        assert_eq!(mesh.colors[20 + 10], Color::new(12, 127, 127));
        assert_eq!(mesh.colors[19 * 20 + 19], Color::new(242, 242, 127));
    }

    #[test]
    fn bottom_fan_faces_down() {
        let mesh = build_mesh(240.0, 100.0, 5, 9).unwrap();
        let center = (mesh.vertex_count() - 1) as u32;
        for tri in 0..9 {
            assert_eq!(mesh.indices[tri][0], center);
            let normal = mesh.face_normal(tri).unwrap();
            assert!(normal.y < 0.0, "fan triangle {tri} faces {normal:?}");
        }
    }

    #[test]
    fn lateral_triangles_face_outward() {
        let mesh = build_mesh(240.0, 100.0, 20, 20).unwrap();
        for tri in 20..mesh.triangle_count() {
            let [a, b, c] = mesh.indices[tri];
            let centroid = (mesh.vertices[a as usize].coords
                + mesh.vertices[b as usize].coords
                + mesh.vertices[c as usize].coords)
                / 3.0;
            let normal = mesh.face_normal(tri).unwrap();
            let radial = normal.x * centroid.x + normal.z * centroid.z;
            assert!(radial > 0.0, "lateral triangle {tri} faces inward");
        }
    }

    #[test]
    fn vertex_normals_point_away_from_axis() {
        let mesh = build_mesh(240.0, 100.0, 20, 20).unwrap();
        for (k, (v, n)) in mesh.vertices.iter().zip(&mesh.normals).take(400).enumerate() {
            assert!(n.x * v.x + n.z * v.z > 0.0, "vertex {k} normal points inward");
        }
    }

    #[test]
    fn cylinder_normals_are_radial() {
        let profile = cylinder_profile();
        let mesh = TessellateRevolution::new(&profile, params(4, 8))
            .execute()
            .unwrap();
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals).take(32) {
            let radial = Vector3::new(v.x, 0.0, v.z).normalize();
            assert_abs_diff_eq!(*n, radial, epsilon = 1e-9);
        }
    }

    #[test]
    fn invalid_resolution_fails() {
        assert!(build_mesh(240.0, 100.0, 1, 20).is_err());
        assert!(build_mesh(240.0, 100.0, 20, 2).is_err());
        assert!(build_mesh(0.0, 100.0, 20, 20).is_err());
        assert!(build_mesh(240.0, -1.0, 20, 20).is_err());
    }
}
