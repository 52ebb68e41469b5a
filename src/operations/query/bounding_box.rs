use crate::error::{Result, TessellationError};
use crate::math::Point3;
use crate::tessellation::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a mesh's vertices.
pub struct BoundingBox<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        let (first, rest) = self.mesh.vertices.split_first().ok_or_else(|| {
            TessellationError::InvalidParameters("mesh has no vertices".to_owned())
        })?;

        let aabb = rest.iter().fold(
            Aabb {
                min: *first,
                max: *first,
            },
            |acc, p| Aabb {
                min: acc.min.inf(p),
                max: acc.max.sup(p),
            },
        );
        Ok(aabb)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::build_mesh;
    use approx::assert_abs_diff_eq;

    #[test]
    fn amphora_extents() {
        let mesh = build_mesh(240.0, 100.0, 20, 20).unwrap();
        let aabb = BoundingBox::new(&mesh).execute().unwrap();

        // Bottom ring and bottom center sit on -H/2; the top ring is at t = 19/20.
        assert_abs_diff_eq!(aabb.min.y, -120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(aabb.max.y, 108.0, epsilon = 1e-9);

        // Widest ring is the belly at t = 0.5 with radius 0.8 * 100.
        assert_abs_diff_eq!(aabb.max.x, 80.0, epsilon = 1e-9);
        assert_abs_diff_eq!(aabb.min.x, -80.0, epsilon = 1e-9);
        assert!(aabb.max.z <= 80.0 + 1e-9);
    }

    #[test]
    fn center_of_symmetric_mesh_is_on_axis() {
        let mesh = build_mesh(240.0, 100.0, 20, 20).unwrap();
        let center = BoundingBox::new(&mesh).execute().unwrap().center();
        assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.y, -6.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_mesh_fails() {
        let mesh = TriangleMesh::default();
        assert!(BoundingBox::new(&mesh).execute().is_err());
    }
}
