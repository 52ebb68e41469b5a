use crate::tessellation::TriangleMesh;

/// Tolerance on the length of a unit normal.
const UNIT_TOLERANCE: f64 = 1e-6;

/// Validates the structural consistency of a triangle mesh.
///
/// A mesh is valid when its vertex, normal and color arrays have equal length,
/// every triangle references three distinct existing vertices, and every
/// normal is finite with unit length.
pub struct IsValid<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mesh = self.mesh;
        let count = mesh.vertices.len();
        if mesh.normals.len() != count || mesh.colors.len() != count {
            return false;
        }

        let triangles_ok = mesh.indices.iter().all(|&[a, b, c]| {
            let in_range = [a, b, c].iter().all(|&idx| (idx as usize) < count);
            in_range && a != b && b != c && a != c
        });

        let normals_ok = mesh.normals.iter().all(|n| {
            n.iter().all(|c| c.is_finite()) && (n.norm() - 1.0).abs() < UNIT_TOLERANCE
        });

        triangles_ok && normals_ok
    }
}
