//! Triangle mesh storage and OBJ loading.
//!
//! A [`Mesh`] keeps positions, normals and texture coordinates in separate
//! pools; each [`Face`] indexes into them per corner. OBJ parsing is delegated
//! to `tobj`, which also triangulates polygons.

use std::io::BufReader;
use std::path::Path;

use crate::math::{Vec2, Vec3};

/// Errors produced while loading meshes and textures.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to load OBJ file {path}: {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    #[error("mesh {name} contains no triangles")]
    Empty { name: String },

    #[error("face {face} references {kind} index {index}, but only {len} exist")]
    IndexOutOfRange {
        face: usize,
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {path} has no pixels")]
    EmptyTexture { path: String },
}

/// One triangle: per-corner indices into the mesh's attribute pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub positions: [usize; 3],
    pub uvs: Option<[usize; 3]>,
    pub normals: Option<[usize; 3]>,
}

impl Face {
    pub fn new(positions: [usize; 3]) -> Self {
        Self {
            positions,
            uvs: None,
            normals: None,
        }
    }
}

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

// Counter-clockwise seen from outside the cube.
const CUBE_FACES: [[usize; 3]; 12] = [
    // -Z
    [0, 1, 2],
    [0, 2, 3],
    // +X
    [3, 2, 4],
    [3, 4, 5],
    // +Z
    [5, 4, 6],
    [5, 6, 7],
    // -X
    [7, 6, 1],
    [7, 1, 0],
    // +Y
    [1, 6, 4],
    [1, 4, 2],
    // -Y
    [5, 7, 0],
    [5, 0, 3],
];

#[derive(Clone, Debug)]
pub struct Mesh {
    name: String,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, checking that every face index points into its pool.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        faces: Vec<Face>,
    ) -> Result<Self, LoadError> {
        let name = name.into();
        if faces.is_empty() {
            return Err(LoadError::Empty { name });
        }

        for (face_index, face) in faces.iter().enumerate() {
            let pools = [
                ("position", Some(face.positions), positions.len()),
                ("texture coordinate", face.uvs, uvs.len()),
                ("normal", face.normals, normals.len()),
            ];
            for (kind, indices, len) in pools {
                if let Some(&index) = indices.iter().flatten().find(|&&i| i >= len) {
                    return Err(LoadError::IndexOutOfRange {
                        face: face_index,
                        kind,
                        index,
                        len,
                    });
                }
            }
        }

        Ok(Self {
            name,
            positions,
            normals,
            uvs,
            faces,
        })
    }

    /// The built-in 2x2x2 cube centered at the origin, without normals or uvs.
    pub fn cube() -> Self {
        Self {
            name: "cube".to_string(),
            positions: CUBE_VERTICES.to_vec(),
            normals: Vec::new(),
            uvs: Vec::new(),
            faces: CUBE_FACES.iter().copied().map(Face::new).collect(),
        }
    }

    /// Load every object of an OBJ file into a single mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) =
            tobj::load_obj(path, &load_options()).map_err(|source| LoadError::Obj {
                path: path.display().to_string(),
                source,
            })?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_models(name, models)
    }

    /// Parse OBJ source text. Material libraries are not resolved.
    pub fn from_obj_str(name: impl Into<String>, source: &str) -> Result<Self, LoadError> {
        let name = name.into();
        let mut reader = BufReader::new(source.as_bytes());
        let (models, _materials) =
            tobj::load_obj_buf(&mut reader, &load_options(), |_| {
                Err(tobj::LoadError::OpenFileFailed)
            })
            .map_err(|source| LoadError::Obj {
                path: name.clone(),
                source,
            })?;
        Self::from_models(name, models)
    }

    /// Merge `tobj` models, offsetting each model's indices into the shared pools.
    fn from_models(name: String, models: Vec<tobj::Model>) -> Result<Self, LoadError> {
        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut uvs = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let mesh = model.mesh;
            let position_base = positions.len();
            let normal_base = normals.len();
            let uv_base = uvs.len();

            positions.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            normals.extend(
                mesh.normals
                    .chunks_exact(3)
                    .map(|n| Vec3::new(n[0], n[1], n[2])),
            );
            uvs.extend(mesh.texcoords.chunks_exact(2).map(|t| Vec2::new(t[0], t[1])));

            let corners = |indices: &[u32], base: usize, triangle: usize| {
                let at = |corner: usize| base + indices[triangle * 3 + corner] as usize;
                [at(0), at(1), at(2)]
            };
            let triangles = mesh.indices.len() / 3;
            let has_uvs = mesh.texcoord_indices.len() == mesh.indices.len();
            let has_normals = mesh.normal_indices.len() == mesh.indices.len();

            for triangle in 0..triangles {
                faces.push(Face {
                    positions: corners(&mesh.indices, position_base, triangle),
                    uvs: has_uvs.then(|| corners(&mesh.texcoord_indices, uv_base, triangle)),
                    normals: has_normals
                        .then(|| corners(&mesh.normal_indices, normal_base, triangle)),
                });
            }
        }

        Self::new(name, positions, normals, uvs, faces)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Model-space position of a face corner.
    #[inline]
    pub fn position(&self, face: usize, corner: usize) -> Vec3 {
        self.positions[self.faces[face].positions[corner]]
    }

    /// The three corner positions of a face.
    pub fn triangle(&self, face: usize) -> [Vec3; 3] {
        [
            self.position(face, 0),
            self.position(face, 1),
            self.position(face, 2),
        ]
    }

    /// Unit geometric normal, `(p1 - p0) × (p2 - p0)`, of a face.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let [p0, p1, p2] = self.triangle(face);
        (p1 - p0).cross(p2 - p0).normalize()
    }

    /// Unit normal at a face corner; the face normal when the mesh has none.
    pub fn normal(&self, face: usize, corner: usize) -> Vec3 {
        match self.faces[face].normals {
            Some(indices) => self.normals[indices[corner]].normalize(),
            None => self.face_normal(face),
        }
    }

    /// Texture coordinate at a face corner; `(0, 0)` when the mesh has none.
    pub fn uv(&self, face: usize, corner: usize) -> Vec2 {
        match self.faces[face].uvs {
            Some(indices) => self.uvs[indices[corner]],
            None => Vec2::ZERO,
        }
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const QUAD_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    #[test]
    fn loads_and_triangulates_obj_source() {
        let mesh = Mesh::from_obj_str("quad", QUAD_OBJ).unwrap();
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.normal(0, 0), Vec3::new(0.0, 0.0, 1.0));
        // Every corner's uv matches its position in this quad.
        for face in 0..mesh.face_count() {
            for corner in 0..3 {
                let p = mesh.position(face, corner);
                let uv = mesh.uv(face, corner);
                assert_eq!((uv.x, uv.y), (p.x, p.y));
            }
        }
    }

    #[test]
    fn missing_attributes_fall_back() {
        let mesh = Mesh::from_obj_str("tri", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(mesh.uv(0, 2), Vec2::ZERO);
        assert_eq!(mesh.normal(0, 1), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn empty_source_fails_fast() {
        let err = Mesh::from_obj_str("empty", "# nothing here\n").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn missing_file_fails_fast() {
        let err = Mesh::from_obj("definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, LoadError::Obj { .. }));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = Mesh::new(
            "broken",
            vec![Vec3::ZERO; 3],
            Vec::new(),
            Vec::new(),
            vec![Face::new([0, 1, 3])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::IndexOutOfRange { face: 0, kind: "position", index: 3, len: 3 }
        ));
    }

    #[test]
    fn cube_faces_point_outward() {
        let cube = Mesh::cube();
        assert_eq!(cube.face_count(), 12);
        for face in 0..cube.face_count() {
            let [p0, p1, p2] = cube.triangle(face);
            let centroid = (p0 + p1 + p2) / 3.0;
            assert!(cube.face_normal(face).dot(centroid) > 0.0, "face {face} points inward");
            assert_relative_eq!(cube.face_normal(face).magnitude(), 1.0, epsilon = 1e-6);
        }
    }
}
