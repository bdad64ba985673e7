//! # Terrain Builder
//!
//! Converts a height field into a grid mesh with UVs and per-vertex
//! tangents, following the layout contract of the surrounding pipeline:
//! vertex `(x, y)` maps to `(x·sx/(w−1), sample·sy, y·sz/(h−1))`.

use config::constants::{
    DEFAULT_MATERIAL_COLOR, DEFAULT_TERRAIN_SIZE, MAX_HEIGHTFIELD_DIM, MIN_HEIGHTFIELD_DIM,
};
use glam::{DVec2, DVec3, DVec4};
use meshforge_mesh::{GeometryError, Mesh};
use serde::{Deserialize, Serialize};

use crate::field::HeightField;

/// Parameters for terrain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Physical extents of the generated patch: x and z span the grid,
    /// y scales the raw samples.
    pub size: DVec3,
}

impl Default for TerrainParams {
    fn default() -> Self {
        let [x, y, z] = DEFAULT_TERRAIN_SIZE;
        Self {
            size: DVec3::new(x, y, z),
        }
    }
}

/// Render material attached to a terrain patch.
///
/// Rendering itself is the host's concern; the builder only guarantees a
/// material exists so the renderer never receives an unstyled patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// RGBA base color
    pub color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: DEFAULT_MATERIAL_COLOR,
        }
    }
}

/// Builds a grid mesh from a height field.
///
/// Dimensions above the supported maximum are clamped; dimensions below
/// 2 produce an empty mesh (a defined boundary case, not an error).
///
/// The mesh is assembled in a fixed order: vertices, UVs, and triangles
/// first, then normals recomputed from the triangle geometry, then
/// tangents. Tangents come from neighboring samples (edge-clamped reads
/// at the borders), so they stay independent of the recomputed normals.
///
/// # Example
///
/// ```rust
/// use meshforge_terrain::{build_terrain, HeightField, TerrainParams};
///
/// let field = HeightField::from_fn(16, 16, |x, y| ((x + y) % 2) as f64);
/// let mesh = build_terrain(&field, &TerrainParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 256);
/// assert_eq!(mesh.triangle_count(), 15 * 15 * 2);
/// ```
pub fn build_terrain(field: &HeightField, params: &TerrainParams) -> Result<Mesh, GeometryError> {
    let width = field.width().min(MAX_HEIGHTFIELD_DIM);
    let height = field.height().min(MAX_HEIGHTFIELD_DIM);
    if width != field.width() || height != field.height() {
        log::warn!(
            "height field {}x{} exceeds {MAX_HEIGHTFIELD_DIM}, clamping to {width}x{height}",
            field.width(),
            field.height()
        );
    }

    let mut mesh = Mesh::new();
    if width < MIN_HEIGHTFIELD_DIM || height < MIN_HEIGHTFIELD_DIM {
        return Ok(mesh);
    }

    let uv_scale = DVec2::new(1.0 / (width - 1) as f64, 1.0 / (height - 1) as f64);
    let size_scale = DVec3::new(
        params.size.x / (width - 1) as f64,
        params.size.y,
        params.size.z / (height - 1) as f64,
    );

    let mut vertices = Vec::with_capacity(width * height);
    let mut uvs = Vec::with_capacity(width * height);
    let mut tangents = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let (xi, yi) = (x as isize, y as isize);
            let pixel = field.sample(xi, yi);
            let vertex = DVec3::new(x as f64, pixel, y as f64);
            vertices.push(size_scale * vertex);
            uvs.push(DVec2::new(x as f64, y as f64) * uv_scale);

            // Tangent: from the left neighbor sample to the right one,
            // edge-clamped at the borders.
            let left = DVec3::new((xi - 1) as f64, field.sample(xi - 1, yi), y as f64);
            let right = DVec3::new((xi + 1) as f64, field.sample(xi + 1, yi), y as f64);
            let tangent = (size_scale * (right - left)).normalize_or_zero();
            tangents.push(DVec4::new(tangent.x, tangent.y, tangent.z, -1.0));
        }
    }

    let mut triangles = Vec::with_capacity((height - 1) * (width - 1) * 2);
    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let i = (y * width + x) as u32;
            let w = width as u32;
            triangles.push([i, i + w, i + 1]);
            triangles.push([i + w, i + w + 1, i + 1]);
        }
    }

    mesh.set_vertices(vertices);
    mesh.set_uvs(uvs);
    mesh.set_triangles(triangles);

    // Normals from the assembled geometry, tangents after that
    mesh.compute_normals();
    mesh.set_tangents(tangents);
    mesh.recompute_bounds();

    Ok(mesh)
}

/// Owning component for a terrain patch.
///
/// Holds the height field and parameters, and guarantees a material is
/// configured by the time the mesh reaches the renderer.
#[derive(Debug, Clone)]
pub struct TerrainBuilder {
    field: HeightField,
    params: TerrainParams,
    material: Option<Material>,
}

impl TerrainBuilder {
    /// Creates a terrain builder from its required inputs.
    pub fn new(field: HeightField, params: TerrainParams) -> Self {
        Self {
            field,
            params,
            material: None,
        }
    }

    /// Configures an explicit material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// The configured material, if any.
    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Builds the terrain mesh, attaching the default material first if
    /// none is configured.
    pub fn build(&mut self) -> Result<Mesh, GeometryError> {
        if self.material.is_none() {
            log::debug!("no terrain material configured, attaching default");
            self.material = Some(Material::default());
        }
        build_terrain(&self.field, &self.params)
    }
}
