// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mesh creation and modifier skills.
//!
//! Geometry figures in the results are simulated: primitive totals come from
//! a fixed table and subdivision growth from a closed-form estimate seeded
//! with an 8-vertex cage. They stay this way until results can be read back
//! from a live scene.

use meshwright_core::{
    parse_choice, run_skill, Axis, PerformanceImpact, PrimitiveType, SkillError, SkillOutcome,
    SkillResponse, Vec3,
};
use serde::{Deserialize, Serialize};

/// Vertex count of the cage that subdivision estimates start from.
const SUBDIVISION_BASE_VERTICES: u64 = 8;

/// Highest subdivision level accepted.
const MAX_SUBDIVISION_LEVEL: i64 = 10;

fn default_primitive_type() -> String {
    "cube".to_string()
}

fn default_size() -> f64 {
    2.0
}

fn default_extrude_distance() -> f64 {
    1.0
}

fn default_extrude_direction() -> Vec3 {
    [0.0, 0.0, 1.0]
}

fn default_subdivision_level() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

fn default_axis() -> String {
    "X".to_string()
}

fn default_merge_threshold() -> f64 {
    0.001
}

fn default_array_count() -> i64 {
    3
}

fn default_offset_distance() -> f64 {
    2.0
}

// --- create_primitive ---

/// Arguments for [`create_primitive`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePrimitiveParams {
    /// One of cube, sphere, cylinder, cone, plane, torus (any case).
    #[serde(default = "default_primitive_type")]
    pub primitive_type: String,
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default)]
    pub location: Vec3,
    /// Euler rotation in radians.
    #[serde(default)]
    pub rotation: Vec3,
    /// Object name; `"<Type>.001"` when absent.
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for CreatePrimitiveParams {
    fn default() -> Self {
        Self {
            primitive_type: default_primitive_type(),
            size: default_size(),
            location: [0.0; 3],
            rotation: [0.0; 3],
            name: None,
        }
    }
}

impl CreatePrimitiveParams {
    pub fn new(primitive_type: impl Into<String>) -> Self {
        Self {
            primitive_type: primitive_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveCreated {
    pub object_name: String,
    pub primitive_type: PrimitiveType,
    pub location: Vec3,
    pub rotation: Vec3,
    pub size: f64,
    pub vertex_count: u32,
    pub face_count: u32,
}

impl SkillOutcome for PrimitiveCreated {
    fn summary(&self) -> String {
        format!(
            "{} primitive created successfully",
            self.primitive_type.title()
        )
    }
}

/// Adds a primitive mesh object to the scene.
pub fn create_primitive(params: CreatePrimitiveParams) -> SkillResponse<PrimitiveCreated> {
    run_skill("create_primitive", move || {
        let primitive_type: PrimitiveType =
            parse_choice("primitive type", &params.primitive_type)?;
        if params.size <= 0.0 {
            return Err(SkillError::NotPositive { argument: "Size" });
        }

        let object_name = params
            .name
            .unwrap_or_else(|| format!("{}.001", primitive_type.title()));
        let stats = primitive_type.stats();

        Ok(PrimitiveCreated {
            object_name,
            primitive_type,
            location: params.location,
            rotation: params.rotation,
            size: params.size,
            vertex_count: stats.vertices,
            face_count: stats.faces,
        })
    })
}

// --- extrude_faces ---

/// Arguments for [`extrude_faces`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtrudeFacesParams {
    pub object_name: String,
    /// Indices are not range-checked; there is no mesh to check them against.
    pub face_indices: Vec<i64>,
    #[serde(default = "default_extrude_distance")]
    pub extrude_distance: f64,
    #[serde(default = "default_extrude_direction")]
    pub direction: Vec3,
}

impl ExtrudeFacesParams {
    pub fn new(object_name: impl Into<String>, face_indices: Vec<i64>) -> Self {
        Self {
            object_name: object_name.into(),
            face_indices,
            extrude_distance: default_extrude_distance(),
            direction: default_extrude_direction(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacesExtruded {
    pub object_name: String,
    pub extruded_faces: usize,
    pub extrude_distance: f64,
    pub direction: Vec3,
}

impl SkillOutcome for FacesExtruded {
    fn summary(&self) -> String {
        format!("Extruded {} faces successfully", self.extruded_faces)
    }
}

/// Extrudes the selected faces of a mesh object.
pub fn extrude_faces(params: ExtrudeFacesParams) -> SkillResponse<FacesExtruded> {
    run_skill("extrude_faces", move || {
        if params.face_indices.is_empty() {
            return Err(SkillError::EmptySelection {
                what: "faces",
                operation: "extrusion",
            });
        }

        Ok(FacesExtruded {
            extruded_faces: params.face_indices.len(),
            object_name: params.object_name,
            extrude_distance: params.extrude_distance,
            direction: params.direction,
        })
    })
}

// --- subdivide_surface ---

/// Arguments for [`subdivide_surface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubdivideSurfaceParams {
    pub object_name: String,
    #[serde(default = "default_subdivision_level")]
    pub subdivision_level: i64,
    #[serde(default = "default_true")]
    pub smooth: bool,
}

impl SubdivideSurfaceParams {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            subdivision_level: default_subdivision_level(),
            smooth: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceSubdivided {
    pub object_name: String,
    pub subdivision_level: u32,
    pub smooth_shading: bool,
    pub new_vertex_count: u64,
    pub performance_impact: PerformanceImpact,
}

impl SkillOutcome for SurfaceSubdivided {
    fn summary(&self) -> String {
        format!(
            "Subdivision surface applied at level {}",
            self.subdivision_level
        )
    }
}

/// Estimated vertex count after `level` rounds of subdivision.
pub fn estimated_subdivided_vertices(level: u32) -> u64 {
    SUBDIVISION_BASE_VERTICES * 4u64.pow(level)
}

/// Adds a subdivision surface modifier to a mesh object.
pub fn subdivide_surface(params: SubdivideSurfaceParams) -> SkillResponse<SurfaceSubdivided> {
    run_skill("subdivide_surface", move || {
        let level = params.subdivision_level;
        if !(1..=MAX_SUBDIVISION_LEVEL).contains(&level) {
            return Err(SkillError::OutOfRange {
                argument: "Subdivision level",
                min: "1",
                max: "10",
            });
        }
        let level = level as u32;

        Ok(SurfaceSubdivided {
            object_name: params.object_name,
            subdivision_level: level,
            smooth_shading: params.smooth,
            new_vertex_count: estimated_subdivided_vertices(level),
            performance_impact: PerformanceImpact::for_level(level),
        })
    })
}

// --- apply_mirror_modifier ---

/// Arguments for [`apply_mirror_modifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MirrorModifierParams {
    pub object_name: String,
    /// X, Y or Z (any case).
    #[serde(default = "default_axis")]
    pub axis: String,
    #[serde(default = "default_true")]
    pub use_clipping: bool,
    #[serde(default = "default_merge_threshold")]
    pub merge_threshold: f64,
}

impl MirrorModifierParams {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            axis: default_axis(),
            use_clipping: true,
            merge_threshold: default_merge_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MirrorApplied {
    pub object_name: String,
    pub mirror_axis: Axis,
    pub use_clipping: bool,
    pub merge_threshold: f64,
    pub estimated_vertex_doubling: bool,
}

impl SkillOutcome for MirrorApplied {
    fn summary(&self) -> String {
        format!("Mirror modifier applied on {} axis", self.mirror_axis)
    }
}

/// Adds a mirror modifier for symmetrical modeling.
pub fn apply_mirror_modifier(params: MirrorModifierParams) -> SkillResponse<MirrorApplied> {
    run_skill("apply_mirror_modifier", move || {
        let mirror_axis: Axis = parse_choice("axis", &params.axis)?;

        Ok(MirrorApplied {
            object_name: params.object_name,
            mirror_axis,
            use_clipping: params.use_clipping,
            merge_threshold: params.merge_threshold,
            estimated_vertex_doubling: true,
        })
    })
}

// --- create_array_modifier ---

/// Arguments for [`create_array_modifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArrayModifierParams {
    pub object_name: String,
    #[serde(default = "default_array_count")]
    pub count: i64,
    #[serde(default = "default_offset_distance")]
    pub offset_distance: f64,
    #[serde(default = "default_axis")]
    pub axis: String,
}

impl ArrayModifierParams {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            count: default_array_count(),
            offset_distance: default_offset_distance(),
            axis: default_axis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayCreated {
    pub object_name: String,
    pub total_instances: i64,
    pub offset_distance: f64,
    pub array_axis: Axis,
    /// Distance from the first instance to the last.
    pub total_length: f64,
}

impl SkillOutcome for ArrayCreated {
    fn summary(&self) -> String {
        format!(
            "Array modifier created with {} instances",
            self.total_instances
        )
    }
}

/// Adds an array modifier that repeats an object along an axis.
pub fn create_array_modifier(params: ArrayModifierParams) -> SkillResponse<ArrayCreated> {
    run_skill("create_array_modifier", move || {
        if params.count < 1 {
            return Err(SkillError::BelowMinimum {
                argument: "Array count",
                min: 1,
            });
        }
        let array_axis: Axis = parse_choice("axis", &params.axis)?;
        // JSON has no encoding for inf/NaN.
        let total_length = params.offset_distance * (params.count - 1) as f64;
        if !total_length.is_finite() {
            return Err(SkillError::NotFinite {
                argument: "Array total length",
            });
        }

        Ok(ArrayCreated {
            object_name: params.object_name,
            total_instances: params.count,
            offset_distance: params.offset_distance,
            array_axis,
            total_length,
        })
    })
}
