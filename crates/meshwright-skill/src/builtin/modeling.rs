// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool wrappers and argument schemas for the modeling skills.

use serde_json::{json, Value};

use super::SkillTool;
use crate::modeling::{
    self, ArrayCreated, ArrayModifierParams, CreatePrimitiveParams, ExtrudeFacesParams,
    FacesExtruded, MirrorApplied, MirrorModifierParams, PrimitiveCreated,
    SubdivideSurfaceParams, SurfaceSubdivided,
};

fn vec3_schema(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "number" },
        "minItems": 3,
        "maxItems": 3,
        "description": description
    })
}

fn axis_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": ["X", "Y", "Z"],
        "default": "X",
        "description": description
    })
}

fn object_name_schema() -> Value {
    json!({ "type": "string", "description": "Name of the target mesh object" })
}

pub fn create_primitive_tool() -> SkillTool<CreatePrimitiveParams, PrimitiveCreated> {
    SkillTool::new(
        "create_primitive",
        "Create a new primitive mesh object (cube, sphere, cylinder, cone, plane, torus)",
        create_primitive_schema,
        modeling::create_primitive,
    )
}

fn create_primitive_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "primitive_type": {
                "type": "string",
                "enum": ["cube", "sphere", "cylinder", "cone", "plane", "torus"],
                "default": "cube",
                "description": "The type of primitive to create"
            },
            "size": {
                "type": "number",
                "exclusiveMinimum": 0,
                "default": 2.0,
                "description": "Base size of the primitive"
            },
            "location": vec3_schema("World coordinates (X, Y, Z) for placement"),
            "rotation": vec3_schema("Rotation in radians (X, Y, Z)"),
            "name": {
                "type": "string",
                "description": "Custom object name; generated from the type when omitted"
            }
        }
    })
}

pub fn extrude_faces_tool() -> SkillTool<ExtrudeFacesParams, FacesExtruded> {
    SkillTool::new(
        "extrude_faces",
        "Extrude selected faces of a mesh object",
        extrude_faces_schema,
        modeling::extrude_faces,
    )
}

fn extrude_faces_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "object_name": object_name_schema(),
            "face_indices": {
                "type": "array",
                "items": { "type": "integer" },
                "minItems": 1,
                "description": "Indices of the faces to extrude"
            },
            "extrude_distance": {
                "type": "number",
                "default": 1.0,
                "description": "Distance to extrude faces"
            },
            "direction": vec3_schema("Direction vector for the extrusion")
        },
        "required": ["object_name", "face_indices"]
    })
}

pub fn subdivide_surface_tool() -> SkillTool<SubdivideSurfaceParams, SurfaceSubdivided> {
    SkillTool::new(
        "subdivide_surface",
        "Apply a subdivision surface modifier to increase mesh resolution",
        subdivide_surface_schema,
        modeling::subdivide_surface,
    )
}

fn subdivide_surface_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "object_name": object_name_schema(),
            "subdivision_level": {
                "type": "integer",
                "minimum": 1,
                "maximum": 10,
                "default": 1,
                "description": "Number of subdivision levels (1-6 recommended)"
            },
            "smooth": {
                "type": "boolean",
                "default": true,
                "description": "Whether to apply smooth shading"
            }
        },
        "required": ["object_name"]
    })
}

pub fn apply_mirror_modifier_tool() -> SkillTool<MirrorModifierParams, MirrorApplied> {
    SkillTool::new(
        "apply_mirror_modifier",
        "Apply a mirror modifier for symmetrical modeling",
        apply_mirror_modifier_schema,
        modeling::apply_mirror_modifier,
    )
}

fn apply_mirror_modifier_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "object_name": object_name_schema(),
            "axis": axis_schema("Mirror axis"),
            "use_clipping": {
                "type": "boolean",
                "default": true,
                "description": "Prevent vertices from crossing the mirror plane"
            },
            "merge_threshold": {
                "type": "number",
                "default": 0.001,
                "description": "Distance threshold for merging vertices"
            }
        },
        "required": ["object_name"]
    })
}

pub fn create_array_modifier_tool() -> SkillTool<ArrayModifierParams, ArrayCreated> {
    SkillTool::new(
        "create_array_modifier",
        "Create an array modifier that duplicates an object along an axis",
        create_array_modifier_schema,
        modeling::create_array_modifier,
    )
}

fn create_array_modifier_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "object_name": object_name_schema(),
            "count": {
                "type": "integer",
                "minimum": 1,
                "default": 3,
                "description": "Number of array instances"
            },
            "offset_distance": {
                "type": "number",
                "default": 2.0,
                "description": "Distance between array instances"
            },
            "axis": axis_schema("Array axis")
        },
        "required": ["object_name"]
    })
}
