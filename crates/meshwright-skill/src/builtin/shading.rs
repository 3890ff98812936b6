// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool wrappers and argument schemas for the shading skills.

use serde_json::{json, Value};

use super::SkillTool;
use crate::shading::{
    self, ApplyMaterialParams, MaterialApplied, PbrMaterialCreated, PbrMaterialParams,
    ProceduralTextureCreated, ProceduralTextureParams,
};

fn rgb_schema(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "number", "minimum": 0.0, "maximum": 1.0 },
        "minItems": 3,
        "maxItems": 3,
        "description": description
    })
}

fn unit_schema(default: f64, description: &str) -> Value {
    json!({
        "type": "number",
        "minimum": 0.0,
        "maximum": 1.0,
        "default": default,
        "description": description
    })
}

pub fn create_pbr_material_tool() -> SkillTool<PbrMaterialParams, PbrMaterialCreated> {
    SkillTool::new(
        "create_pbr_material",
        "Create a physically based (PBR) material with standard properties",
        create_pbr_material_schema,
        shading::create_pbr_material,
    )
}

fn create_pbr_material_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "material_name": { "type": "string", "description": "Name for the new material" },
            "base_color": rgb_schema("RGB base color, each channel 0-1"),
            "metallic": unit_schema(0.0, "0 = dielectric, 1 = metallic"),
            "roughness": unit_schema(0.5, "0 = mirror, 1 = completely rough"),
            "normal_strength": {
                "type": "number",
                "default": 1.0,
                "description": "Normal map intensity (0-2)"
            },
            "emission_color": rgb_schema("RGB emission color, each channel 0-1"),
            "emission_strength": {
                "type": "number",
                "default": 0.0,
                "description": "Emission intensity"
            }
        },
        "required": ["material_name"]
    })
}

pub fn apply_material_to_object_tool() -> SkillTool<ApplyMaterialParams, MaterialApplied> {
    SkillTool::new(
        "apply_material_to_object",
        "Assign an existing material to a 3D object",
        apply_material_to_object_schema,
        shading::apply_material_to_object,
    )
}

fn apply_material_to_object_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "object_name": { "type": "string", "description": "Name of the target object" },
            "material_name": { "type": "string", "description": "Name of the material to apply" },
            "material_slot": {
                "type": "integer",
                "minimum": 0,
                "default": 0,
                "description": "Material slot index (0-based)"
            }
        },
        "required": ["object_name", "material_name"]
    })
}

pub fn create_procedural_texture_tool(
) -> SkillTool<ProceduralTextureParams, ProceduralTextureCreated> {
    SkillTool::new(
        "create_procedural_texture",
        "Create a procedural texture node for material use",
        create_procedural_texture_schema,
        shading::create_procedural_texture,
    )
}

fn create_procedural_texture_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "texture_name": { "type": "string", "description": "Name for the texture" },
            "texture_type": {
                "type": "string",
                "enum": ["noise", "voronoi", "wave", "magic", "brick", "checker"],
                "default": "noise",
                "description": "Type of procedural texture"
            },
            "scale": { "type": "number", "default": 1.0, "description": "Texture scale/frequency" },
            "detail": { "type": "number", "default": 2.0, "description": "Level of detail/octaves" },
            "distortion": { "type": "number", "default": 0.0, "description": "Distortion amount" },
            "color_ramp": {
                "type": "array",
                "description": "Color ramp stops as [position, [r, g, b]] pairs; black to white when omitted",
                "items": {
                    "type": "array",
                    "prefixItems": [
                        { "type": "number" },
                        rgb_schema("Stop color")
                    ],
                    "minItems": 2,
                    "maxItems": 2
                }
            }
        },
        "required": ["texture_name"]
    })
}
