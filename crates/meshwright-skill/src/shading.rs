// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Material and texture skills.

use meshwright_core::types::{default_color_ramp, is_unit_rgb};
use meshwright_core::{
    parse_choice, run_skill, ColorStop, MaterialClass, Rgb, SkillError, SkillOutcome,
    SkillResponse, SurfaceFinish, TextureType,
};
use serde::{Deserialize, Serialize};

/// Render engines a generated PBR material is expected to work with.
pub const RENDER_ENGINES: &[&str] = &["Cycles", "Eevee", "Arnold", "V-Ray"];

fn default_base_color() -> Rgb {
    [0.8, 0.8, 0.8]
}

fn default_roughness() -> f64 {
    0.5
}

fn default_normal_strength() -> f64 {
    1.0
}

fn default_texture_type() -> String {
    "noise".to_string()
}

fn default_scale() -> f64 {
    1.0
}

fn default_detail() -> f64 {
    2.0
}

fn unit_interval(value: f64, argument: &'static str) -> Result<(), SkillError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SkillError::OutOfRange {
            argument,
            min: "0.0",
            max: "1.0",
        })
    }
}

// --- create_pbr_material ---

/// Arguments for [`create_pbr_material`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PbrMaterialParams {
    pub material_name: String,
    #[serde(default = "default_base_color")]
    pub base_color: Rgb,
    /// 0 is dielectric, 1 is fully metallic.
    #[serde(default)]
    pub metallic: f64,
    /// 0 is a mirror, 1 is completely rough.
    #[serde(default = "default_roughness")]
    pub roughness: f64,
    #[serde(default = "default_normal_strength")]
    pub normal_strength: f64,
    #[serde(default)]
    pub emission_color: Rgb,
    #[serde(default)]
    pub emission_strength: f64,
}

impl PbrMaterialParams {
    pub fn new(material_name: impl Into<String>) -> Self {
        Self {
            material_name: material_name.into(),
            base_color: default_base_color(),
            metallic: 0.0,
            roughness: default_roughness(),
            normal_strength: default_normal_strength(),
            emission_color: [0.0; 3],
            emission_strength: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PbrProperties {
    pub base_color: Rgb,
    pub metallic: f64,
    pub roughness: f64,
    pub normal_strength: f64,
    pub emission_color: Rgb,
    pub emission_strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PbrMaterialCreated {
    pub material_name: String,
    pub material_type: &'static str,
    /// `"<class> <finish>"`, e.g. `"Metallic Satin"`.
    pub surface_classification: String,
    pub properties: PbrProperties,
    pub render_engine_compatibility: &'static [&'static str],
}

impl SkillOutcome for PbrMaterialCreated {
    fn summary(&self) -> String {
        format!(
            "PBR material \"{}\" created successfully",
            self.material_name
        )
    }
}

/// Builds the classification label for a metallic/roughness pair.
pub fn classify_surface(metallic: f64, roughness: f64) -> String {
    format!(
        "{} {}",
        MaterialClass::from_metallic(metallic),
        SurfaceFinish::from_roughness(roughness)
    )
}

/// Creates a physically based material with the standard parameter set.
pub fn create_pbr_material(params: PbrMaterialParams) -> SkillResponse<PbrMaterialCreated> {
    run_skill("create_pbr_material", move || {
        if !is_unit_rgb(&params.base_color) || !is_unit_rgb(&params.emission_color) {
            return Err(SkillError::OutOfRange {
                argument: "Color values",
                min: "0.0",
                max: "1.0",
            });
        }
        unit_interval(params.metallic, "Metallic value")?;
        unit_interval(params.roughness, "Roughness value")?;

        Ok(PbrMaterialCreated {
            surface_classification: classify_surface(params.metallic, params.roughness),
            material_name: params.material_name,
            material_type: "PBR",
            properties: PbrProperties {
                base_color: params.base_color,
                metallic: params.metallic,
                roughness: params.roughness,
                normal_strength: params.normal_strength,
                emission_color: params.emission_color,
                emission_strength: params.emission_strength,
            },
            render_engine_compatibility: RENDER_ENGINES,
        })
    })
}

// --- apply_material_to_object ---

/// Arguments for [`apply_material_to_object`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplyMaterialParams {
    pub object_name: String,
    pub material_name: String,
    #[serde(default)]
    pub material_slot: i64,
}

impl ApplyMaterialParams {
    pub fn new(object_name: impl Into<String>, material_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            material_name: material_name.into(),
            material_slot: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialApplied {
    pub object_name: String,
    pub material_name: String,
    pub material_slot: i64,
    pub application_method: &'static str,
}

impl SkillOutcome for MaterialApplied {
    fn summary(&self) -> String {
        format!(
            "Material \"{}\" applied to \"{}\"",
            self.material_name, self.object_name
        )
    }
}

/// Assigns an existing material to an object slot.
pub fn apply_material_to_object(params: ApplyMaterialParams) -> SkillResponse<MaterialApplied> {
    run_skill("apply_material_to_object", move || {
        if params.material_slot < 0 {
            return Err(SkillError::Negative {
                argument: "Material slot",
            });
        }

        Ok(MaterialApplied {
            object_name: params.object_name,
            material_name: params.material_name,
            material_slot: params.material_slot,
            application_method: "direct_assignment",
        })
    })
}

// --- create_procedural_texture ---

/// Arguments for [`create_procedural_texture`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProceduralTextureParams {
    pub texture_name: String,
    #[serde(default = "default_texture_type")]
    pub texture_type: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Octaves of detail.
    #[serde(default = "default_detail")]
    pub detail: f64,
    #[serde(default)]
    pub distortion: f64,
    /// Absent means a black-to-white ramp; an empty list is kept as is.
    #[serde(default)]
    pub color_ramp: Option<Vec<ColorStop>>,
}

impl ProceduralTextureParams {
    pub fn new(texture_name: impl Into<String>, texture_type: impl Into<String>) -> Self {
        Self {
            texture_name: texture_name.into(),
            texture_type: texture_type.into(),
            scale: default_scale(),
            detail: default_detail(),
            distortion: 0.0,
            color_ramp: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureProperties {
    pub scale: f64,
    pub detail: f64,
    pub distortion: f64,
    pub color_ramp_stops: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProceduralTextureCreated {
    pub texture_name: String,
    pub texture_type: TextureType,
    pub properties: TextureProperties,
    pub node_type: &'static str,
    pub output_type: &'static str,
}

impl SkillOutcome for ProceduralTextureCreated {
    fn summary(&self) -> String {
        format!("Procedural texture \"{}\" created", self.texture_name)
    }
}

/// Creates a procedural texture node for use in materials.
pub fn create_procedural_texture(
    params: ProceduralTextureParams,
) -> SkillResponse<ProceduralTextureCreated> {
    run_skill("create_procedural_texture", move || {
        let texture_type: TextureType = parse_choice("texture type", &params.texture_type)?;
        let color_ramp = params.color_ramp.unwrap_or_else(default_color_ramp);

        Ok(ProceduralTextureCreated {
            texture_name: params.texture_name,
            texture_type,
            properties: TextureProperties {
                scale: params.scale,
                detail: params.detail,
                distortion: params.distortion,
                color_ramp_stops: color_ramp.len(),
            },
            node_type: "procedural",
            output_type: "color_and_factor",
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshwright_core::Status;

    #[test]
    fn steel_is_metallic_satin() {
        let response = create_pbr_material(PbrMaterialParams {
            metallic: 0.9,
            roughness: 0.3,
            ..PbrMaterialParams::new("Steel")
        });
        assert_eq!(response.status, Status::Success);
        assert_eq!(response.message, "PBR material \"Steel\" created successfully");
        let data = response.data.unwrap();
        assert_eq!(data.surface_classification, "Metallic Satin");
        assert_eq!(data.material_type, "PBR");
        assert_eq!(data.properties.metallic, 0.9);
        assert_eq!(data.properties.base_color, [0.8, 0.8, 0.8]);
        assert_eq!(
            data.render_engine_compatibility,
            &["Cycles", "Eevee", "Arnold", "V-Ray"]
        );
    }

    #[test]
    fn default_material_is_dielectric_satin() {
        let data = create_pbr_material(PbrMaterialParams::new("Clay"))
            .data
            .unwrap();
        assert_eq!(data.surface_classification, "Dielectric Satin");
    }

    #[test]
    fn classification_extremes() {
        assert_eq!(classify_surface(0.0, 0.1), "Dielectric Glossy");
        assert_eq!(classify_surface(1.0, 0.9), "Metallic Rough");
    }

    #[test]
    fn out_of_range_colors_are_rejected_first() {
        let response = create_pbr_material(PbrMaterialParams {
            emission_color: [0.0, 1.5, 0.0],
            metallic: 4.0,
            ..PbrMaterialParams::new("Bad")
        });
        assert!(response.is_error());
        assert_eq!(response.message, "Color values must be between 0.0 and 1.0");
    }

    #[test]
    fn metallic_and_roughness_ranges() {
        let response = create_pbr_material(PbrMaterialParams {
            metallic: -0.1,
            ..PbrMaterialParams::new("Bad")
        });
        assert_eq!(response.message, "Metallic value must be between 0.0 and 1.0");

        let response = create_pbr_material(PbrMaterialParams {
            roughness: 1.01,
            ..PbrMaterialParams::new("Bad")
        });
        assert_eq!(response.message, "Roughness value must be between 0.0 and 1.0");
        assert!(response.data.is_none());
    }

    #[test]
    fn material_assignment_echoes_slot() {
        let response = apply_material_to_object(ApplyMaterialParams {
            material_slot: 2,
            ..ApplyMaterialParams::new("Cube.001", "Steel")
        });
        assert_eq!(response.message, "Material \"Steel\" applied to \"Cube.001\"");
        let data = response.data.unwrap();
        assert_eq!(data.material_slot, 2);
        assert_eq!(data.application_method, "direct_assignment");
    }

    #[test]
    fn negative_slot_is_rejected() {
        let response = apply_material_to_object(ApplyMaterialParams {
            material_slot: -1,
            ..ApplyMaterialParams::new("Cube.001", "Steel")
        });
        assert!(response.is_error());
        assert_eq!(response.message, "Material slot must be 0 or greater");
    }

    #[test]
    fn missing_ramp_gets_default_stops() {
        let response = create_procedural_texture(ProceduralTextureParams::new("T", "noise"));
        assert_eq!(response.message, "Procedural texture \"T\" created");
        let data = response.data.unwrap();
        assert_eq!(data.properties.color_ramp_stops, 2);
        assert_eq!(data.texture_type, TextureType::Noise);
        assert_eq!(data.node_type, "procedural");
        assert_eq!(data.output_type, "color_and_factor");
    }

    #[test]
    fn empty_ramp_is_not_replaced() {
        let data = create_procedural_texture(ProceduralTextureParams {
            color_ramp: Some(Vec::new()),
            ..ProceduralTextureParams::new("T", "wave")
        })
        .data
        .unwrap();
        assert_eq!(data.properties.color_ramp_stops, 0);
    }

    #[test]
    fn custom_ramp_stop_count() {
        let ramp = vec![
            ColorStop(0.0, [0.1, 0.05, 0.0]),
            ColorStop(0.5, [0.4, 0.2, 0.1]),
            ColorStop(1.0, [0.7, 0.35, 0.2]),
        ];
        let data = create_procedural_texture(ProceduralTextureParams {
            scale: 5.0,
            color_ramp: Some(ramp),
            ..ProceduralTextureParams::new("RustNoise", "NOISE")
        })
        .data
        .unwrap();
        assert_eq!(data.properties.color_ramp_stops, 3);
        assert_eq!(data.properties.scale, 5.0);
        assert_eq!(data.properties.detail, 2.0);
    }

    #[test]
    fn unknown_texture_type_is_rejected() {
        let response = create_procedural_texture(ProceduralTextureParams::new("T", "marble"));
        assert!(response.is_error());
        assert_eq!(
            response.message,
            "Invalid texture type \"marble\". Valid options: noise, voronoi, wave, magic, brick, checker"
        );
    }
}
