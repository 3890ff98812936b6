// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value types and closed enumerations shared by the skills.
//!
//! String-valued arguments coming from an agent are parsed into these
//! enumerations case-insensitively with [`parse_choice`]; everything past
//! that boundary works with the typed value.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::error::SkillError;

/// A 3-component vector (location, rotation in radians, direction).
pub type Vec3 = [f64; 3];

/// An RGB color with channels nominally in `[0.0, 1.0]`.
pub type Rgb = [f64; 3];

/// Pure black.
pub const BLACK: Rgb = [0.0, 0.0, 0.0];

/// Pure white.
pub const WHITE: Rgb = [1.0, 1.0, 1.0];

/// Parses `value` into a closed enumeration, reporting the accepted values
/// on failure.
pub fn parse_choice<E>(argument: &'static str, value: &str) -> Result<E, SkillError>
where
    E: FromStr + VariantNames,
{
    E::from_str(value).map_err(|_| SkillError::InvalidOption {
        argument,
        value: value.to_string(),
        valid: E::VARIANTS.join(", "),
    })
}

/// Returns true when every channel lies in `[0.0, 1.0]`.
pub fn is_unit_rgb(color: &Rgb) -> bool {
    color.iter().all(|c| (0.0..=1.0).contains(c))
}

/// Mesh primitives that can be added to a scene.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Plane,
    Torus,
}

/// Vertex and face totals reported for a freshly created primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    pub vertices: u32,
    pub faces: u32,
}

impl PrimitiveType {
    /// The capitalized display name, used for synthesized object names.
    pub fn title(self) -> &'static str {
        match self {
            Self::Cube => "Cube",
            Self::Sphere => "Sphere",
            Self::Cylinder => "Cylinder",
            Self::Cone => "Cone",
            Self::Plane => "Plane",
            Self::Torus => "Torus",
        }
    }

    /// Default-resolution mesh totals for the primitive.
    ///
    /// These are fixed placeholder values until scene data can be read back
    /// from a running application.
    pub fn stats(self) -> MeshStats {
        let (vertices, faces) = match self {
            Self::Cube => (8, 6),
            Self::Sphere => (482, 480),
            Self::Cylinder => (64, 62),
            Self::Cone => (33, 31),
            Self::Plane => (4, 1),
            Self::Torus => (576, 576),
        };
        MeshStats { vertices, faces }
    }
}

/// A world axis for mirror and array modifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Built-in procedural texture node kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TextureType {
    Noise,
    Voronoi,
    Wave,
    Magic,
    Brick,
    Checker,
}

/// Rough cost of evaluating a subdivision modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PerformanceImpact {
    Low,
    Medium,
    High,
}

impl PerformanceImpact {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=1 => Self::Low,
            2..=3 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// Metal/dielectric split of a PBR material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum MaterialClass {
    Metallic,
    Dielectric,
}

impl MaterialClass {
    /// Anything above 0.7 metallic reads as metal.
    pub fn from_metallic(metallic: f64) -> Self {
        if metallic > 0.7 {
            Self::Metallic
        } else {
            Self::Dielectric
        }
    }
}

/// Surface finish derived from roughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum SurfaceFinish {
    Glossy,
    Satin,
    Rough,
}

impl SurfaceFinish {
    pub fn from_roughness(roughness: f64) -> Self {
        if roughness < 0.3 {
            Self::Glossy
        } else if roughness > 0.7 {
            Self::Rough
        } else {
            Self::Satin
        }
    }
}

/// One stop of a color ramp, serialized as `[position, [r, g, b]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop(pub f64, pub Rgb);

impl ColorStop {
    pub fn position(&self) -> f64 {
        self.0
    }

    pub fn color(&self) -> Rgb {
        self.1
    }
}

/// The black-to-white ramp used when a texture is created without one.
pub fn default_color_ramp() -> Vec<ColorStop> {
    vec![ColorStop(0.0, BLACK), ColorStop(1.0, WHITE)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_type_parses_case_insensitively() {
        let parsed: PrimitiveType = parse_choice("primitive type", "SpHeRe").unwrap();
        assert_eq!(parsed, PrimitiveType::Sphere);
        assert_eq!(parsed.to_string(), "sphere");
        assert_eq!(parsed.title(), "Sphere");
    }

    #[test]
    fn unknown_primitive_lists_valid_options() {
        let err = parse_choice::<PrimitiveType>("primitive type", "pyramid").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid primitive type \"pyramid\". Valid options: cube, sphere, cylinder, cone, plane, torus"
        );
    }

    #[test]
    fn axis_canonical_form_is_uppercase() {
        let axis: Axis = parse_choice("axis", "y").unwrap();
        assert_eq!(axis, Axis::Y);
        assert_eq!(axis.to_string(), "Y");
        assert_eq!(serde_json::to_value(axis).unwrap(), "Y");

        let err = parse_choice::<Axis>("axis", "W").unwrap_err();
        assert_eq!(err.to_string(), "Invalid axis \"W\". Valid options: X, Y, Z");
    }

    #[test]
    fn texture_type_variants() {
        assert_eq!(
            TextureType::VARIANTS,
            &["noise", "voronoi", "wave", "magic", "brick", "checker"]
        );
        let t: TextureType = parse_choice("texture type", "Voronoi").unwrap();
        assert_eq!(t, TextureType::Voronoi);
    }

    #[test]
    fn primitive_stats_table() {
        assert_eq!(
            PrimitiveType::Sphere.stats(),
            MeshStats {
                vertices: 482,
                faces: 480
            }
        );
        assert_eq!(PrimitiveType::Plane.stats().faces, 1);
        assert_eq!(PrimitiveType::Torus.stats().vertices, 576);
    }

    #[test]
    fn performance_impact_thresholds() {
        assert_eq!(PerformanceImpact::for_level(1), PerformanceImpact::Low);
        assert_eq!(PerformanceImpact::for_level(2), PerformanceImpact::Medium);
        assert_eq!(PerformanceImpact::for_level(3), PerformanceImpact::Medium);
        assert_eq!(PerformanceImpact::for_level(4), PerformanceImpact::High);
        assert_eq!(PerformanceImpact::High.to_string(), "high");
    }

    #[test]
    fn material_classification_boundaries() {
        assert_eq!(MaterialClass::from_metallic(0.7), MaterialClass::Dielectric);
        assert_eq!(MaterialClass::from_metallic(0.71), MaterialClass::Metallic);
        assert_eq!(SurfaceFinish::from_roughness(0.29), SurfaceFinish::Glossy);
        assert_eq!(SurfaceFinish::from_roughness(0.3), SurfaceFinish::Satin);
        assert_eq!(SurfaceFinish::from_roughness(0.7), SurfaceFinish::Satin);
        assert_eq!(SurfaceFinish::from_roughness(0.71), SurfaceFinish::Rough);
    }

    #[test]
    fn color_stop_serializes_as_nested_tuple() {
        let json = serde_json::to_value(ColorStop(0.5, [1.0, 0.0, 0.25])).unwrap();
        assert_eq!(json, serde_json::json!([0.5, [1.0, 0.0, 0.25]]));

        let ramp = default_color_ramp();
        assert_eq!(ramp.len(), 2);
        assert_eq!(ramp[0].color(), BLACK);
        assert_eq!(ramp[1].position(), 1.0);
    }

    #[test]
    fn unit_rgb_check() {
        assert!(is_unit_rgb(&[0.0, 0.5, 1.0]));
        assert!(!is_unit_rgb(&[0.0, 1.2, 0.5]));
        assert!(!is_unit_rgb(&[-0.1, 0.0, 0.0]));
    }
}
