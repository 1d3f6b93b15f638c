//! Minimal MTL parser producing a material table keyed by name.
//!
//! Supports `newmtl` plus the scalar/color properties the shader consumes;
//! texture-map directives (`map_Kd` and friends) are skipped with a warning.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ParseError;
use crate::line::records;

/// One named material. Fields are present only if their directive appeared
/// in the source text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Material {
    pub shininess: Option<f32>,
    pub ambient: Option<[f32; 3]>,
    pub diffuse: Option<[f32; 3]>,
    pub specular: Option<[f32; 3]>,
    pub emissive: Option<[f32; 3]>,
    pub optical_density: Option<f32>,
    pub opacity: Option<f32>,
    pub illum: Option<i32>,
}

/// Load and parse a material library from a file path.
pub fn load_mtl_from_path(path: impl AsRef<Path>) -> Result<HashMap<String, Material>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read MTL file: {}", path.display()))?;
    let materials = parse_mtl(&text)
        .with_context(|| format!("Failed to parse MTL file: {}", path.display()))?;
    log::info!("Loaded MTL {}: {} materials", path.display(), materials.len());
    Ok(materials)
}

/// Parse MTL text into a name-to-material mapping.
///
/// A duplicate `newmtl` name overwrites the earlier entry. Any property
/// directive before the first `newmtl` is reported as
/// [`ParseError::PropertyOutsideMaterial`].
pub fn parse_mtl(text: &str) -> Result<HashMap<String, Material>, ParseError> {
    let mut materials = HashMap::new();
    // The material under construction, threaded explicitly so "no material
    // yet" is a representable state.
    let mut current: Option<(String, Material)> = None;

    for rec in records(text) {
        match rec.keyword {
            "newmtl" => {
                if let Some((name, material)) = current.take() {
                    materials.insert(name, material);
                }
                // The name is the verbatim remainder: it may contain spaces.
                current = Some((rec.rest.to_owned(), Material::default()));
            }
            "Ns" => active(&mut current, &rec)?.shininess = Some(first_float(&rec.args)),
            "Ni" => active(&mut current, &rec)?.optical_density = Some(first_float(&rec.args)),
            "d" => active(&mut current, &rec)?.opacity = Some(first_float(&rec.args)),
            "Ka" => active(&mut current, &rec)?.ambient = Some(color(&rec.args)),
            "Kd" => active(&mut current, &rec)?.diffuse = Some(color(&rec.args)),
            "Ks" => active(&mut current, &rec)?.specular = Some(color(&rec.args)),
            "Ke" => active(&mut current, &rec)?.emissive = Some(color(&rec.args)),
            "illum" => {
                let material = active(&mut current, &rec)?;
                match rec.args.first().map(|t| t.parse::<i32>()) {
                    Some(Ok(model)) => material.illum = Some(model),
                    _ => log::warn!("malformed illum model on line {}", rec.line_no),
                }
            }
            other => log::warn!("unhandled MTL keyword '{}' on line {}", other, rec.line_no),
        }
    }

    if let Some((name, material)) = current {
        materials.insert(name, material);
    }

    Ok(materials)
}

fn active<'c>(
    current: &'c mut Option<(String, Material)>,
    rec: &crate::line::Record<'_>,
) -> Result<&'c mut Material, ParseError> {
    match current {
        Some((_, material)) => Ok(material),
        None => Err(ParseError::PropertyOutsideMaterial {
            line: rec.line_no,
            keyword: rec.keyword.to_owned(),
        }),
    }
}

fn first_float(args: &[&str]) -> f32 {
    // A missing or malformed argument stores NaN, never an error.
    args.first().and_then(|t| t.parse().ok()).unwrap_or(f32::NAN)
}

fn color(args: &[&str]) -> [f32; 3] {
    let mut components = [f32::NAN; 3];
    for (slot, token) in components.iter_mut().zip(args) {
        *slot = token.parse().unwrap_or(f32::NAN);
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_material() {
        let src = "newmtl M\nKd 0.1 0.2 0.3\nNs 50\n";
        let materials = parse_mtl(src).expect("parse material");
        let m = &materials["M"];
        assert_eq!(m.diffuse, Some([0.1, 0.2, 0.3]));
        assert_eq!(m.shininess, Some(50.0));
        assert_eq!(m.ambient, None);
        assert_eq!(m.illum, None);
    }

    #[test]
    fn parses_a_full_blender_style_material() {
        let src = r#"
            # Blender MTL File: 'cube.blend'
            newmtl Material
            Ns 96.078431
            Ka 0.000000 0.000000 0.000000
            Kd 0.640000 0.640000 0.640000
            Ks 0.500000 0.500000 0.500000
            Ke 0.100000 0.100000 0.100000
            Ni 1.000000
            d 1.000000
            illum 2
        "#;
        let materials = parse_mtl(src).expect("parse material");
        let m = &materials["Material"];
        assert_eq!(m.shininess, Some(96.078431));
        assert_eq!(m.ambient, Some([0.0, 0.0, 0.0]));
        assert_eq!(m.diffuse, Some([0.64, 0.64, 0.64]));
        assert_eq!(m.specular, Some([0.5, 0.5, 0.5]));
        assert_eq!(m.emissive, Some([0.1, 0.1, 0.1]));
        assert_eq!(m.optical_density, Some(1.0));
        assert_eq!(m.opacity, Some(1.0));
        assert_eq!(m.illum, Some(2));
    }

    #[test]
    fn material_names_keep_internal_spaces() {
        let materials = parse_mtl("newmtl Brushed Steel 02\nNs 10\n").expect("parse");
        assert!(materials.contains_key("Brushed Steel 02"));
    }

    #[test]
    fn later_duplicate_name_wins() {
        let src = "newmtl M\nNs 1\nnewmtl M\nNs 2\n";
        let materials = parse_mtl(src).expect("parse");
        assert_eq!(materials.len(), 1);
        assert_eq!(materials["M"].shininess, Some(2.0));
    }

    #[test]
    fn texture_map_directives_are_skipped() {
        let src = "newmtl M\nKd 0.8 0.8 0.8\nmap_Kd cube-uv-num.png\n";
        let materials = parse_mtl(src).expect("parse");
        assert_eq!(materials["M"].diffuse, Some([0.8, 0.8, 0.8]));
    }

    #[test]
    fn property_before_newmtl_is_an_error() {
        let err = parse_mtl("Kd 0.1 0.2 0.3\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::PropertyOutsideMaterial {
                line: 1,
                keyword: "Kd".to_owned(),
            }
        );
    }

    #[test]
    fn missing_scalar_argument_stores_nan() {
        let materials = parse_mtl("newmtl M\nNs\n").expect("parse");
        assert!(materials["M"].shininess.expect("field set").is_nan());
    }

    #[test]
    fn short_color_fills_missing_slots_with_nan() {
        let materials = parse_mtl("newmtl M\nKa 0.25 0.5\n").expect("parse");
        let ambient = materials["M"].ambient.expect("field set");
        assert_eq!(&ambient[..2], &[0.25, 0.5]);
        assert!(ambient[2].is_nan());
    }

    #[test]
    fn malformed_illum_leaves_field_unset() {
        let materials = parse_mtl("newmtl M\nillum two\n").expect("parse");
        assert_eq!(materials["M"].illum, None);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let materials = parse_mtl("# comments only\n\n").expect("parse");
        assert!(materials.is_empty());
    }
}
