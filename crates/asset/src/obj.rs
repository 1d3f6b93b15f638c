//! Minimal OBJ parser producing flattened position/texcoord/normal buffers.
//!
//! Supports `v`, `vt`, `vn` and fan-triangulated `f` directives; everything
//! else (`o`, `g`, `s`, `usemtl`, `mtllib`, ...) is skipped with a warning.
//! This is not a full .obj parser; see <http://paulbourke.net/dataformats/obj/>.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ParseError;
use crate::line::records;
use crate::mesh::VertexData;

/// Load and parse an OBJ mesh from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> Result<VertexData> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read OBJ file: {}", path.display()))?;
    let data = parse_obj(&text)
        .with_context(|| format!("Failed to parse OBJ file: {}", path.display()))?;
    log::info!(
        "Loaded OBJ {}: {} triangles",
        path.display(),
        data.triangle_count()
    );
    Ok(data)
}

/// Parse OBJ text into flattened vertex buffers.
///
/// Numeric data tokens that fail to parse become `NaN` rather than aborting
/// the parse; a face index that resolves outside its attribute table is
/// reported as [`ParseError::IndexOutOfRange`].
pub fn parse_obj(text: &str) -> Result<VertexData, ParseError> {
    // Index 0 of each table is a reserved dummy tuple so the format's
    // 1-based indices resolve without offset arithmetic.
    let mut positions: Vec<Vec<f32>> = vec![vec![0.0; 3]];
    let mut texcoords: Vec<Vec<f32>> = vec![vec![0.0; 2]];
    let mut normals: Vec<Vec<f32>> = vec![vec![0.0; 3]];

    let mut out = VertexData::default();

    for rec in records(text) {
        match rec.keyword {
            "v" => positions.push(parse_floats(&rec.args)),
            "vt" => texcoords.push(parse_floats(&rec.args)),
            "vn" => normals.push(parse_floats(&rec.args)),
            "f" => {
                // Fan triangulation: N references give N - 2 triangles, all
                // sharing the first referenced vertex.
                for tri in 0..rec.args.len().saturating_sub(2) {
                    for reference in [rec.args[0], rec.args[tri + 1], rec.args[tri + 2]] {
                        emit_vertex(
                            reference,
                            rec.line_no,
                            &positions,
                            &texcoords,
                            &normals,
                            &mut out,
                        )?;
                    }
                }
            }
            other => log::warn!("unhandled OBJ keyword '{}' on line {}", other, rec.line_no),
        }
    }

    Ok(out)
}

/// Append the attribute tuples referenced by one `p[/t[/n]]` face vertex.
fn emit_vertex(
    reference: &str,
    line: usize,
    positions: &[Vec<f32>],
    texcoords: &[Vec<f32>],
    normals: &[Vec<f32>],
    out: &mut VertexData,
) -> Result<(), ParseError> {
    let targets: [(&[Vec<f32>], &mut Vec<f32>); 3] = [
        (positions, &mut out.position),
        (texcoords, &mut out.texcoord),
        (normals, &mut out.normal),
    ];

    // Slot order matches the `f` grammar: position/texcoord/normal. An empty
    // slot (as in `1//2`) appends nothing for this vertex; slots past the
    // third are ignored.
    for ((table, buffer), slot) in targets.into_iter().zip(reference.split('/')) {
        if slot.is_empty() {
            continue;
        }
        buffer.extend_from_slice(resolve(slot, table, line)?);
    }

    Ok(())
}

/// Resolve one index slot against its attribute table.
///
/// Non-negative values index the table directly (the dummy zeroth entry
/// absorbs the 1-based convention); negative values count back from the most
/// recently appended entry, i.e. resolve to `value + table.len()`.
fn resolve<'t>(slot: &str, table: &'t [Vec<f32>], line: usize) -> Result<&'t [f32], ParseError> {
    let raw: i64 = slot.parse().map_err(|_| ParseError::MalformedFaceReference {
        line,
        reference: slot.to_owned(),
    })?;

    let index = if raw >= 0 { raw } else { raw + table.len() as i64 };
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .map(Vec::as_slice)
        .ok_or(ParseError::IndexOutOfRange {
            line,
            index: raw,
            len: table.len() - 1,
        })
}

fn parse_floats(args: &[&str]) -> Vec<f32> {
    // Malformed tokens become NaN instead of failing the parse.
    args.iter().map(|t| t.parse().unwrap_or(f32::NAN)).collect()
}
