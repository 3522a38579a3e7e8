//! Line-oriented OBJ-variant parser.
//!
//! Each line is classified by its first character: `v` + separator is a
//! vertex line, `f` + separator is a face line, everything else is
//! ignored silently (comments, `vt`/`vn` blocks, group markers).
//!
//! Malformed numeric fields on a recognized line are NOT validated — a
//! field that fails to parse becomes NaN (vertex data) or wraps through
//! zero (index data) and propagates downstream rather than failing the
//! load. This is a documented gap, not a guarantee.

use std::io::BufRead;

use trigon_mesh::{Face, Vertex};
use trigon_types::TrigonResult;

/// Raw geometry read from a model file: positions/UVs and
/// fan-triangulated faces, before any normalization or attribute
/// derivation.
#[derive(Debug, Clone, Default)]
pub struct ParsedModel {
    /// Parsed vertices. Only positions (and UVs, when the file carries
    /// them) are meaningful; other slots are placeholders.
    pub vertices: Vec<Vertex>,
    /// Fan-triangulated faces with zero-based indices.
    pub faces: Vec<Face>,
}

/// Parses OBJ-variant text from any buffered reader.
///
/// Vertex lines hold up to 14 whitespace-separated floats, filled
/// positionally into the interleaved vertex layout. Face lines hold
/// N ≥ 3 one-based index groups; `/`-delimited sub-indices beyond the
/// first (texture/normal indices from richer OBJ variants) are
/// discarded. A face line with N indices fan-triangulates into N−2
/// triangles `(first, i, i+1)`.
pub fn parse_obj<R: BufRead>(reader: R) -> TrigonResult<ParsedModel> {
    let mut model = ParsedModel::default();

    for line in reader.lines() {
        let line = line?;
        if let Some(rest) = line.strip_prefix('v') {
            // 'vt'/'vn' lines fail the separator check and fall through
            if rest.starts_with([' ', '\t']) {
                model.vertices.push(parse_vertex_line(rest));
            }
        } else if let Some(rest) = line.strip_prefix('f') {
            if rest.starts_with([' ', '\t']) {
                parse_face_line(rest, &mut model.faces);
            }
        }
    }

    Ok(model)
}

/// Fills a vertex from up to 14 positional float fields.
fn parse_vertex_line(rest: &str) -> Vertex {
    let mut vert = Vertex::default();
    for (slot, field) in rest
        .split_whitespace()
        .take(Vertex::FLOAT_SLOTS)
        .enumerate()
    {
        vert.set_slot(slot, field.parse().unwrap_or(f32::NAN));
    }
    vert
}

/// Fan-triangulates one face line into `faces`.
///
/// A line containing `1 2 4 3` results in faces `(1 2 4)` and `(1 4 3)`,
/// converted to zero-based indices. Lines with fewer than three indices
/// are skipped.
fn parse_face_line(rest: &str, faces: &mut Vec<Face>) {
    let indices: Vec<u32> = rest
        .split_whitespace()
        .map(|group| {
            let first = group.split('/').next().unwrap_or("");
            first.parse::<u32>().unwrap_or(0).wrapping_sub(1)
        })
        .collect();

    if indices.len() < 3 {
        return;
    }
    for i in 0..indices.len() - 2 {
        faces.push(Face::new(indices[0], indices[i + 1], indices[i + 2]));
    }
}
