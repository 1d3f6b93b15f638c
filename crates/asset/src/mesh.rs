//! CPU-side flattened vertex buffers produced by the OBJ parser.

/// Flattened vertex attributes, ready for upload as three separate
/// vertex buffers by a renderer expecting `position`/`texcoord`/`normal`.
///
/// When every face references all three attribute kinds the buffers stay in
/// step (`position.len() / 3 == texcoord.len() / 2 == normal.len() / 3`).
/// A face that omits a slot appends nothing to that buffer, so mixed-arity
/// faces leave the buffers misaligned. That matches the source format's
/// behavior and is left for the caller to handle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexData {
    pub position: Vec<f32>,
    pub texcoord: Vec<f32>,
    pub normal: Vec<f32>,
}

impl VertexData {
    /// Number of triangles, counted from the position buffer.
    pub fn triangle_count(&self) -> usize {
        self.position.len() / 9
    }

    /// Returns `true` if no face emitted any attribute data.
    pub fn is_empty(&self) -> bool {
        self.position.is_empty() && self.texcoord.is_empty() && self.normal.is_empty()
    }
}
