use crate::geo::Line2;

/// The line segments where the mesh meets one horizontal layer.
/// Lines are in triangle order, they are not joined into loops.
#[derive(Debug,Clone,PartialEq,Default)]
pub struct Layer{
    /// z of the plane at the bottom of the layer
    pub height:f64,
    pub lines:Vec<Line2>,
}

impl Layer {
    pub fn new(height:f64) -> Self {
        Self{ height, lines:Vec::new() }
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
    /// summed length of all segments
    pub fn total_length(&self) -> f64 {
        self.lines.iter().map(|line| line.length()).sum()
    }
}
