use std::cmp::Reverse;

use log::{debug, info, warn};
use nalgebra::Point2;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SliceError};
use crate::geo::{edge_zplane_intersection, project_xy, Line2, Triangle};
use crate::mesh::Mesh;

mod layer;
pub use layer::Layer;

/// Upper bound on the number of layers a single slicer will produce.
pub const MAX_LAYER_COUNT:usize = 1 << 24;


/// Where the layer planes are measured from.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerAnchor {
    /// layer i starts at min_z + i * layer_height
    #[default]
    ModelMin,
    /// layer i starts at i * layer_height, a model that is not resting on
    /// z = 0 will have layers that miss part of it
    Origin,
}

/// How a triangle relates to the layer [layer_z, layer_z + thickness).
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Classification {
    /// all three vertices lie inside the layer
    Contained,
    /// at least one edge crosses the plane z = layer_z
    Intersecting,
    Outside,
}

pub fn classify(triangle:&Triangle, layer_z:f64, thickness:f64) -> Classification {
    let top = layer_z + thickness;
    if triangle.vertices.iter().all(|v| layer_z <= v.z && v.z < top) {
        return Classification::Contained
    }
    if triangle.edges().any(|(p1,p2)| (p1.z < layer_z) != (p2.z < layer_z)) {
        return Classification::Intersecting
    }
    Classification::Outside
}

/// The points where the triangle's edges cross the plane z = layer_z,
/// in edge order and never more than two.
pub fn intersection_points(triangle:&Triangle, layer_z:f64) -> Vec<Point2<f64>> {
    triangle.edges()
        .filter(|(p1,p2)| (p1.z < layer_z) != (p2.z < layer_z))
        .filter_map(|(p1,p2)| edge_zplane_intersection(p1, p2, layer_z))
        .take(2)
        .collect()
}

/// Joins the crossing points of an intersecting triangle into a line.
/// Any count other than two is returned as the error.
///
/// With finite coordinates the three edges change side of the plane an even
/// number of times, so the error arm only guards against corrupt input.
pub fn intersection_segment(points:&[Point2<f64>]) -> std::result::Result<Line2,usize> {
    match points {
        [start,end] => Ok(Line2::new(*start,*end)),
        points => Err(points.len()),
    }
}

/// A triangle that was classified as intersecting but did not produce
/// exactly two crossing points. No line is emitted for it.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct IntersectionAnomaly{
    pub layer_z:f64,
    pub triangle_index:usize,
    pub point_count:usize,
}

#[derive(Debug,Clone,Copy)]
struct ZRange{
    index:usize,
    min_z:f64,
    max_z:f64,
}

/// Cuts a finished mesh into layers of constant thickness.
///
/// The slicer borrows the mesh, so it cannot be transformed while the slicer is alive.
#[derive(Debug)]
pub struct Slicer<'a>{
    mesh:&'a Mesh,
    layer_height:f64,
    anchor:LayerAnchor,
    layers:Vec<Layer>,
    anomalies:Vec<IntersectionAnomaly>,
}

impl<'a> Slicer<'a> {
    pub fn new(mesh:&'a Mesh, layer_height:f64) -> Result<Self> {
        if !(layer_height > 0.0) || !layer_height.is_finite() {
            return Err(SliceError::InvalidLayerHeight(layer_height))
        }
        let count = Self::exact_layer_count(mesh, layer_height);
        if count > MAX_LAYER_COUNT as f64 {
            return Err(SliceError::TooManyLayers{ layer_height, count, max:MAX_LAYER_COUNT })
        }
        Ok(Self{
            mesh,
            layer_height,
            anchor:LayerAnchor::default(),
            layers:Vec::new(),
            anomalies:Vec::new(),
        })
    }
    pub fn with_anchor(mut self, anchor:LayerAnchor) -> Self {
        self.anchor = anchor;
        self
    }
    pub fn layer_height(&self) -> f64 {
        self.layer_height
    }
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }
    /// anomalies found during the last call to slice_model
    pub fn anomalies(&self) -> &[IntersectionAnomaly] {
        &self.anomalies
    }

    /// ceil((max_z - min_z) / layer_height), zero for an empty mesh
    pub fn layer_count(&self) -> usize {
        // bounded by MAX_LAYER_COUNT in new()
        Self::exact_layer_count(self.mesh, self.layer_height) as usize
    }

    fn exact_layer_count(mesh:&Mesh, layer_height:f64) -> f64 {
        if mesh.is_empty() { return 0.0 }
        let bounds = mesh.bounding_box();
        let extent = bounds.max.z - bounds.min.z;
        (extent / layer_height).ceil()
    }

    /// z of the bottom plane of layer i
    pub fn layer_z(&self, layer_index:usize) -> f64 {
        let base = match self.anchor {
            LayerAnchor::ModelMin => self.mesh.bounding_box().min.z,
            LayerAnchor::Origin => 0.0,
        };
        base + layer_index as f64 * self.layer_height
    }

    /// Slices the whole mesh, replacing the layers of any previous call.
    ///
    /// Triangles are swept in order of their lowest vertex; a triangle only
    /// takes part in a layer while its z-range can reach it. Within a layer
    /// the lines are still emitted in mesh order.
    pub fn slice_model(&mut self) {
        self.layers.clear();
        self.anomalies.clear();

        if self.mesh.is_empty() {
            warn!("slicing an empty mesh, no layers are produced");
            return
        }
        let layer_count = self.layer_count();
        info!("slicing {} triangles into {layer_count} layers of {}",
            self.mesh.triangle_count(), self.layer_height);

        let ranges = self.sorted_z_ranges();
        let mut next = 0;
        let mut active:PriorityQueue<usize,Reverse<OrderedFloat<f64>>> = PriorityQueue::new();
        let mut layers = Vec::with_capacity(layer_count);
        let mut anomalies = Vec::new();

        for layer_index in 0..layer_count {
            let layer_z = self.layer_z(layer_index);
            let top = layer_z + self.layer_height;

            while let Some(range) = ranges.get(next).filter(|range| range.min_z < top) {
                active.push(range.index, Reverse(OrderedFloat(range.max_z)));
                next += 1;
            }
            while active.peek().is_some_and(|(_,Reverse(max_z))| max_z.0 < layer_z) {
                active.pop();
            }

            let mut candidates:Vec<usize> = active.iter().map(|(index,_)| *index).collect();
            candidates.sort_unstable();

            let layer = self.build_layer(layer_z, candidates.into_iter(), &mut anomalies);
            debug!("layer {layer_index:03} z = {layer_z:.4}: {} lines", layer.line_count());
            layers.push(layer);
        }

        self.layers = layers;
        self.anomalies = anomalies;
    }

    /// Slices a single layer starting at `layer_z`, testing every triangle.
    pub fn slice_at(&self, layer_z:f64) -> Layer {
        let mut anomalies = Vec::new();
        self.build_layer(layer_z, 0..self.mesh.triangle_count(), &mut anomalies)
    }

    fn sorted_z_ranges(&self) -> Vec<ZRange> {
        let mut ranges:Vec<ZRange> = self.mesh.triangles().iter()
            .enumerate()
            .map(|(index,tri)| ZRange{ index, min_z:tri.min_z(), max_z:tri.max_z() })
            .collect();
        ranges.sort_by_key(|range| OrderedFloat(range.min_z));
        ranges
    }

    fn build_layer<I>(&self, layer_z:f64, triangle_indices:I, anomalies:&mut Vec<IntersectionAnomaly>) -> Layer
    where I: Iterator<Item = usize>
    {
        let triangles = self.mesh.triangles();
        let mut layer = Layer::new(layer_z);

        for triangle_index in triangle_indices {
            let tri = &triangles[triangle_index];
            match classify(tri, layer_z, self.layer_height) {
                Classification::Contained => {
                    let [v0,v1,v2] = tri.vertices.map(|v| project_xy(&v));
                    layer.lines.push(Line2::new(v0,v1));
                    layer.lines.push(Line2::new(v1,v2));
                    layer.lines.push(Line2::new(v2,v0));
                },
                Classification::Intersecting => {
                    match intersection_segment(&intersection_points(tri, layer_z)) {
                        Ok(line) => layer.lines.push(line),
                        Err(point_count) => {
                            warn!("\x1b[033munexpected number of intersection points: {point_count}\x1b[0m triangle {triangle_index} at z = {layer_z}");
                            anomalies.push(IntersectionAnomaly{
                                layer_z,
                                triangle_index,
                                point_count,
                            });
                        },
                    }
                },
                Classification::Outside => (),
            }
        }
        layer
    }
}
