use std::cell::Cell;

use log::{debug, info, warn};
use nalgebra::Vector3;

use crate::geo::{Triangle, AABB};

pub mod validate;
pub use validate::{Rejection, Validator, EPSILON};


/// The accepted triangles of a model together with the quantities derived from them.
///
/// Triangles keep the order they were added in. The bounding box only covers
/// accepted triangles while the surface area also includes the area of every
/// rejected triangle, see [`Validator::validate`].
#[derive(Debug,Clone,Default)]
pub struct Mesh{
    triangles:Vec<Triangle>,
    validator:Validator,
    bounding_box:AABB,
    rejected:usize,
    applied_translation:Vector3<f64>,
    volume:Cell<Option<f64>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh by pulling triangles from a source until it is exhausted.
    pub fn from_triangles<I>(source:I) -> Self
    where I: IntoIterator<Item = Triangle>
    {
        let mut mesh = Self::new();
        for triangle in source {
            mesh.add_triangle(triangle);
        }
        info!("mesh loaded: {} triangles accepted, {} rejected", mesh.triangle_count(), mesh.rejected);
        mesh
    }

    /// Validates the triangle and appends it if it is accepted.
    /// Returns the outcome of the validation.
    pub fn add_triangle(&mut self, triangle:Triangle) -> bool {
        if !self.validator.validate(&triangle) {
            self.rejected += 1;
            return false
        }
        triangle.vertices.iter().for_each(|v| self.bounding_box.fold(v));
        self.triangles.push(triangle);
        self.volume.set(None);
        true
    }

    /// Re-derives surface area, bounding box and volume from the stored triangles.
    /// Triangles that no longer pass validation are dropped.
    pub fn recompute_all(&mut self) {
        self.validator.reset();
        self.bounding_box = AABB::empty();
        self.rejected = 0;

        let triangles = std::mem::take(&mut self.triangles);
        for triangle in triangles {
            self.add_triangle(triangle);
        }
        self.volume.set(None);
        let volume = self.volume();
        debug!("recomputed mesh: {} triangles, volume {volume}", self.triangles.len());
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
    /// Direct access to the triangles. Call [`Mesh::recompute_all`] after
    /// changing them, the derived quantities are not kept up to date.
    pub fn triangles_mut(&mut self) -> &mut Vec<Triangle> {
        self.volume.set(None);
        &mut self.triangles
    }
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }
    pub fn surface_area(&self) -> f64 {
        self.validator.surface_area()
    }
    /// Still the empty box (min = +inf, max = -inf) if no triangle was accepted.
    pub fn bounding_box(&self) -> &AABB {
        &self.bounding_box
    }
    /// The sum of all translations applied since the mesh was loaded.
    pub fn applied_translation(&self) -> Vector3<f64> {
        self.applied_translation
    }

    /// Enclosed volume computed with the divergence theorem, summing the signed
    /// volume of the tetrahedron each triangle forms with the origin.
    /// Only meaningful for closed, consistently wound meshes.
    pub fn volume(&self) -> f64 {
        if let Some(volume) = self.volume.get() {
            return volume
        }
        let signed_sum:f64 = self.triangles.iter()
            .map(|tri|{
                let [v0,v1,v2] = tri.vertices;
                (v0.x + v1.x + v2.x) * tri.cross().x
            })
            .sum();
        let volume = signed_sum.abs() / 6.0;
        self.volume.set(Some(volume));
        volume
    }

    pub fn translate(&mut self, v:Vector3<f64>) {
        debug!("translating mesh by ({}, {}, {})", v.x, v.y, v.z);
        self.triangles.iter_mut().for_each(|tri| tri.translate(&v));
        self.bounding_box.translate(&v);
        self.applied_translation += v;
        self.volume.set(None);
    }

    /// Moves the mesh along z so that its lowest point ends up at `z`.
    pub fn set_z_height(&mut self, z:f64) {
        if self.is_empty() {
            warn!("set_z_height called on an empty mesh, nothing to move");
            return
        }
        let dz = z - self.bounding_box.min.z;
        self.translate(Vector3::new(0.0, 0.0, dz));
    }

    /// Scales every vertex about the origin.
    pub fn scale(&mut self, factor:f64) {
        debug!("scaling mesh by {factor}");
        self.triangles.iter_mut().for_each(|tri| tri.scale(factor));
        self.bounding_box.scale(factor);
        self.volume.set(None);
    }
}
