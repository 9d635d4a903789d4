use log::debug;
use thiserror::Error;

use crate::geo::Triangle;

/// floating point comparison epsilon used for all triangle checks
pub const EPSILON:f64 = 1e-6;

/// Why a triangle was kept out of the mesh.
#[derive(Debug,Clone,Copy,PartialEq,Error)]
pub enum Rejection {
    #[error("degenerate triangle: area {area:e} is below epsilon")]
    Degenerate{area:f64},
    #[error("normal is not a unit vector: length {length}")]
    NonUnitNormal{length:f64},
    #[error("normal is not perpendicular to the triangle plane: |dot| = {dot}")]
    MisalignedNormal{dot:f64},
}

/// Checks triangles for geometric well-formedness and keeps the running
/// surface area of every triangle it has seen, rejected ones included.
#[derive(Debug,Clone,Default)]
pub struct Validator{
    surface_area:f64,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }
    pub fn reset(&mut self) {
        self.surface_area = 0.0;
    }

    /// Returns true if the triangle may enter the mesh.
    /// The triangle's area is added to the surface area regardless of the outcome.
    pub fn validate(&mut self, triangle:&Triangle) -> bool {
        let (area,verdict) = Self::check(triangle);
        self.surface_area += area;
        match verdict {
            Ok(()) => true,
            Err(rejection) => {
                debug!("rejected triangle {:?}: {rejection}", triangle.vertices);
                false
            }
        }
    }

    /// The area of the triangle together with the outcome of the checks.
    pub fn check(triangle:&Triangle) -> (f64, Result<(),Rejection>) {
        let cross = triangle.cross();
        let area = 0.5 * cross.norm();
        // written as negated comparisons so that NaN is rejected as well
        if !(area >= EPSILON) {
            return (area, Err(Rejection::Degenerate{area}))
        }

        let length = triangle.normal.norm();
        if !((length - 1.0).abs() <= EPSILON) {
            return (area, Err(Rejection::NonUnitNormal{length}))
        }

        // either winding is accepted
        let unit_cross = cross / (2.0 * area);
        let dot = unit_cross.dot(&triangle.normal).abs();
        if !((dot - 1.0).abs() <= EPSILON) {
            return (area, Err(Rejection::MisalignedNormal{dot}))
        }
        (area, Ok(()))
    }
}
