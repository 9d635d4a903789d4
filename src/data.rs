//! test fixtures
use nalgebra::{Point3, Vector3};

use crate::geo::Triangle;

/// corner indices and outward normal of the 12 facets of a cube
const CUBE_FACETS:[([usize;3],[f64;3]);12] = [
    ([0,2,1],[ 0.0, 0.0,-1.0]), // bottom
    ([0,3,2],[ 0.0, 0.0,-1.0]),
    ([4,5,6],[ 0.0, 0.0, 1.0]), // top
    ([4,6,7],[ 0.0, 0.0, 1.0]),
    ([0,1,5],[ 0.0,-1.0, 0.0]), // front
    ([0,5,4],[ 0.0,-1.0, 0.0]),
    ([2,3,7],[ 0.0, 1.0, 0.0]), // back
    ([2,7,6],[ 0.0, 1.0, 0.0]),
    ([0,4,7],[-1.0, 0.0, 0.0]), // left
    ([0,7,3],[-1.0, 0.0, 0.0]),
    ([1,2,6],[ 1.0, 0.0, 0.0]), // right
    ([1,6,5],[ 1.0, 0.0, 0.0]),
];

/// Closed, consistently wound cube with its min corner at `origin`.
pub fn cube(origin:Point3<f64>, side:f64) -> Vec<Triangle> {
    let corners:Vec<Point3<f64>> = [
        [0.,0.,0.], [1.,0.,0.], [1.,1.,0.], [0.,1.,0.],
        [0.,0.,1.], [1.,0.,1.], [1.,1.,1.], [0.,1.,1.],
    ].into_iter()
        .map(|[x,y,z]| origin + Vector3::new(x,y,z) * side)
        .collect();

    CUBE_FACETS.iter()
        .map(|([a,b,c],[nx,ny,nz])| Triangle::new(
            Vector3::new(*nx,*ny,*nz),
            [corners[*a], corners[*b], corners[*c]],
        ))
        .collect()
}

pub fn unit_cube() -> Vec<Triangle> {
    cube(Point3::origin(), 1.0)
}

/// A valid triangle with vertices at z = 0, 0 and 2, standing in the xz-plane.
pub fn standing_triangle() -> Triangle {
    Triangle::new(Vector3::new(0.0,-1.0,0.0), [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 2.0),
    ])
}

/// A valid horizontal triangle at height `z`.
pub fn flat_triangle(z:f64) -> Triangle {
    Triangle::new(Vector3::new(0.0,0.0,1.0), [
        Point3::new(0.0, 0.0, z),
        Point3::new(1.0, 0.0, z),
        Point3::new(0.0, 1.0, z),
    ])
}
