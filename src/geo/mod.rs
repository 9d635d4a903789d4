pub use nalgebra::{Point2, Point3, Vector3};

mod aabb;
pub use aabb::*;

mod line;
pub use line::*;

mod triangle;
pub use triangle::*;

/// Drops the z-coordinate of a point, projecting it onto the xy-plane.
pub fn project_xy(point:&Point3<f64>) -> Point2<f64> {
    Point2::new(point.x, point.y)
}

/// Linear interpolation in x and y between two points at the height `z`.
/// Returns None if the segment is horizontal.
pub fn edge_zplane_intersection(p1:&Point3<f64>, p2:&Point3<f64>, z:f64) -> Option<Point2<f64>> {
    let dz = p2.z - p1.z;
    if dz == 0.0 { return None }
    let t = (z - p1.z) / dz;
    Some(Point2::new(
        p1.x + t * (p2.x - p1.x),
        p1.y + t * (p2.y - p1.y),
    ))
}

#[test]
fn edge_zplane_intersection_test(){
    let edge_start = Point3::new(0.,0.,0.);
    let edge_end = Point3::new(1.,1.,1.);
    let result = edge_zplane_intersection(&edge_start, &edge_end, 0.5).expect("valid result");
    assert_eq!(Point2::new(0.5,0.5),result);
    let result = edge_zplane_intersection(&edge_end, &edge_start, 0.5).expect("valid result");
    assert_eq!(Point2::new(0.5,0.5),result);
    let flat_end = Point3::new(1.,1.,0.);
    assert_eq!(None,edge_zplane_intersection(&edge_start, &flat_end, 0.0));
}
