use nalgebra::{Point3, Vector3};
use nalgebra_glm as glm;

/// Axis Aligned Bounding Box
///
/// An empty box has its min corner at +inf and its max corner at -inf, so the
/// first point folded into it becomes both corners.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct AABB{
    pub min:Point3<f64>,
    pub max:Point3<f64>,
}
impl Default for AABB {
    fn default() -> Self {
        Self::empty()
    }
}
impl AABB {
    pub fn empty() -> Self {
        Self{
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }
    /// true while no point has been folded into the box
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }
    pub fn fold(&mut self, point:&Point3<f64>) {
        self.min = Point3::from(glm::min2(&self.min.coords, &point.coords));
        self.max = Point3::from(glm::max2(&self.max.coords, &point.coords));
    }
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }
    pub fn translate(&mut self, v:&Vector3<f64>) {
        self.min += *v;
        self.max += *v;
    }
    /// Scales both corners about the origin. A negative factor mirrors the box,
    /// the corners are reordered so that min <= max still holds.
    pub fn scale(&mut self, factor:f64) {
        if self.is_empty() { return }
        let a = self.min.coords * factor;
        let b = self.max.coords * factor;
        self.min = Point3::from(glm::min2(&a, &b));
        self.max = Point3::from(glm::max2(&a, &b));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fold_points(){
        let mut aabb = AABB::empty();
        assert!(aabb.is_empty());
        aabb.fold(&Point3::new(1.0, -2.0, 3.0));
        assert_eq!(aabb.min, aabb.max);
        aabb.fold(&Point3::new(-1.0, 4.0, 0.5));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, Point3::new(-1.0, -2.0, 0.5));
        assert_eq!(aabb.max, Point3::new( 1.0,  4.0, 3.0));
        assert_eq!(aabb.extent(), Vector3::new(2.0, 6.0, 2.5));
    }

    #[test]
    fn negative_scale_keeps_min_below_max(){
        let mut aabb = AABB{
            min: Point3::new(0.0, 1.0, 2.0),
            max: Point3::new(1.0, 2.0, 4.0),
        };
        aabb.scale(-2.0);
        assert_eq!(aabb.min, Point3::new(-2.0, -4.0, -8.0));
        assert_eq!(aabb.max, Point3::new( 0.0, -2.0, -4.0));
    }

    #[test]
    fn scaling_an_empty_box_keeps_it_empty(){
        let mut aabb = AABB::empty();
        aabb.scale(0.0);
        assert!(aabb.is_empty());
        assert_eq!(aabb, AABB::empty());
    }
}
