use nalgebra::Point2;

/// A 2d line segment on a layer plane.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Line2{
    pub start:Point2<f64>,
    pub end:Point2<f64>,
}

impl Line2 {
    pub fn new(start:Point2<f64>, end:Point2<f64>) -> Self {
        Self{ start, end }
    }
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

impl From<[Point2<f64>;2]> for Line2 {
    fn from([start,end]:[Point2<f64>;2]) -> Self {
        Self{ start, end }
    }
}
