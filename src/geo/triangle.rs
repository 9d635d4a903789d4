use nalgebra::{Point3, Vector3};

/// A mesh facet as read from the mesh source: the supplied normal and three
/// vertices. Nothing about the normal or the vertices is checked on construction.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Triangle{
    pub normal:Vector3<f64>,
    pub vertices:[Point3<f64>;3],
}

impl Triangle {
    pub fn new(normal:Vector3<f64>, vertices:[Point3<f64>;3]) -> Self {
        Self{ normal, vertices }
    }
    /// (v1 - v0) x (v2 - v0)
    pub fn cross(&self) -> Vector3<f64> {
        let [v0,v1,v2] = self.vertices;
        (v1 - v0).cross(&(v2 - v0))
    }
    pub fn area(&self) -> f64 {
        0.5 * self.cross().norm()
    }
    pub fn min_z(&self) -> f64 {
        self.vertices.iter().map(|v| v.z).fold(f64::INFINITY, f64::min)
    }
    pub fn max_z(&self) -> f64 {
        self.vertices.iter().map(|v| v.z).fold(f64::NEG_INFINITY, f64::max)
    }
    /// The edges v0-v1, v1-v2 and v2-v0 in winding order.
    pub fn edges<'a>(&'a self) -> impl Iterator<Item = (&'a Point3<f64>,&'a Point3<f64>)> {
        let [v0,v1,v2] = &self.vertices;
        [(v0,v1),(v1,v2),(v2,v0)].into_iter()
    }
    pub fn translate(&mut self, v:&Vector3<f64>) {
        self.vertices.iter_mut().for_each(|p| *p += *v);
    }
    pub fn scale(&mut self, factor:f64) {
        self.vertices.iter_mut().for_each(|p| *p = Point3::from(p.coords * factor));
    }
}

/// stl_io stores single precision values, they are widened here
impl From<stl_io::Triangle> for Triangle {
    fn from(tri:stl_io::Triangle) -> Self {
        let to_vec = |v:&stl_io::Vector<f32>| Vector3::new(v[0] as f64, v[1] as f64, v[2] as f64);
        let to_point = |v:&stl_io::Vector<f32>| Point3::from(to_vec(v));
        Self{
            normal: to_vec(&tri.normal),
            vertices: [
                to_point(&tri.vertices[0]),
                to_point(&tri.vertices[1]),
                to_point(&tri.vertices[2]),
            ],
        }
    }
}

impl From<&Triangle> for stl_io::Triangle {
    fn from(tri:&Triangle) -> Self {
        let to_stl = |v:&Vector3<f64>| stl_io::Vector::new([v.x as f32, v.y as f32, v.z as f32]);
        stl_io::Triangle{
            normal: to_stl(&tri.normal),
            vertices: [
                to_stl(&tri.vertices[0].coords),
                to_stl(&tri.vertices[1].coords),
                to_stl(&tri.vertices[2].coords),
            ],
        }
    }
}

#[test]
fn cross_and_area(){
    let tri = Triangle::new(
        Vector3::new(0.0,0.0,1.0),
        [Point3::new(0.0,0.0,0.0), Point3::new(2.0,0.0,0.0), Point3::new(0.0,2.0,0.0)],
    );
    assert_eq!(tri.cross(), Vector3::new(0.0,0.0,4.0));
    assert_eq!(tri.area(), 2.0);
    assert_eq!(tri.edges().count(), 3);
}

#[test]
fn z_range(){
    let tri = Triangle::new(
        Vector3::new(0.0,-1.0,0.0),
        [Point3::new(0.0,0.0,0.5), Point3::new(1.0,0.0,-1.0), Point3::new(0.0,0.0,2.0)],
    );
    assert_eq!(tri.min_z(), -1.0);
    assert_eq!(tri.max_z(), 2.0);
}
