use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use log::warn;

use crate::error::{Result, SliceError};
use crate::geo::Triangle;
use crate::mesh::Mesh;

/// Turns stl records into triangles. The sequence ends at the first record
/// that could not be read, everything after it is ignored.
pub fn read_triangles<I>(records:I) -> impl Iterator<Item = Triangle>
where I: IntoIterator<Item = io::Result<stl_io::Triangle>>
{
    records.into_iter()
        .map_while(|record| match record {
            Ok(tri) => Some(Triangle::from(tri)),
            Err(error) => {
                warn!("\x1b[033mstopped reading at a malformed triangle:\x1b[0m {error}");
                None
            },
        })
}

/// Reads an ascii or binary stl and validates every triangle into a new mesh.
pub fn load_mesh<R:Read + Seek>(reader:&mut R) -> io::Result<Mesh> {
    let records = stl_io::create_stl_reader(reader)?;
    Ok(Mesh::from_triangles(read_triangles(records)))
}

pub fn load_mesh_from_file<P:AsRef<Path>>(path:P) -> Result<Mesh> {
    let path = path.as_ref();
    let io_error = |source| SliceError::Io{ path:path.to_path_buf(), source };

    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::new(file);
    load_mesh(&mut reader).map_err(io_error)
}
