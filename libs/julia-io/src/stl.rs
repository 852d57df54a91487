//! STL (Stereolithography) export.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use julia_mesh::Mesh;
use julia_types::Point3D;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

const SOLID_NAME: &str = "julia";

/// STL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Save a mesh to an STL file.
///
/// Each facet carries the unit right-hand normal of its triangle, or a zero
/// normal when the triangle is degenerate.
///
/// # Errors
///
/// Returns an error if the file cannot be written, or if the mesh holds more
/// triangles than a binary STL can count.
///
/// # Example
///
/// ```no_run
/// use julia_io::{write_stl, StlFormat};
/// use julia_mesh::grid_extrusion;
/// use julia_types::ScalarField;
///
/// let mesh = grid_extrusion(&ScalarField::filled(4, 4, 128), 10.0).unwrap();
/// write_stl(&mesh, "surface.stl", StlFormat::Binary).unwrap();
/// ```
pub fn write_stl<P: AsRef<Path>>(mesh: &Mesh, path: P, format: StlFormat) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        StlFormat::Binary => write_stl_binary(mesh, &mut writer)?,
        StlFormat::Ascii => write_stl_ascii(mesh, &mut writer)?,
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        ?format,
        triangles = mesh.triangle_count(),
        "wrote STL"
    );
    Ok(())
}

/// Write mesh as binary STL.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> IoResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by julia-io";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let face_count = u32::try_from(mesh.triangle_count()).map_err(|_| {
        IoError::invalid_content(format!(
            "{} triangles exceed the binary STL face count",
            mesh.triangle_count()
        ))
    })?;
    writer.write_all(&face_count.to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        write_vector_binary(writer, mesh.face_normal(index))?;
        for corner in mesh.corners(index) {
            write_vector_binary(writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }
    Ok(())
}

/// Write a vector as three little-endian f32s.
fn write_vector_binary<W: Write>(writer: &mut W, v: Point3D) -> IoResult<()> {
    for component in v.as_vec3().to_array() {
        writer.write_all(&component.to_le_bytes())?;
    }
    Ok(())
}

/// Write mesh as ASCII STL.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "solid {SOLID_NAME}")?;
    for index in 0..mesh.triangle_count() {
        let n = mesh.face_normal(index);
        writeln!(writer, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.corners(index) {
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {SOLID_NAME}")?;
    Ok(())
}
