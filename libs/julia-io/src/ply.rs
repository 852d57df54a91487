//! PLY (Polygon File Format) point export and import.
//!
//! Exports are vertex-only ASCII files with exactly this header:
//!
//! ```text
//! ply
//! format ascii 1.0
//! element vertex N
//! property float x
//! property float y
//! property float z
//! end_header
//! ```
//!
//! followed by one line of space-separated `x y z` values per point, at
//! `f32` precision; 2D points are written with `z = 0`. Imports accept any ASCII or binary PLY with a `vertex` element
//! and read its `x`, `y` and optional `z` properties.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use julia_types::{Lift, Point3D, PointCloud};
use ply_rs::parser::Parser;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;
use tracing::{debug, info};

use crate::error::{IoError, IoResult};

/// Save a point cloud as a vertex-only ASCII PLY file.
///
/// # Example
///
/// ```no_run
/// use julia_io::write_ply;
/// use julia_types::{Point2D, PointCloud, PointOrdering};
///
/// let cloud = PointCloud::new(vec![Point2D::new(1.0, 2.0)], PointOrdering::Unordered);
/// write_ply(&cloud, "boundary.ply").unwrap();
/// ```
pub fn write_ply<P: Lift, Q: AsRef<Path>>(cloud: &PointCloud<P>, path: Q) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_ply_ascii(cloud, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), points = cloud.len(), "wrote PLY");
    Ok(())
}

/// Write a point cloud as vertex-only ASCII PLY.
///
/// Coordinates are narrowed to `f32` to match the declared `float`
/// properties.
pub fn write_ply_ascii<P: Lift, W: Write>(cloud: &PointCloud<P>, writer: &mut W) -> IoResult<()> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;

    let mut vertex_def = ElementDef::new("vertex".to_string());
    for axis in ["x", "y", "z"] {
        vertex_def.properties.add(PropertyDef::new(
            axis.to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    vertex_def.count = cloud.len();
    ply.header.elements.add(vertex_def);

    let vertices = cloud
        .iter()
        .map(|&p| {
            let p = p.to_point3();
            let mut element = DefaultElement::new();
            #[allow(clippy::cast_possible_truncation)]
            {
                element.insert("x".to_string(), Property::Float(p.x as f32));
                element.insert("y".to_string(), Property::Float(p.y as f32));
                element.insert("z".to_string(), Property::Float(p.z as f32));
            }
            element
        })
        .collect::<Vec<_>>();
    ply.payload.insert("vertex".to_string(), vertices);

    Writer::new()
        .write_ply(writer, &mut ply)
        .map_err(|e| IoError::invalid_content(format!("failed to write PLY: {e}")))?;
    Ok(())
}

/// Load the vertex positions of a PLY file.
///
/// Files without a `vertex` element yield no points.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`IoError::FileNotFound`])
/// - The file is not valid PLY
/// - A vertex lacks a numeric `x` or `y` property
pub fn read_ply_points<P: AsRef<Path>>(path: P) -> IoResult<Vec<Point3D>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::on_open(path, e))?;
    let mut reader = BufReader::new(file);

    let parser = Parser::<DefaultElement>::new();
    let header = parser
        .read_header(&mut reader)
        .map_err(|e| IoError::invalid_content(format!("failed to parse PLY header: {e}")))?;
    let payload = parser
        .read_payload(&mut reader, &header)
        .map_err(|e| IoError::invalid_content(format!("failed to read PLY payload: {e}")))?;

    let Some(vertices) = payload.get("vertex") else {
        debug!(path = %path.display(), "PLY has no vertex element");
        return Ok(Vec::new());
    };
    let points = vertices
        .iter()
        .enumerate()
        .map(|(i, element)| -> IoResult<Point3D> {
            let coordinate = |key: &str| {
                scalar_property(element, key).ok_or_else(|| {
                    IoError::invalid_content(format!("vertex {i} has no numeric '{key}' property"))
                })
            };
            let x = coordinate("x")?;
            let y = coordinate("y")?;
            let z = scalar_property(element, "z").unwrap_or(0.0);
            Ok(Point3D::new(x, y, z))
        })
        .collect::<IoResult<Vec<_>>>()?;

    info!(path = %path.display(), points = points.len(), "read PLY");
    Ok(points)
}

/// Extract a scalar property from a PLY element as f64.
fn scalar_property(element: &DefaultElement, key: &str) -> Option<f64> {
    match element.get(key)? {
        Property::Char(v) => Some(f64::from(*v)),
        Property::UChar(v) => Some(f64::from(*v)),
        Property::Short(v) => Some(f64::from(*v)),
        Property::UShort(v) => Some(f64::from(*v)),
        Property::Int(v) => Some(f64::from(*v)),
        Property::UInt(v) => Some(f64::from(*v)),
        Property::Float(v) => Some(f64::from(*v)),
        Property::Double(v) => Some(*v),
        _ => None,
    }
}
