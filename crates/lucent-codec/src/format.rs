//! The versioned binary mesh format.
//!
//! Two on-disk families, both little-endian:
//!
//! - **Standalone**: 2-byte magic `0x041C`, 2-byte version (3 or 4),
//!   then a zlib-compressed body: flags, version-4 name, vertex and
//!   triangle counts (u64), attribute arrays, triangle indices.
//!   Several standalone segments may share one file; a trailer of
//!   absolute segment offsets plus a segment count enables random
//!   access.
//! - **Embedded**: the same flags/counts/arrays layout nested inside a
//!   larger archive's object stream — no header, no compression, no
//!   name.
//!
//! Writers emit their build's native float width and stamp the
//! matching precision flag; readers convert element-wise when the
//! file's width differs from their own.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use lucent_math::{Aabb, Vec2, Vec3};
use lucent_mesh::TriMesh;
use lucent_types::precision::DOUBLE_PRECISION;
use lucent_types::{Float, LucentError, LucentResult};
use serde::Serialize;

use crate::stream::{BinaryStream, ByteOrder};

/// Magic bytes of a standalone mesh file.
pub const FILE_MAGIC: u16 = 0x041C;
/// The same magic as written by byte-swapped legacy exporters.
pub const LEGACY_MAGIC: u16 = 0x1C04;
/// Oldest supported format version.
pub const VERSION_V3: u16 = 0x0003;
/// Current format version; the only one writers produce.
pub const VERSION_V4: u16 = 0x0004;

/// Flags identifying the data present in a serialized mesh.
pub mod flags {
    pub const HAS_NORMALS: u32 = 0x0001;
    pub const HAS_TEXCOORDS: u32 = 0x0002;
    /// Reserved; never produced by the writer.
    pub const HAS_TANGENTS: u32 = 0x0004;
    pub const HAS_COLORS: u32 = 0x0008;
    pub const FACE_NORMALS: u32 = 0x0010;
    pub const SINGLE_PRECISION: u32 = 0x1000;
    pub const DOUBLE_PRECISION: u32 = 0x2000;
}

fn attribute_flags(mesh: &TriMesh) -> u32 {
    let mut value = 0u32;
    if mesh.has_normals() {
        value |= flags::HAS_NORMALS;
    }
    if mesh.has_texcoords() {
        value |= flags::HAS_TEXCOORDS;
    }
    if mesh.has_colors() {
        value |= flags::HAS_COLORS;
    }
    if mesh.face_normals {
        value |= flags::FACE_NORMALS;
    }
    value
}

fn precision_flag() -> u32 {
    if DOUBLE_PRECISION {
        flags::DOUBLE_PRECISION
    } else {
        flags::SINGLE_PRECISION
    }
}

fn require_little_endian<S>(stream: &BinaryStream<S>) -> LucentResult<()> {
    if stream.byte_order() != ByteOrder::LittleEndian {
        return Err(LucentError::Format(
            "mesh serialization requires a little-endian stream".into(),
        ));
    }
    Ok(())
}

// ─── Array helpers ────────────────────────────────────────────

fn flatten_vec3(values: &[Vec3]) -> Vec<Float> {
    values.iter().flat_map(|v| [v.x, v.y, v.z]).collect()
}

fn flatten_vec2(values: &[Vec2]) -> Vec<Float> {
    values.iter().flat_map(|v| [v.x, v.y]).collect()
}

/// Reads a float array at the file's width, converting element-wise
/// through an intermediate buffer when it differs from the build's.
fn read_float_array<R: Read>(
    stream: &mut BinaryStream<R>,
    file_double: bool,
    count: usize,
) -> LucentResult<Vec<Float>> {
    if file_double {
        let temp = stream.read_f64_array(count)?;
        Ok(temp.into_iter().map(|v| v as Float).collect())
    } else {
        stream.read_f32_array(count)
    }
}

fn read_vec3_array<R: Read>(
    stream: &mut BinaryStream<R>,
    file_double: bool,
    count: usize,
) -> LucentResult<Vec<Vec3>> {
    let floats = read_float_array(stream, file_double, count * 3)?;
    Ok(floats
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

fn read_vec2_array<R: Read>(
    stream: &mut BinaryStream<R>,
    file_double: bool,
    count: usize,
) -> LucentResult<Vec<Vec2>> {
    let floats = read_float_array(stream, file_double, count * 2)?;
    Ok(floats.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect())
}

fn read_triangles<R: Read>(
    stream: &mut BinaryStream<R>,
    count: usize,
) -> LucentResult<Vec<[u32; 3]>> {
    let indices = stream.read_u32_array(count * 3)?;
    Ok(indices
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect())
}

// ─── Body serialization (shared by both families) ─────────────

fn write_body<W: Write>(
    mesh: &TriMesh,
    stream: &mut BinaryStream<W>,
    with_name: bool,
) -> LucentResult<()> {
    stream.write_u32(attribute_flags(mesh) | precision_flag())?;
    if with_name {
        stream.write_string(&mesh.name)?;
    }
    stream.write_u64(mesh.vertex_count() as u64)?;
    stream.write_u64(mesh.triangle_count() as u64)?;

    stream.write_f32_array(&flatten_vec3(&mesh.positions))?;
    if mesh.has_normals() {
        stream.write_f32_array(&flatten_vec3(&mesh.normals))?;
    }
    if mesh.has_texcoords() {
        stream.write_f32_array(&flatten_vec2(&mesh.texcoords))?;
    }
    if mesh.has_colors() {
        stream.write_f32_array(&flatten_vec3(&mesh.colors))?;
    }

    let indices: Vec<u32> = mesh.triangles.iter().flatten().copied().collect();
    stream.write_u32_array(&indices)?;
    Ok(())
}

fn read_body<R: Read>(stream: &mut BinaryStream<R>, with_name: bool) -> LucentResult<TriMesh> {
    let file_flags = stream.read_u32()?;
    let name = if with_name {
        stream.read_string()?
    } else {
        String::new()
    };
    let vertex_count = stream.read_u64()? as usize;
    let triangle_count = stream.read_u64()? as usize;

    let file_double = file_flags & flags::DOUBLE_PRECISION != 0;

    let mut mesh = TriMesh::new(name);
    mesh.face_normals = file_flags & flags::FACE_NORMALS != 0;

    mesh.positions = read_vec3_array(stream, file_double, vertex_count)?;
    if file_flags & flags::HAS_NORMALS != 0 {
        mesh.normals = read_vec3_array(stream, file_double, vertex_count)?;
    }
    if file_flags & flags::HAS_TEXCOORDS != 0 {
        mesh.texcoords = read_vec2_array(stream, file_double, vertex_count)?;
    }
    if file_flags & flags::HAS_COLORS != 0 {
        mesh.colors = read_vec3_array(stream, file_double, vertex_count)?;
    }
    mesh.triangles = read_triangles(stream, triangle_count)?;

    Ok(mesh)
}

// ─── Standalone (compressed) family ───────────────────────────

/// Writes one standalone compressed mesh segment at the current
/// position: magic, version 4, zlib body.
pub fn save_compressed<W: Write>(mesh: &TriMesh, stream: &mut BinaryStream<W>) -> LucentResult<()> {
    require_little_endian(stream)?;

    stream.write_u16(FILE_MAGIC)?;
    stream.write_u16(VERSION_V4)?;

    let mut body = stream.zlib_writer();
    write_body(mesh, &mut body, true)?;
    body.finish()?;
    Ok(())
}

/// Reads mesh segment `index` from a standalone file.
///
/// Index 0 reads from the current position. A non-zero index consults
/// the archive trailer: the segment count lives in the file's last four
/// bytes, preceded by one absolute offset per segment (u64 for version
/// 4 files, u32 for version 3).
pub fn load_compressed<R: Read + Seek>(
    stream: &mut BinaryStream<R>,
    index: usize,
) -> LucentResult<TriMesh> {
    require_little_endian(stream)?;

    let magic = stream.read_u16()?;
    if magic == LEGACY_MAGIC {
        return Err(LucentError::Format(
            "encountered a geometry file generated by an old exporter; \
             please re-export the scene to update this file to the current format"
                .into(),
        ));
    }
    if magic != FILE_MAGIC {
        return Err(LucentError::Format(format!(
            "encountered an invalid mesh file (magic 0x{magic:04X})"
        )));
    }

    let version = stream.read_u16()?;
    if version != VERSION_V3 && version != VERSION_V4 {
        return Err(LucentError::Format(format!(
            "encountered an incompatible mesh file version ({version})"
        )));
    }

    if index != 0 {
        let size = stream.size()?;

        // The segment count is stored in the last four bytes.
        stream.seek(size - 4)?;
        let count = stream.read_u32()? as usize;
        if index >= count {
            return Err(LucentError::SegmentOutOfRange { index, count });
        }

        // Offsets precede the count, one per segment.
        let offset = if version == VERSION_V4 {
            stream.seek(size - 8 * (count - index) as u64 - 4)?;
            stream.read_u64()?
        } else {
            stream.seek(size - 4 * (count - index) as u64 - 4)?;
            u64::from(stream.read_u32()?)
        };

        // Position on the segment and skip its two header shorts.
        stream.seek(offset)?;
        stream.skip(4)?;
    }

    let mut body = stream.zlib_view();
    let mut mesh = read_body(&mut body, version == VERSION_V4)?;
    mesh.flip_normals = false;

    tracing::debug!(
        mesh = %mesh.name,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        version,
        "loaded compressed mesh segment"
    );
    Ok(mesh)
}

/// Writes several meshes as one archive: each segment in standalone
/// form, then the version-4 offset trailer.
pub fn save_archive<W: Write + Seek>(
    meshes: &[TriMesh],
    stream: &mut BinaryStream<W>,
) -> LucentResult<()> {
    require_little_endian(stream)?;

    let mut offsets = Vec::with_capacity(meshes.len());
    for mesh in meshes {
        offsets.push(stream.position()?);
        save_compressed(mesh, stream)?;
    }

    for &offset in &offsets {
        stream.write_u64(offset)?;
    }
    stream.write_u32(offsets.len() as u32)?;
    Ok(())
}

// ─── Embedded family ──────────────────────────────────────────

/// Writes the mesh in embedded form: flags, counts, and raw arrays at
/// the native float width. No header, no compression, no name.
pub fn save_embedded<W: Write>(mesh: &TriMesh, stream: &mut BinaryStream<W>) -> LucentResult<()> {
    require_little_endian(stream)?;
    write_body(mesh, stream, false)
}

/// Reads a mesh in embedded form from the current position.
pub fn load_embedded<R: Read>(stream: &mut BinaryStream<R>) -> LucentResult<TriMesh> {
    require_little_endian(stream)?;
    let mut mesh = read_body(stream, false)?;
    mesh.flip_normals = false;
    Ok(mesh)
}

// ─── File conveniences ────────────────────────────────────────

/// Loads segment `index` of a standalone mesh file.
pub fn load_mesh_file<P: AsRef<Path>>(path: P, index: usize) -> LucentResult<TriMesh> {
    let file = File::open(path)?;
    let mut stream = BinaryStream::new(BufReader::new(file));
    load_compressed(&mut stream, index)
}

/// Saves a mesh as a single-segment standalone file.
pub fn save_mesh_file<P: AsRef<Path>>(mesh: &TriMesh, path: P) -> LucentResult<()> {
    let file = File::create(path)?;
    let mut stream = BinaryStream::new(BufWriter::new(file));
    save_compressed(mesh, &mut stream)?;
    stream.flush()
}

// ─── Tool-facing summary ──────────────────────────────────────

/// A serializable snapshot of a mesh's headline properties.
#[derive(Debug, Clone, Serialize)]
pub struct MeshInfo {
    pub name: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub has_normals: bool,
    pub has_texcoords: bool,
    pub has_colors: bool,
    pub has_tangents: bool,
    pub face_normals: bool,
    pub aabb: Aabb,
    /// Total surface area; `None` for an empty mesh.
    pub surface_area: Option<Float>,
}

impl MeshInfo {
    /// Captures a summary of `mesh`, building its sampling state if
    /// the mesh has any triangles.
    pub fn capture(mesh: &TriMesh) -> Self {
        Self {
            name: mesh.name.clone(),
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            has_normals: mesh.has_normals(),
            has_texcoords: mesh.has_texcoords(),
            has_colors: mesh.has_colors(),
            has_tangents: mesh.has_tangents(),
            face_normals: mesh.face_normals,
            aabb: mesh.aabb,
            surface_area: mesh.surface_area().ok(),
        }
    }
}
