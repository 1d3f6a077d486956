//! Wavefront-style text export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lucent_types::LucentResult;

use crate::mesh::TriMesh;

/// Writes the mesh in Wavefront OBJ form.
///
/// Emits `o`, `v`, optional `vt`/`vn` lines, then one `f` line per
/// triangle with 1-based indices: `a/a/a` when both normals and
/// texture coordinates are present, `a//a` when only normals are,
/// bare indices otherwise.
pub fn write_obj<W: Write>(mesh: &TriMesh, writer: &mut W) -> LucentResult<()> {
    writeln!(writer, "o {}", mesh.name)?;

    for p in &mesh.positions {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    for uv in &mesh.texcoords {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }

    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    let has_normals = mesh.has_normals();
    let has_texcoords = mesh.has_texcoords();

    for tri in &mesh.triangles {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        if has_normals && has_texcoords {
            writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        } else if has_normals {
            writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
        } else {
            writeln!(writer, "f {a} {b} {c}")?;
        }
    }

    Ok(())
}

/// Writes the mesh in Wavefront OBJ form to a file.
pub fn save_obj<P: AsRef<Path>>(mesh: &TriMesh, path: P) -> LucentResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}
