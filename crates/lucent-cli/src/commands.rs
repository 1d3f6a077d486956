//! CLI command implementations.

use lucent_codec::{load_mesh_file, MeshInfo};
use lucent_mesh::obj::save_obj;

/// Print a mesh summary.
pub fn info(path: &str, index: usize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = load_mesh_file(path, index)?;
    mesh.configure(None)?;
    let info = MeshInfo::capture(&mesh);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let name = if info.name.is_empty() {
        "<unnamed>"
    } else {
        info.name.as_str()
    };
    println!("Lucent Mesh Info");
    println!("────────────────");
    println!("Name:          {name}");
    println!("Vertices:      {}", info.vertex_count);
    println!("Triangles:     {}", info.triangle_count);
    println!("Normals:       {}", info.has_normals);
    println!("Texcoords:     {}", info.has_texcoords);
    println!("Colors:        {}", info.has_colors);
    println!("Face normals:  {}", info.face_normals);
    if let Some(area) = info.surface_area {
        println!("Surface area:  {area:.6}");
    }
    println!(
        "Bounds:        [{:.4}, {:.4}, {:.4}] – [{:.4}, {:.4}, {:.4}]",
        info.aabb.min.x, info.aabb.min.y, info.aabb.min.z,
        info.aabb.max.x, info.aabb.max.y, info.aabb.max.z,
    );

    Ok(())
}

/// Export a serialized mesh as OBJ.
pub fn export(path: &str, output: &str, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = load_mesh_file(path, index)?;
    mesh.configure(None)?;
    save_obj(&mesh, output)?;
    println!(
        "Exported {} vertices, {} triangles to {output}",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

/// Load a mesh and run integrity checks.
pub fn validate(path: &str, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("Lucent Validator");
    println!("────────────────");

    let mesh = load_mesh_file(path, index)?;
    match mesh.validate() {
        Ok(()) => {
            println!(
                "✅ Mesh is valid ({} verts, {} tris).",
                mesh.vertex_count(),
                mesh.triangle_count()
            );
            Ok(())
        }
        Err(e) => {
            println!("❌ Mesh validation failed: {e}");
            Err(e.into())
        }
    }
}
