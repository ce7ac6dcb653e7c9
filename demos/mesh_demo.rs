//! Demonstration of mesh emission from an assembled planet

use rust_dem_planet::*;

fn main() -> Result<()> {
    let raster = ElevationRaster::constant(64, 32, 150.0)?;

    let config = PlanetConfigBuilder::new()
        .resolution(32)?
        .displacement(DisplacementPolicy::Physical {
            meters_per_unit: 0.5,
            body_radius_m: 1_737_400.0,
        })
        .build()?;

    let planet = Planet::assemble(config, &raster)?;

    println!("Emitting meshes for {} faces", planet.faces().len());

    let mut total_triangles = 0;
    for face in planet.faces() {
        let mesh = generate_mesh(face);
        total_triangles += mesh.triangle_count();
        println!(
            "  {:?}: {} vertices, {} triangles, {} height attributes",
            face.direction,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.heights.len()
        );
    }
    println!("Total: {} triangles", total_triangles);

    // CPU-displaced variant for engines that skip the height attribute
    let displaced = generate_displaced_mesh(&planet.faces()[0]);
    let p = displaced.positions[0];
    let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
    println!("First displaced vertex sits at radius {:.6}", len);

    Ok(())
}
