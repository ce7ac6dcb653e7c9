//! Demonstration of planet assembly and height statistics

use rust_dem_planet::*;

fn main() -> Result<()> {
    println!("Assembling planet...");

    // A real application installs a DEM loaded by an external decoder; a
    // graded fake raster stands in here.
    let width = 360u32;
    let height = 180u32;
    let samples: Vec<f64> = (0..height)
        .flat_map(|row| (0..width).map(move |col| ((row + col) % 255) as f64))
        .collect();

    let mut handle = RasterHandle::empty();
    handle.install(ElevationRaster::new(width, height, samples)?);

    let config = PlanetConfigBuilder::new()
        .face_resolution(FaceResolution::Preview)?
        .displacement(DisplacementPolicy::Simple { scale: 4.0e-6 })
        .build()?;

    let planet = Planet::assemble(config, &handle)?;

    println!("Resolution: {} x {} per face", planet.resolution(), planet.resolution());
    println!("Total vertices: {}", planet.vertex_count());

    let (min, max) = planet.height_range();
    println!("Global height range: [{:.6}, {:.6}]", min, max);

    println!("\nPer-face maximum heights:");
    for face in planet.faces() {
        println!(
            "  {:?}: {} vertices, max height {:.6}",
            face.direction,
            face.vertex_count(),
            face.max_height()
        );
    }

    Ok(())
}
