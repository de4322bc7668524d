//! Renders the reference scene in all three shading modes and writes one
//! PNG per mode. The image is computed once per mode; redisplaying it is the
//! viewer's job, not ours.

use std::error::Error;

use log::info;
use sphererizer::prelude::*;

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mesh = generate_sphere(32, 16)?;
    info!(
        "scene created: {} vertices, {} triangles",
        mesh.vertices().len(),
        mesh.triangle_count()
    );

    // Unit sphere scaled by 2 and pushed to z = -7, camera at the origin
    // looking down -Z.
    let model = Mat4::translation(0.0, 0.0, -7.0) * Mat4::scaling(2.0, 2.0, 2.0);
    let eye = Vec3::ZERO;
    let view = Mat4::look_at_rh(eye, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
    let projection = Mat4::frustum(-0.1, 0.1, -0.1, 0.1, 0.1, 100.0);

    let material = Material::green_plastic();
    let light = PointLight::white_at(Vec3::new(-4.0, 4.0, -3.0));

    for mode in [ShadingMode::Flat, ShadingMode::Gouraud, ShadingMode::Phong] {
        let fb = render_frame(
            &mesh, model, view, projection, &material, &light, eye, mode, WIDTH, HEIGHT,
        );
        let path = format!("{mode}.png");
        image::save_buffer(
            &path,
            fb.color(),
            fb.width(),
            fb.height(),
            image::ExtendedColorType::Rgb8,
        )?;
        info!("wrote {path}");
    }

    Ok(())
}
