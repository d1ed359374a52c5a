//! Wireframe cube drawn through an explicit shader program.
//!
//! `shaders/no_transform.vert` passes local coordinates through as clip-space
//! coordinates, `shaders/uniform_color.frag` paints every fragment with the
//! `color` uniform. The red channel ramps up with the frame count.

use anyhow::{anyhow, Context, Result};
use backend::glutils::gl_wireframe;
use backend::logging::init_logging;
use backend::math::Vec3;
use backend::mesh;
use backend::report::finish;
use backend::shaders::ShaderProgram;
use backend::system::{System, SystemConfig};
use backend::time::FrameClock;
use std::process::ExitCode;

const VERTEX_SHADER: &str = "shaders/no_transform.vert";
const FRAGMENT_SHADER: &str = "shaders/uniform_color.frag";

/// Frames until the red channel reaches 1.0.
const RAMP_FRAMES: f32 = 10000.0;

fn uniform_color_shader() -> Result<ShaderProgram> {
    let program = ShaderProgram::from_files(VERTEX_SHADER, FRAGMENT_SHADER)
        .context("loading uniform color shader")?;
    program.use_program();
    Ok(program)
}

fn ramp_color(frame: u64) -> Vec3 {
    Vec3::new(frame as f32 / RAMP_FRAMES, 0.0, 0.0)
}

fn run() -> Result<()> {
    let config = SystemConfig::default().with_antialiasing(2);
    let mut system =
        System::new(&config).map_err(|msg| anyhow!("window initialization failure: {msg}"))?;

    gl_wireframe(true);

    let obj = mesh::cube();
    let program = uniform_color_shader()?;
    program.set_uniform("color", Vec3::new(1.0, 0.0, 1.0));

    let mut clock = FrameClock::new();
    while system.process_io_events() {
        let ft = clock.tick();
        log::trace!("{:.1} FPS", ft.fps());

        program.use_program();
        program.set_uniform("color", ramp_color(ft.frame_index));

        system.clear_screen(0.0, 0.0, 0.0);
        obj.draw();
        system.draw_to_screen();
    }

    log::info!("window closed after {} frames", clock.frame_index());
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    finish(run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::report::error_report;

    #[test]
    fn ramp_starts_black_and_reaches_full_red() {
        assert_eq!(ramp_color(0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(ramp_color(5000), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(ramp_color(10000).x, 1.0);
    }

    #[test]
    fn missing_shader_file_fails_before_touching_gl() {
        let err = ShaderProgram::from_files("nowhere/no_transform.vert", FRAGMENT_SHADER)
            .context("loading uniform color shader")
            .unwrap_err();
        assert!(error_report(&err).contains("error reading nowhere/no_transform.vert"));
    }

    #[test]
    fn shader_sources_ship_with_the_demo() {
        let root = concat!(env!("CARGO_MANIFEST_DIR"), "/../");
        let vert = std::fs::read_to_string(format!("{root}{VERTEX_SHADER}")).unwrap();
        let frag = std::fs::read_to_string(format!("{root}{FRAGMENT_SHADER}")).unwrap();
        assert!(vert.starts_with("#version 330 core"));
        assert!(frag.contains("uniform vec3 color;"));
    }
}
