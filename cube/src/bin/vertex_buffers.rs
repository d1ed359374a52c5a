//! Wireframe cube uploaded to vertex/element buffers and drawn without any
//! transformation: positions are already in clip space, (-1, -1) is the
//! bottom left corner of the screen and (1, 1) the top right.

use anyhow::{anyhow, Result};
use backend::glutils::gl_wireframe;
use backend::logging::init_logging;
use backend::report::finish;
use backend::mesh;
use backend::system::{System, SystemConfig, VideoMode};
use backend::time::FrameClock;
use std::process::ExitCode;

fn run() -> Result<()> {
    let config = SystemConfig::default().with_video_mode(VideoMode::Fullscreen);
    let mut system =
        System::new(&config).map_err(|msg| anyhow!("window initialization failure: {msg}"))?;

    gl_wireframe(true);

    let obj = mesh::cube();

    let mut clock = FrameClock::new();
    while system.process_io_events() {
        let ft = clock.tick();
        log::trace!("{:.1} FPS", ft.fps());

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
