use super::glutils::*;
use gl;
use sdl2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::video::{GLProfile, SwapInterval};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoMode {
    Fixed { w: u32, h: u32 },
    /// Size of the first mode the primary display reports, opened windowed.
    Fullscreen,
}

#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub title: String,
    pub video_mode: VideoMode,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    /// Samples per pixel; 0 disables multisampling.
    pub antialiasing_level: u8,
    pub gl_version: (u8, u8),
    pub resizable: bool,
    pub vsync: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            title: "Modern OpenGL".to_string(),
            video_mode: VideoMode::Fixed { w: 1000, h: 1000 },
            depth_bits: 24,
            stencil_bits: 8,
            antialiasing_level: 0,
            gl_version: (3, 3),
            resizable: true,
            vsync: true,
        }
    }
}

impl SystemConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_video_mode(mut self, video_mode: VideoMode) -> Self {
        self.video_mode = video_mode;
        self
    }

    pub fn with_antialiasing(mut self, level: u8) -> Self {
        self.antialiasing_level = level;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// (multisample buffers, samples) for the GL attributes.
    pub fn multisample(&self) -> (u8, u8) {
        match self.antialiasing_level {
            0 => (0, 0),
            n => (1, n),
        }
    }
}

pub struct System {
    pub w: u32,
    pub h: u32,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    event_pump: sdl2::EventPump,
}

impl System {
    pub fn new(config: &SystemConfig) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);
        gl_attr.set_double_buffer(true);
        gl_attr.set_depth_size(config.depth_bits);
        gl_attr.set_stencil_size(config.stencil_bits);
        let (ms_buffers, ms_samples) = config.multisample();
        gl_attr.set_multisample_buffers(ms_buffers);
        gl_attr.set_multisample_samples(ms_samples);

        let (w, h) = match config.video_mode {
            VideoMode::Fixed { w, h } => (w, h),
            VideoMode::Fullscreen => {
                let mode = video_subsystem.display_mode(0, 0)?;
                (mode.w as u32, mode.h as u32)
            }
        };

        let mut builder = video_subsystem.window(&config.title, w, h);
        builder.opengl().position_centered();
        if config.resizable {
            builder.resizable();
        }
        let window = match builder.build() {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building OpenGL window: {e}")),
        };

        let gl_ctx = window.gl_create_context()?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        if config.vsync {
            if let Err(e) = video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        log::info!(
            "window {}x{} '{}', GL context {:?} (depth {}, stencil {}, msaa {})",
            w,
            h,
            config.title,
            gl_attr.context_version(),
            gl_attr.depth_size(),
            gl_attr.stencil_size(),
            gl_attr.multisample_samples()
        );
        print_opengl_info();

        let event_pump = sdl_context.event_pump()?;

        Ok(System {
            w,
            h,
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            event_pump,
        })
    }

    /// Drains pending window events. Returns `false` once the window was
    /// closed or Escape was pressed.
    pub fn process_io_events(&mut self) -> bool {
        let mut running = true;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => running = false,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } => {
                    log::debug!("window resized to {}x{}", w, h);
                    self.w = w.max(0) as u32;
                    self.h = h.max(0) as u32;
                    unsafe { gl::Viewport(0, 0, w, h) };
                }
                _ => {}
            }
        }
        running
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
    }

    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_modern_opengl_window() {
        let config = SystemConfig::default();
        assert_eq!(config.title, "Modern OpenGL");
        assert_eq!(config.video_mode, VideoMode::Fixed { w: 1000, h: 1000 });
        assert_eq!(config.gl_version, (3, 3));
        assert_eq!((config.depth_bits, config.stencil_bits), (24, 8));
        assert!(config.resizable);
    }

    #[test]
    fn multisample_disabled_without_antialiasing() {
        assert_eq!(SystemConfig::default().multisample(), (0, 0));
    }

    #[test]
    fn multisample_enabled_with_antialiasing() {
        let config = SystemConfig::default().with_antialiasing(2);
        assert_eq!(config.multisample(), (1, 2));
    }

    #[test]
    fn builders_override_fields() {
        let config = SystemConfig::default()
            .with_title("cube")
            .with_video_mode(VideoMode::Fullscreen)
            .with_vsync(false);
        assert_eq!(config.title, "cube");
        assert_eq!(config.video_mode, VideoMode::Fullscreen);
        assert!(!config.vsync);
    }
}
