use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use glow::HasContext;
use sdl2::image::InitFlag;
use sdl2::video::{GLProfile, SwapInterval};

use crate::input::{platform, InputEvent, Keyboard, Mouse};
use crate::paint::Color;
use crate::time::FpsCounter;

use super::config::WindowConfig;
use super::events::{FrameEvent, FrameEvents};

/// Platform window with a GL 3.3 core context.
///
/// Exclusively owns the SDL subsystems, the keyboard/mouse state holders, the
/// per-frame event log, and the glow context handed to shapes. The whole
/// object graph must be driven from the thread holding the GL context.
pub struct Window {
    title: String,
    width: u32,
    height: u32,
    open: bool,

    keyboard: Keyboard,
    mouse: Mouse,
    frame_events: FrameEvents,
    fps: FpsCounter,

    // Platform stack. Field order is drop order: the pump and GL context go
    // before the window, the window before the subsystems.
    event_pump: sdl2::EventPump,
    gl: Rc<glow::Context>,
    _gl_context: sdl2::video::GLContext,
    window: sdl2::video::Window,
    _image: sdl2::image::Sdl2ImageContext,
    _ttf: sdl2::ttf::Sdl2TtfContext,
    _audio: sdl2::AudioSubsystem,
    _video: sdl2::VideoSubsystem,
    sdl: sdl2::Sdl,
}

impl Window {
    /// Initializes the platform subsystems, creates the window and GL
    /// context, and configures the initial GL state.
    ///
    /// Subsystem, window, context, and function-loading failures abort
    /// construction; no partially-initialized window is ever returned.
    /// A failed vsync request is logged and tolerated.
    pub fn new(config: WindowConfig) -> Result<Self> {
        let WindowConfig { title, width, height, vsync, debug_info } = config;

        // Subsystems, in acquisition order.
        let sdl = sdl2::init()
            .map_err(Error::msg)
            .context("failed to init SDL")?;
        let video = sdl
            .video()
            .map_err(Error::msg)
            .context("failed to init video subsystem")?;
        let audio = sdl
            .audio()
            .map_err(Error::msg)
            .context("failed to init audio subsystem")?;
        let ttf = sdl2::ttf::init().context("failed to init font subsystem")?;
        let image = sdl2::image::init(InitFlag::PNG | InitFlag::JPG)
            .map_err(Error::msg)
            .context("failed to init image subsystem")?;

        // Context attributes must be set before the window exists.
        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video
            .window(&title, width, height)
            .opengl()
            .position_centered()
            .build()
            .context("failed to create window")?;

        let gl_context = window
            .gl_create_context()
            .map_err(Error::msg)
            .context("failed to create GL context")?;

        if vsync {
            if let Err(e) = video.gl_set_swap_interval(SwapInterval::VSync) {
                log::warn!("failed to enable vsync: {e}");
            }
        }

        anyhow::ensure!(
            !video.gl_get_proc_address("glCreateProgram").is_null(),
            "failed to load GL function pointers"
        );
        let gl = Rc::new(unsafe {
            glow::Context::from_loader_function(|s| video.gl_get_proc_address(s) as *const _)
        });

        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);

            // Non-premultiplied alpha.
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            gl.enable(glow::DEPTH_TEST);
        }

        if debug_info {
            unsafe {
                log::info!("GL version: {}", gl.get_parameter_string(glow::VERSION));
                log::info!("GL vendor: {}", gl.get_parameter_string(glow::VENDOR));
                log::info!("GL renderer: {}", gl.get_parameter_string(glow::RENDERER));
            }
            log::info!("viewport: {width}x{height}");
        }

        let event_pump = sdl
            .event_pump()
            .map_err(Error::msg)
            .context("failed to create event pump")?;

        Ok(Self {
            title,
            width,
            height,
            open: true,
            keyboard: Keyboard::default(),
            mouse: Mouse::default(),
            frame_events: FrameEvents::default(),
            fps: FpsCounter::new(),
            event_pump,
            gl,
            _gl_context: gl_context,
            window,
            _image: image,
            _ttf: ttf,
            _audio: audio,
            _video: video,
            sdl,
        })
    }

    /// Drains all pending platform events, applying each key/button/motion
    /// event to the input state and recording each categorized kind in the
    /// frame event log.
    ///
    /// Returns the last-seen categorized kind of the poll cycle. The return
    /// value is deliberately coarse; `trigger_event` sees every kind that
    /// occurred. Call once per frame, before drawing.
    pub fn process_events(&mut self) -> FrameEvent {
        let mut last = FrameEvent::None;
        while let Some(event) = self.event_pump.poll_event() {
            let Some(ev) = platform::translate_event(&event) else {
                continue;
            };
            self.apply_event(&ev);

            let kind = FrameEvent::of(&ev);
            self.frame_events.record(kind);
            last = kind;
        }
        last
    }

    fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            // Recorded in the frame log only; closing is the caller's call.
            InputEvent::Quit => {}
            InputEvent::KeyDown { key, repeat } => self.keyboard.keydown(key, repeat),
            InputEvent::KeyUp { key } => self.keyboard.keyup(key),
            InputEvent::MouseDown { x, y, button, clicks } => {
                self.mouse.btndown(x, y, button, clicks)
            }
            InputEvent::MouseUp { button } => self.mouse.btnup(button),
            InputEvent::MouseMotion { x, y, dx, dy } => self.mouse.motion(x, y, dx, dy),
        }
    }

    /// Clears the frame event log, presents the frame, and advances frame
    /// timing. Call once per frame, after drawing.
    pub fn swap_buffers(&mut self) {
        self.frame_events.clear();
        self.window.gl_swap_window();
        self.fps.tick();
    }

    /// Whether `kind` was observed since the last buffer swap.
    pub fn trigger_event(&self, kind: FrameEvent) -> bool {
        self.frame_events.triggered(kind)
    }

    /// Clears the color and depth buffers with `color`.
    pub fn clear(&self, color: Color) {
        let [r, g, b, a] = color.to_normalized();
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    /// True until `close()` is called; a quit event alone never flips this.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn close(&mut self) {
        self.open = false;
    }

    #[inline]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[inline]
    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    /// The GL context shapes are constructed against.
    #[inline]
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.window
            .set_title(title)
            .context("failed to set window title")?;
        self.title = title.to_string();
        Ok(())
    }

    /// Warps the pointer to `(x, y)` in window-relative pixels.
    pub fn set_cursor_position(&self, x: i32, y: i32) {
        self.sdl.mouse().warp_mouse_in_window(&self.window, x, y);
    }

    /// Most recently computed frame rate.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }

    /// Seconds since the previous buffer swap.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.fps.dt()
    }

    /// Time since the window was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.fps.elapsed()
    }
}
