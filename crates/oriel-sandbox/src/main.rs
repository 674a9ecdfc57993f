//! Demo frame-loop driver for the oriel engine.

use anyhow::Result;

use oriel_engine::input::Key;
use oriel_engine::logging::{init_logging, LoggingConfig};
use oriel_engine::paint::Color;
use oriel_engine::shape::{Drawable, Polygon, Rectangle, Square};
use oriel_engine::window::{FrameEvent, Window, WindowConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut window = Window::new(WindowConfig {
        title: "oriel sandbox".to_string(),
        width: 800,
        height: 600,
        vsync: true,
        debug_info: true,
    })?;

    let square = Square::new(window.gl(), -0.5, 0.4, 0.5, Color::rgb(220, 60, 60))?;
    let rect = Rectangle::new(window.gl(), 0.45, 0.4, 0.7, 0.35, Color::rgba(60, 120, 220, 200))?;
    let triangle = Polygon::with_vertex_colors(
        window.gl(),
        0.0,
        -0.4,
        &[[0.0, 0.3, 0.0], [-0.35, -0.3, 0.0], [0.35, -0.3, 0.0]],
        &[0, 1, 2],
        &[Color::RED, Color::GREEN, Color::BLUE],
    )?;

    while window.is_open() {
        window.process_events();
        if window.trigger_event(FrameEvent::Quit) || window.keyboard().is_pressed(Key::Escape) {
            window.close();
        }

        window.clear(Color::rgb(24, 24, 28));
        square.draw();
        rect.draw();
        triangle.draw();
        window.swap_buffers();
    }

    log::info!(
        "closing after {:.1}s ({:.0} fps)",
        window.elapsed().as_secs_f32(),
        window.fps()
    );
    Ok(())
}
