//! Window + GL context lifecycle.
//!
//! Owns the SDL subsystems, the platform window, the GL context, and the
//! input state holders, and exposes the per-frame event pump and buffer swap.

mod config;
mod events;
mod window;

pub use config::WindowConfig;
pub use events::FrameEvent;
pub use window::Window;
