//! Oriel engine crate.
//!
//! A small SDL2 + OpenGL rendering scaffold: window and GL context lifecycle,
//! keyboard/mouse state, and a shape hierarchy over VAO/VBO/EBO/shader handles.

pub mod gpu;
pub mod window;
pub mod input;
pub mod time;
pub mod shape;

pub mod logging;
pub mod paint;
