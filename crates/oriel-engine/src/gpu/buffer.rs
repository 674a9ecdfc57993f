use std::rc::Rc;

use anyhow::{Error, Result};
use glow::HasContext;

/// Vertex buffer object holding static vertex data.
pub struct VertexBuffer {
    gl: Rc<glow::Context>,
    raw: glow::Buffer,
}

impl VertexBuffer {
    /// Creates the buffer and uploads `data`. The buffer stays bound to
    /// `GL_ARRAY_BUFFER` so a currently bound vertex array can reference it.
    pub fn new<T: bytemuck::Pod>(gl: &Rc<glow::Context>, data: &[T]) -> Result<Self> {
        let raw = unsafe { gl.create_buffer() }.map_err(Error::msg)?;
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(raw));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
        }
        Ok(Self { gl: Rc::clone(gl), raw })
    }

    pub fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.raw)) }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.raw) }
    }
}

/// Element (index) buffer object.
pub struct ElementBuffer {
    gl: Rc<glow::Context>,
    raw: glow::Buffer,
}

impl ElementBuffer {
    /// Creates the buffer and uploads `indices`. Must be called while the
    /// owning vertex array is bound so the binding is captured in its state.
    pub fn new(gl: &Rc<glow::Context>, indices: &[u32]) -> Result<Self> {
        let raw = unsafe { gl.create_buffer() }.map_err(Error::msg)?;
        unsafe {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(raw));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );
        }
        Ok(Self { gl: Rc::clone(gl), raw })
    }
}

impl Drop for ElementBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.raw) }
    }
}
