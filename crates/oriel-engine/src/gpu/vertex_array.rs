use std::rc::Rc;

use anyhow::{Error, Result};
use glow::HasContext;

/// Vertex array object. Captures vertex attribute layout and the bound
/// element buffer while it is bound.
pub struct VertexArray {
    gl: Rc<glow::Context>,
    raw: glow::VertexArray,
}

impl VertexArray {
    pub fn new(gl: &Rc<glow::Context>) -> Result<Self> {
        let raw = unsafe { gl.create_vertex_array() }
            .map_err(Error::msg)?;
        Ok(Self { gl: Rc::clone(gl), raw })
    }

    pub fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.raw)) }
    }

    pub fn unbind(&self) {
        unsafe { self.gl.bind_vertex_array(None) }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { self.gl.delete_vertex_array(self.raw) }
    }
}
