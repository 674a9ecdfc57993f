use std::rc::Rc;

use anyhow::Result;
use glow::HasContext;

use crate::gpu::{ElementBuffer, ShaderProgram, VertexArray, VertexBuffer};

use super::geometry::{Geometry, Vertex};

const VERT_SRC: &str = include_str!("shaders/flat.vert");
const FRAG_SRC: &str = include_str!("shaders/flat.frag");

/// Common core of every shape: position plus exclusively-owned GPU resources.
///
/// The vertex array captures the attribute layout and element buffer binding
/// at construction, so drawing only needs to bind the program and the array.
pub struct Mesh {
    gl: Rc<glow::Context>,
    x: f32,
    y: f32,

    vao: VertexArray,
    // Referenced by the vertex array state; kept for ownership only.
    _vbo: VertexBuffer,
    _ebo: ElementBuffer,

    shader: ShaderProgram,
    index_count: i32,
}

impl Mesh {
    pub fn new(gl: &Rc<glow::Context>, x: f32, y: f32, geometry: &Geometry) -> Result<Self> {
        let vao = VertexArray::new(gl)?;
        vao.bind();

        let vbo = VertexBuffer::new(gl, &geometry.vertices)?;
        let ebo = ElementBuffer::new(gl, &geometry.indices)?;

        let stride = std::mem::size_of::<Vertex>() as i32;
        unsafe {
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 4, glow::FLOAT, false, stride, 3 * 4);
        }

        vao.unbind();

        let shader = ShaderProgram::new(gl, VERT_SRC, FRAG_SRC)?;

        Ok(Self {
            gl: Rc::clone(gl),
            x,
            y,
            vao,
            _vbo: vbo,
            _ebo: ebo,
            shader,
            index_count: geometry.indices.len() as i32,
        })
    }

    pub fn draw(&self) {
        self.shader.bind();
        self.vao.bind();
        unsafe {
            self.gl
                .draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
        }
        self.vao.unbind();
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }
}
