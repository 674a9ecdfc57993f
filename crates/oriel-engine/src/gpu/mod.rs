//! GPU resource handle wrappers.
//!
//! Each wrapper owns exactly one driver handle, created at construction and
//! deleted exactly once on drop. The GL context is shared via `Rc`; the
//! handles themselves are never shared.

mod buffer;
mod shader;
mod vertex_array;

pub use buffer::{ElementBuffer, VertexBuffer};
pub use shader::ShaderProgram;
pub use vertex_array::VertexArray;
