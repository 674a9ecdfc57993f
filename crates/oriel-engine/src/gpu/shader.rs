use std::rc::Rc;

use anyhow::{Error, Result};
use glow::HasContext;

/// Linked vertex + fragment shader program.
///
/// Compile and link failures are the soft error tier: they are logged and the
/// program is left unusable (`use_program(0)` at draw time), so a shape with a
/// broken shader renders nothing rather than faulting. Handle creation itself
/// failing is fatal.
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    program: Option<glow::Program>,
}

impl ShaderProgram {
    pub fn new(gl: &Rc<glow::Context>, vert_src: &str, frag_src: &str) -> Result<Self> {
        unsafe {
            let vert = compile_stage(gl, glow::VERTEX_SHADER, vert_src, "vertex")?;
            let frag = compile_stage(gl, glow::FRAGMENT_SHADER, frag_src, "fragment")?;

            let program = gl.create_program().map_err(Error::msg)?;
            gl.attach_shader(program, vert.0);
            gl.attach_shader(program, frag.0);
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);
            if !linked {
                log::error!(
                    "shader program link failed: {}",
                    gl.get_program_info_log(program)
                );
            }

            // Stages are no longer needed once the program is linked.
            gl.delete_shader(vert.0);
            gl.delete_shader(frag.0);

            let program = if linked && vert.1 && frag.1 {
                Some(program)
            } else {
                gl.delete_program(program);
                None
            };

            Ok(Self { gl: Rc::clone(gl), program })
        }
    }

    /// Makes this program current. A failed program binds the zero program.
    pub fn bind(&self) {
        unsafe { self.gl.use_program(self.program) }
    }

    /// Whether compilation and linking succeeded.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.program.is_some()
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        if let Some(program) = self.program.take() {
            unsafe { self.gl.delete_program(program) }
        }
    }
}

/// Compiles one stage, returning the shader handle and its compile status.
unsafe fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    src: &str,
    label: &str,
) -> Result<(glow::Shader, bool)> {
    unsafe {
        let shader = gl.create_shader(stage).map_err(Error::msg)?;
        gl.shader_source(shader, src);
        gl.compile_shader(shader);

        let ok = gl.get_shader_compile_status(shader);
        if !ok {
            log::error!(
                "{label} shader compilation failed: {}",
                gl.get_shader_info_log(shader)
            );
        }
        Ok((shader, ok))
    }
}
