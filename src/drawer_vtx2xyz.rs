//! unindexed triangles from a flat `x, y, z` array, drawn in one colour

use std::rc::Rc;

use glow::HasContext;

use crate::vertex_layout::VertexLayout;
use crate::window::GlContext;
use crate::{Error, Program, Result};

pub const VS_SRC: &str = r#"
layout (location = 0) in vec3 vertex_position;

void main() {
    gl_Position = vec4(vertex_position, 1.0);
}
"#;

pub const FS_SRC: &str = r#"
out vec4 colour;

void main() {
    colour = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

pub fn compile_shader(gl: &Rc<GlContext>) -> Result<Program> {
    crate::compile_shaders(gl, crate::SHADER_VERSION, VS_SRC, FS_SRC)
}

pub struct Drawer {
    gl: Rc<GlContext>,
    vertex_array: glow::VertexArray,
    vbo: glow::Buffer,
    num_vtx: usize,
}

impl Drawer {
    pub fn new(gl: &Rc<GlContext>, vtx2xyz: &[f32]) -> Result<Self> {
        let layout = VertexLayout::xyz();
        layout.check_shape(vtx2xyz)?;
        let num_vtx = layout.vertex_count(vtx2xyz.len());
        unsafe {
            let vertex_array = gl.create_vertex_array().map_err(Error::Gl)?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vertex_array);
                    return Err(Error::Gl(e));
                }
            };
            gl.bind_vertex_array(Some(vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vtx2xyz),
                glow::STATIC_DRAW,
            );
            layout.apply(gl);
            // the vertex array keeps the buffer binding for its attributes
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
            log::debug!("uploaded {num_vtx} vertices (xyz)");
            Ok(Drawer {
                gl: gl.clone(),
                vertex_array,
                vbo,
                num_vtx,
            })
        }
    }

    pub fn vertex_array(&self) -> glow::VertexArray {
        self.vertex_array
    }

    pub fn num_vtx(&self) -> usize {
        self.num_vtx
    }

    pub fn draw(&self, program: &Program) {
        program.bind();
        unsafe {
            self.gl.bind_vertex_array(Some(self.vertex_array));
            self.gl.draw_arrays(glow::TRIANGLES, 0, self.num_vtx as i32);
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Drawer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vertex_array);
            self.gl.delete_buffer(self.vbo);
        }
    }
}
