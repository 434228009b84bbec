//! indexed triangles with a colour per vertex
//!
//! Vertices are interleaved `x, y, z, r, g, b` records; `elem2vtx` holds
//! three vertex indices per triangle.

use std::rc::Rc;

use glow::HasContext;

use crate::vertex_layout::VertexLayout;
use crate::window::GlContext;
use crate::{Error, Program, Result};

pub const VS_SRC: &str = r#"
layout (location = 0) in vec3 vertex_position;
layout (location = 1) in vec3 colour;

out vec3 v_colour;

void main() {
    gl_Position = vec4(vertex_position, 1.0);
    v_colour = colour;
}
"#;

pub const FS_SRC: &str = r#"
in vec3 v_colour;
out vec4 frag_colour;

void main() {
    frag_colour = vec4(v_colour, 1.0);
}
"#;

pub fn compile_shader(gl: &Rc<GlContext>) -> Result<Program> {
    crate::compile_shaders(gl, crate::SHADER_VERSION, VS_SRC, FS_SRC)
}

pub struct Drawer {
    gl: Rc<GlContext>,
    vertex_array: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    num_vtx: usize,
    num_index: usize,
}

impl Drawer {
    pub fn new<T>(gl: &Rc<GlContext>, vtx2xyzrgb: &[f32], elem2vtx: &[T]) -> Result<Self>
    where
        T: 'static + Copy + num_traits::AsPrimitive<u32>,
    {
        let layout = VertexLayout::xyzrgb();
        layout.check_shape(vtx2xyzrgb)?;
        let num_vtx = layout.vertex_count(vtx2xyzrgb.len());
        let elem2vtx: Vec<u32> = elem2vtx.iter().map(|i| (*i).as_()).collect();
        unsafe {
            let vertex_array = gl.create_vertex_array().map_err(Error::Gl)?;
            let buffers = gl
                .create_buffer()
                .and_then(|vbo| match gl.create_buffer() {
                    Ok(ebo) => Ok((vbo, ebo)),
                    Err(e) => {
                        gl.delete_buffer(vbo);
                        Err(e)
                    }
                });
            let (vbo, ebo) = match buffers {
                Ok(buffers) => buffers,
                Err(e) => {
                    gl.delete_vertex_array(vertex_array);
                    return Err(Error::Gl(e));
                }
            };
            gl.bind_vertex_array(Some(vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vtx2xyzrgb),
                glow::STATIC_DRAW,
            );
            // recorded in the vertex array, so it must stay bound until the array is unbound
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&elem2vtx),
                glow::STATIC_DRAW,
            );
            layout.apply(gl);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
            log::debug!(
                "uploaded {num_vtx} vertices (xyzrgb), {} indices",
                elem2vtx.len()
            );
            Ok(Drawer {
                gl: gl.clone(),
                vertex_array,
                vbo,
                ebo,
                num_vtx,
                num_index: elem2vtx.len(),
            })
        }
    }

    pub fn vertex_array(&self) -> glow::VertexArray {
        self.vertex_array
    }

    pub fn num_vtx(&self) -> usize {
        self.num_vtx
    }

    pub fn num_index(&self) -> usize {
        self.num_index
    }

    pub fn draw(&self, program: &Program) {
        program.bind();
        unsafe {
            self.gl.bind_vertex_array(Some(self.vertex_array));
            self.gl.draw_elements(
                glow::TRIANGLES,
                self.num_index as i32,
                glow::UNSIGNED_INT,
                0,
            );
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Drawer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vertex_array);
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_buffer(self.ebo);
        }
    }
}
