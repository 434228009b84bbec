pub mod drawer_vtx2xyz;
pub mod drawer_vtx2xyzrgb_elem2vtx;
pub mod error;
pub mod program;
pub mod render_loop;
pub mod vertex_layout;
pub mod window;

use std::rc::Rc;

use window::GlContext;

pub use error::{Error, Result};
pub use program::{Diagnostic, Program, Stage};

pub const SHADER_VERSION: &str = "#version 330 core";

/// Compile a vertex/fragment pair and link them into a program.
///
/// A stage that fails to compile, or a program that fails to link, is an
/// error carrying the info log. Non-empty logs from steps that succeeded
/// are kept on the returned [`Program`] and logged as warnings. The stage
/// objects are deleted before returning on every path.
pub fn compile_shaders(
    gl: &Rc<GlContext>,
    shader_version: &str,
    vertex_shader_source: &str,
    fragment_shader_source: &str,
) -> Result<Program> {
    use glow::HasContext;
    unsafe {
        let program = gl.create_program().map_err(Error::Gl)?;
        let shader_sources = [
            (Stage::VertexShader, vertex_shader_source),
            (Stage::FragmentShader, fragment_shader_source),
        ];
        let (status, _released) = link_stages(gl, program, shader_version, &shader_sources);
        match status {
            Ok(diagnostics) => {
                for d in &diagnostics {
                    log::warn!("{}: {}", d.stage, d.log);
                }
                Ok(Program::from_linked(gl.clone(), program, diagnostics))
            }
            Err(err) => {
                gl.delete_program(program);
                Err(err)
            }
        }
    }
}

/// Build `program` from the given stages, then detach and delete every
/// stage object that was created, whatever the outcome. Returns the build
/// result and the deleted stage handles.
unsafe fn link_stages(
    gl: &glow::Context,
    program: glow::Program,
    shader_version: &str,
    shader_sources: &[(Stage, &str)],
) -> (Result<Vec<Diagnostic>>, Vec<glow::Shader>) {
    use glow::HasContext;
    let mut shaders = Vec::with_capacity(shader_sources.len());
    let mut diagnostics = Vec::new();
    let status = build_program(
        gl,
        program,
        shader_version,
        shader_sources,
        &mut shaders,
        &mut diagnostics,
    );
    for &shader in &shaders {
        gl.detach_shader(program, shader);
        gl.delete_shader(shader);
    }
    (status.map(|()| diagnostics), shaders)
}

fn shader_type(stage: Stage) -> Result<u32> {
    match stage {
        Stage::VertexShader => Ok(glow::VERTEX_SHADER),
        Stage::FragmentShader => Ok(glow::FRAGMENT_SHADER),
        Stage::Link | Stage::Validate => Err(Error::Gl(format!("{stage} is not a shader stage"))),
    }
}

unsafe fn build_program(
    gl: &glow::Context,
    program: glow::Program,
    shader_version: &str,
    shader_sources: &[(Stage, &str)],
    shaders: &mut Vec<glow::Shader>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    use glow::HasContext;
    for &(stage, shader_source) in shader_sources {
        let shader = gl.create_shader(shader_type(stage)?).map_err(Error::Gl)?;
        gl.attach_shader(program, shader);
        shaders.push(shader);
        gl.shader_source(shader, &format!("{shader_version}\n{shader_source}"));
        gl.compile_shader(shader);
        let log = gl.get_shader_info_log(shader);
        if !gl.get_shader_compile_status(shader) {
            return Err(Error::ShaderCompile { stage, log });
        }
        diagnostics.extend(Diagnostic::from_log(stage, &log));
    }

    gl.link_program(program);
    let log = gl.get_program_info_log(program);
    if !gl.get_program_link_status(program) {
        return Err(Error::ProgramLink { log });
    }
    diagnostics.extend(Diagnostic::from_log(Stage::Link, &log));

    // validation depends on the GL state at the time of the call, so it only warns
    gl.validate_program(program);
    let log = gl.get_program_info_log(program);
    diagnostics.extend(Diagnostic::from_log(Stage::Validate, &log));
    Ok(())
}
