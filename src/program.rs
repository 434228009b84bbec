//! linked shader program and the diagnostics gathered while building it

use std::rc::Rc;

use glow::HasContext;

use crate::window::GlContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    VertexShader,
    FragmentShader,
    Link,
    Validate,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::VertexShader => "vertex shader",
            Stage::FragmentShader => "fragment shader",
            Stage::Link => "program link",
            Stage::Validate => "program validation",
        };
        f.write_str(name)
    }
}

/// Info-log text reported by a step that still succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub stage: Stage,
    pub log: String,
}

impl Diagnostic {
    /// `None` when the driver left the log empty (or whitespace only).
    pub fn from_log(stage: Stage, log: &str) -> Option<Self> {
        let log = log.trim();
        if log.is_empty() {
            return None;
        }
        Some(Diagnostic {
            stage,
            log: log.to_string(),
        })
    }
}

/// Owns a linked GL program, deleted on drop. Holding the context keeps it
/// alive until then.
pub struct Program {
    gl: Rc<GlContext>,
    handle: glow::Program,
    diagnostics: Vec<Diagnostic>,
}

impl Program {
    pub(crate) fn from_linked(
        gl: Rc<GlContext>,
        handle: glow::Program,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Program {
            gl,
            handle,
            diagnostics,
        }
    }

    pub fn handle(&self) -> glow::Program {
        self.handle
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.use_program(Some(self.handle));
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.handle);
        }
    }
}
