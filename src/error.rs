use crate::program::Stage;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{step} failed: {message}")]
    Platform { step: &'static str, message: String },

    #[error("requested OpenGL {}.{} but the driver created {}.{}", .requested.0, .requested.1, .actual.0, .actual.1)]
    UnsupportedContext {
        requested: (u8, u8),
        actual: (u32, u32),
    },

    #[error("OpenGL object creation failed: {0}")]
    Gl(String),

    #[error("failed to compile {stage}: {log}")]
    ShaderCompile {
        stage: Stage,
        log: String,
    },

    #[error("failed to link shader program: {log}")]
    ProgramLink { log: String },

    #[error("vertex data has {len} floats, not a multiple of {floats_per_vertex}")]
    VertexShape { len: usize, floats_per_vertex: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn platform(step: &'static str, message: impl ToString) -> Self {
        Error::Platform {
            step,
            message: message.to_string(),
        }
    }
}
