//! SDL window with a current OpenGL context

use std::rc::Rc;

use glow::HasContext;

use crate::render_loop::LoopEvent;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    pub major: u8,
    pub minor: u8,
    pub core_profile: bool,
    pub forward_compatible: bool,
    pub double_buffered: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::with_version(3, 2)
    }
}

impl ContextConfig {
    pub fn with_version(major: u8, minor: u8) -> Self {
        ContextConfig {
            major,
            minor,
            core_profile: true,
            forward_compatible: true,
            double_buffered: true,
        }
    }

    /// true when a context reporting `actual` satisfies this request
    pub fn accepts(&self, actual: (u32, u32)) -> bool {
        actual >= (u32::from(self.major), u32::from(self.minor))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub context: ContextConfig,
    pub hidden: bool,
}

impl WindowConfig {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        WindowConfig {
            title: title.to_string(),
            width,
            height,
            context: ContextConfig::default(),
            hidden: false,
        }
    }
}

/// GL function table together with the SDL window and context it was
/// loaded from. GL objects hold an `Rc` of this, so the context outlives
/// every object that deletes itself on drop.
pub struct GlContext {
    gl: glow::Context,
    _gl_context: sdl2::video::GLContext,
    window: sdl2::video::Window,
}

impl std::ops::Deref for GlContext {
    type Target = glow::Context;

    fn deref(&self) -> &glow::Context {
        &self.gl
    }
}

/// Owned window: the shared GL context plus the event pump.
pub struct Window {
    gl: Rc<GlContext>,
    event_pump: sdl2::EventPump,
    _sdl: sdl2::Sdl,
}

impl Window {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| Error::platform("SDL init", e))?;
        let video = sdl
            .video()
            .map_err(|e| Error::platform("SDL video init", e))?;

        {
            let gl_attr = video.gl_attr();
            gl_attr.set_context_version(config.context.major, config.context.minor);
            if config.context.core_profile {
                gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
            }
            if config.context.forward_compatible {
                gl_attr.set_context_flags().forward_compatible().set();
            }
            gl_attr.set_double_buffer(config.context.double_buffered);
        }

        let mut window_builder = video.window(&config.title, config.width, config.height);
        window_builder.opengl();
        if config.hidden {
            window_builder.hidden();
        }
        let window = window_builder
            .build()
            .map_err(|e| Error::platform("window creation", e))?;
        let gl_context = window
            .gl_create_context()
            .map_err(|e| Error::platform("OpenGL context creation", e))?;
        window
            .gl_make_current(&gl_context)
            .map_err(|e| Error::platform("OpenGL make current", e))?;

        let gl = unsafe {
            glow::Context::from_loader_function(|name| video.gl_get_proc_address(name) as *const _)
        };
        let actual = {
            let version = gl.version();
            (version.major, version.minor)
        };
        if !config.context.accepts(actual) {
            return Err(Error::UnsupportedContext {
                requested: (config.context.major, config.context.minor),
                actual,
            });
        }
        log::info!(
            "OpenGL {}.{} context ({}), {}x{}",
            actual.0,
            actual.1,
            gl.version().vendor_info,
            config.width,
            config.height
        );

        unsafe {
            gl.viewport(0, 0, config.width as i32, config.height as i32);
        }

        let event_pump = sdl
            .event_pump()
            .map_err(|e| Error::platform("SDL event pump", e))?;

        Ok(Window {
            gl: Rc::new(GlContext {
                gl,
                _gl_context: gl_context,
                window,
            }),
            event_pump,
            _sdl: sdl,
        })
    }

    pub fn gl(&self) -> &Rc<GlContext> {
        &self.gl
    }

    /// Drain the pending events without blocking.
    pub fn poll_events(&mut self) -> impl Iterator<Item = LoopEvent> + '_ {
        self.event_pump.poll_iter().map(|e| LoopEvent::from(&e))
    }

    pub fn swap(&self) {
        self.gl.window.gl_swap_window();
    }
}

#[cfg(test)]
pub(crate) fn hidden_window() -> Window {
    let mut config = WindowConfig::new("glow-steps unit test", 64, 64);
    config.hidden = true;
    Window::new(&config).unwrap()
}
