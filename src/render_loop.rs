use glow::HasContext;

use crate::window::Window;

pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

/// What the loop cares about in an SDL event. Only quitting is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    Quit,
    Ignored,
}

impl From<&sdl2::event::Event> for LoopEvent {
    fn from(event: &sdl2::event::Event) -> Self {
        match event {
            sdl2::event::Event::Quit { .. } => LoopEvent::Quit,
            _ => LoopEvent::Ignored,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Stopped,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        *self == LoopState::Running
    }

    /// Consume a whole batch of events. Returns true if this call moved the
    /// state from `Running` to `Stopped`.
    pub fn drain<I>(&mut self, events: I) -> bool
    where
        I: IntoIterator<Item = LoopEvent>,
    {
        let mut transitioned = false;
        for event in events {
            if event == LoopEvent::Quit && self.is_running() {
                *self = LoopState::Stopped;
                transitioned = true;
            }
        }
        transitioned
    }
}

/// Poll, clear, paint, present until a quit event arrives.
///
/// `paint` is called once per frame after the colour buffer has been
/// cleared to [`CLEAR_COLOR`]. Returns the number of frames presented.
pub fn run<F>(window: &mut Window, mut paint: F) -> usize
where
    F: FnMut(&glow::Context),
{
    let mut state = LoopState::Running;
    let mut num_frame = 0;
    loop {
        state.drain(window.poll_events());
        if !state.is_running() {
            break;
        }
        let gl: &glow::Context = window.gl();
        unsafe {
            let [r, g, b, a] = CLEAR_COLOR;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        paint(gl);
        window.swap();
        num_frame += 1;
    }
    log::info!("quit after {num_frame} frames");
    num_frame
}
