use glow_steps::window::{Window, WindowConfig};

fn main() -> glow_steps::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let mut window = Window::new(&WindowConfig::new("00 window", 800, 600))?;
    glow_steps::render_loop::run(&mut window, |_gl| {});
    Ok(())
}
