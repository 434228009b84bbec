use glow_steps::drawer_vtx2xyz;
use glow_steps::window::{Window, WindowConfig};

fn main() -> glow_steps::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let mut window = Window::new(&WindowConfig::new("02 square", 800, 600))?;
    let gl = window.gl().clone();

    let program = drawer_vtx2xyz::compile_shader(&gl)?;
    #[rustfmt::skip]
    let vtx2xyz: [f32; 18] = [
        // left bottom triangle
        -0.5, 0.5, 0.0,
        -0.5, -0.5, 0.0,
        0.5, -0.5, 0.0,
        // top right triangle
        0.5, -0.5, 0.0,
        0.5, 0.5, 0.0,
        -0.5, 0.5, 0.0,
    ];
    let drawer = drawer_vtx2xyz::Drawer::new(&gl, &vtx2xyz)?;

    glow_steps::render_loop::run(&mut window, |_gl| drawer.draw(&program));
    Ok(())
}
