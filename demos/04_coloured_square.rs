use glow_steps::drawer_vtx2xyzrgb_elem2vtx;
use glow_steps::window::{Window, WindowConfig};

fn main() -> glow_steps::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let mut window = Window::new(&WindowConfig::new("04 coloured square", 800, 800))?;
    let gl = window.gl().clone();

    let program = drawer_vtx2xyzrgb_elem2vtx::compile_shader(&gl)?;
    #[rustfmt::skip]
    let vtx2xyzrgb: [f32; 24] = [
        -0.5, 0.5, 0.0,     1.0, 0.0, 0.0,
        -0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
        0.5, -0.5, 0.0,     0.0, 0.0, 1.0,
        0.5, 0.5, 0.0,      0.0, 1.0, 1.0,
    ];
    #[rustfmt::skip]
    let tri2vtx: [u32; 6] = [
        0, 1, 2, // left bottom
        2, 3, 0, // right top
    ];
    let drawer = drawer_vtx2xyzrgb_elem2vtx::Drawer::new(&gl, &vtx2xyzrgb, &tri2vtx)?;

    glow_steps::render_loop::run(&mut window, |_gl| drawer.draw(&program));
    Ok(())
}
