//! Tests that need a display and an OpenGL 3.2 core driver.
//!
//! Run with `cargo test -- --ignored --test-threads=1`; SDL wants one
//! window at a time on the main thread on some platforms.

use glow::HasContext;
use glow_steps::window::{Window, WindowConfig};
use glow_steps::{drawer_vtx2xyz, drawer_vtx2xyzrgb_elem2vtx, Error, Stage};

const SIZE: u32 = 100;

fn hidden_window() -> Window {
    let mut config = WindowConfig::new("glow-steps test", SIZE, SIZE);
    config.hidden = true;
    Window::new(&config).unwrap()
}

fn read_rgba(gl: &glow::Context) -> Vec<u8> {
    let mut pixels = vec![0u8; (SIZE * SIZE * 4) as usize];
    unsafe {
        gl.read_pixels(
            0,
            0,
            SIZE as i32,
            SIZE as i32,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelPackData::Slice(Some(&mut pixels[..])),
        );
    }
    pixels
}

fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 3] {
    let i = ((y * SIZE + x) * 4) as usize;
    [pixels[i], pixels[i + 1], pixels[i + 2]]
}

#[test]
#[ignore = "requires a display with OpenGL 3.2"]
fn compiling_twice_gives_independent_programs() {
    let window = hidden_window();
    let gl = window.gl().clone();
    let p0 = drawer_vtx2xyzrgb_elem2vtx::compile_shader(&gl).unwrap();
    let p1 = drawer_vtx2xyzrgb_elem2vtx::compile_shader(&gl).unwrap();
    assert_ne!(p0.handle(), p1.handle());
    drop(p0);
    p1.bind();
    unsafe {
        assert_eq!(gl.get_error(), glow::NO_ERROR);
    }
}

#[test]
#[ignore = "requires a display with OpenGL 3.2"]
fn broken_fragment_shader_is_an_error() {
    let window = hidden_window();
    let gl = window.gl().clone();
    let result = glow_steps::compile_shaders(
        &gl,
        glow_steps::SHADER_VERSION,
        drawer_vtx2xyz::VS_SRC,
        "out vec4 colour;\nvoid main() { colour = undefined_name; }\n",
    );
    match result {
        Err(Error::ShaderCompile { stage, log }) => {
            assert_eq!(stage, Stage::FragmentShader);
            assert!(!log.is_empty());
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("broken shader compiled"),
    }
}

#[test]
#[ignore = "requires a display with OpenGL 3.2"]
fn model_counts_follow_input_lengths() {
    let window = hidden_window();
    let gl = window.gl().clone();
    for k in [0usize, 1, 2, 7] {
        let vtx2xyz = vec![0.25f32; 3 * k];
        let drawer = drawer_vtx2xyz::Drawer::new(&gl, &vtx2xyz).unwrap();
        assert_eq!(drawer.num_vtx(), k);
    }
    let vtx2xyzrgb = vec![0.5f32; 6 * 4];
    for m in [0usize, 3, 9] {
        let elem2vtx: Vec<usize> = (0..m).map(|i| i % 4).collect();
        let drawer =
            drawer_vtx2xyzrgb_elem2vtx::Drawer::new(&gl, &vtx2xyzrgb, &elem2vtx).unwrap();
        assert_eq!(drawer.num_vtx(), 4);
        assert_eq!(drawer.num_index(), m);
    }
    assert!(matches!(
        drawer_vtx2xyz::Drawer::new(&gl, &[0.0; 4]),
        Err(Error::VertexShape { len: 4, floats_per_vertex: 3 })
    ));
}

#[test]
#[ignore = "requires a display with OpenGL 3.2"]
fn coloured_square_is_shaded_per_vertex() {
    let window = hidden_window();
    let gl = window.gl().clone();
    let program = drawer_vtx2xyzrgb_elem2vtx::compile_shader(&gl).unwrap();
    #[rustfmt::skip]
    let vtx2xyzrgb: [f32; 24] = [
        -0.5, 0.5, 0.0,     1.0, 0.0, 0.0,
        -0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
        0.5, -0.5, 0.0,     0.0, 0.0, 1.0,
        0.5, 0.5, 0.0,      0.0, 1.0, 1.0,
    ];
    let tri2vtx = [0u32, 1, 2, 2, 3, 0];
    let drawer = drawer_vtx2xyzrgb_elem2vtx::Drawer::new(&gl, &vtx2xyzrgb, &tri2vtx).unwrap();

    unsafe {
        let [r, g, b, a] = glow_steps::render_loop::CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear(glow::COLOR_BUFFER_BIT);
    }
    drawer.draw(&program);
    let pixels = read_rgba(&gl);

    // pixel (i, j) has its centre at ndc ((i + 0.5) / 50 - 1, (j + 0.5) / 50 - 1)
    let [r, g, b] = pixel(&pixels, 27, 69);
    assert!(r > 180 && g < 80 && b < 80, "top left {r} {g} {b}");
    let [r, g, b] = pixel(&pixels, 27, 27);
    assert!(g > 180 && r < 80 && b < 80, "bottom left {r} {g} {b}");
    let [r, g, b] = pixel(&pixels, 69, 27);
    assert!(b > 180 && r < 80 && g < 80, "bottom right {r} {g} {b}");
    let [r, g, b] = pixel(&pixels, 72, 72);
    assert!(g > 180 && b > 180 && r < 80, "top right {r} {g} {b}");
    for (x, y) in [(5, 5), (94, 94), (50, 95), (95, 50)] {
        for c in pixel(&pixels, x, y) {
            assert!((24..=27).contains(&c), "background at ({x}, {y}) is {c}");
        }
    }
    unsafe {
        assert_eq!(gl.get_error(), glow::NO_ERROR);
    }
}

#[test]
#[ignore = "requires a display with OpenGL 3.2"]
fn dropping_a_program_deletes_it() {
    let window = hidden_window();
    let gl = window.gl().clone();
    let program = drawer_vtx2xyz::compile_shader(&gl).unwrap();
    for d in program.diagnostics() {
        assert!(!d.log.is_empty());
    }
    let handle = program.handle();
    unsafe {
        assert!(gl.is_program(handle));
    }
    drop(program);
    unsafe {
        assert!(!gl.is_program(handle));
    }
}

#[test]
#[ignore = "requires a display with OpenGL 3.2"]
fn resources_keep_the_context_alive_past_the_window() {
    let window = hidden_window();
    let gl = window.gl().clone();
    let program = drawer_vtx2xyzrgb_elem2vtx::compile_shader(&gl).unwrap();
    let drawer =
        drawer_vtx2xyzrgb_elem2vtx::Drawer::new(&gl, &[0.0f32; 18], &[0u32, 1, 2]).unwrap();
    drop(window);
    unsafe {
        assert!(gl.is_program(program.handle()));
        assert!(gl.is_vertex_array(drawer.vertex_array()));
    }
    drop(drawer);
    drop(program);
    unsafe {
        assert_eq!(gl.get_error(), glow::NO_ERROR);
    }
}
