//! Demo application: spins a mesh in front of the camera.
//!
//! Renders the built-in cube, or an OBJ file given as the first argument.
//! Keys: 1 = wireframe, 2 = filled, 3 = filled + wireframe, S = save a PNG
//! frame capture, Escape = quit.

use std::path::Path;

use rastly::prelude::*;
use rastly::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderMode {
    Wireframe,
    Filled,
    FilledWireframe,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mesh = match std::env::args().nth(1) {
        Some(path) => Mesh::from_obj(&path).map_err(|e| e.to_string())?,
        None => Mesh::cube(),
    };

    let mut window = Window::new("Rastly", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut buffer = PixelBuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut camera = Camera::new(
        Vec3::new(0.0, 0.0, 5.0),
        Quat::IDENTITY,
        60f32.to_radians(),
        WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        0.1,
        100.0,
    )
    .map_err(|e| e.to_string())?;

    let mut transform = Transform::new();
    let mut mode = RenderMode::FilledWireframe;
    let mut limiter = FrameLimiter::new(&window);

    'running: loop {
        match window.poll_events() {
            WindowEvent::Quit => break 'running,
            WindowEvent::Resize(width, height) => {
                if width > 0 && height > 0 {
                    buffer.resize(width, height);
                    window.resize(width, height)?;
                    camera
                        .set_aspect_ratio(width as f32 / height as f32)
                        .map_err(|e| e.to_string())?;
                }
            }
            WindowEvent::KeyPressed(Key::Num1) => mode = RenderMode::Wireframe,
            WindowEvent::KeyPressed(Key::Num2) => mode = RenderMode::Filled,
            WindowEvent::KeyPressed(Key::Num3) => mode = RenderMode::FilledWireframe,
            WindowEvent::KeyPressed(Key::S) => match buffer.save_png(Path::new("frame.png")) {
                Ok(()) => log::info!("saved frame capture to frame.png"),
                Err(e) => log::error!("frame capture failed: {e}"),
            },
            WindowEvent::None => {}
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        let dt = delta_ms as f32 / 1000.0;
        transform.rotate(Quat::from_axis_angle(Vec3::Y, 0.8 * dt));
        transform.rotate(Quat::from_axis_angle(Vec3::X, 0.3 * dt));

        buffer.clear(colors::BACKGROUND);
        match mode {
            RenderMode::Wireframe => {
                draw_wireframe(&mesh, &transform, &mut camera, &mut buffer, colors::WIREFRAME);
            }
            RenderMode::Filled => {
                draw_filled(&mesh, &transform, &mut camera, &mut buffer, colors::FILL);
            }
            RenderMode::FilledWireframe => {
                draw_filled(&mesh, &transform, &mut camera, &mut buffer, colors::FILL);
                draw_wireframe(&mesh, &transform, &mut camera, &mut buffer, colors::WIREFRAME);
            }
        }

        window.present(&buffer)?;
    }

    Ok(())
}
