//! Interactive collision demo.
//!
//! Draws a fixed rectangle, a line from the window origin to the mouse
//! with every point where it crosses the rectangle, a spinning triangle
//! and a circle that follows the mouse. Shapes turn red while they
//! overlap the rectangle. Run with `cargo run --features demo`.

use rcollide::library::*;
use sdl2::event::Event;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};
use std::time::{Duration, Instant};

/// Window title displayed in the title bar
const TITLE: &str = "rcollide demo";
/// Width of the demo window in pixels
const WINDOW_WIDTH: u32 = 800;
/// Height of the demo window in pixels
const WINDOW_HEIGHT: u32 = 800;
/// Background color for the canvas
const BACKGROUND: Color = Color::RGB(51, 51, 51);
/// Fixed target rectangle as x, y, width, height
const TARGET: [f32; 4] = [300.0, 300.0, 200.0, 200.0];
/// Radius of the circle that follows the mouse
const CURSOR_RADIUS: f32 = 30.0;
/// Color of shapes that are not overlapping the target
const IDLE: Color = Color::RGB(180, 180, 180);
/// Color of shapes that overlap the target
const HIT: Color = Color::RED;
/// Frames per second to aim for
const FPS: u32 = 60;

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// Outlines a shape by handing its vertex list to the gfx primitives.
fn draw_shape<T: RenderTarget>(canvas: &mut Canvas<T>, shape: &Shape, color: Color) {
    let vx: Vec<i16> = shape.vertices().iter().map(|v| v.x as i16).collect();
    let vy: Vec<i16> = shape.vertices().iter().map(|v| v.y as i16).collect();
    let _ = canvas.aa_polygon(&vx, &vy, to_abgr(color));
}

/// Animation state kept across frames.
struct Scene {
    spinner: Shape,
    spin_rate: f32,
    angle: f32,
    mouse: Vector,
}

impl Scene {
    fn new() -> Scene {
        let mut spinner = triangle(80.0, 560.0, 160.0, 140.0);
        spinner.save();
        Scene {
            spinner,
            // degrees per second
            spin_rate: rand::random_range(30.0..120.0),
            angle: 0.0,
            mouse: Vector::default(),
        }
    }

    fn update(&mut self, dt: f32) {
        self.angle = (self.angle + self.spin_rate * dt) % 360.0;
        self.spinner.load();
        self.spinner.rotate(Some(self.angle));
    }

    fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) -> Result<(), CollisionError> {
        let [x, y, w, h] = TARGET;
        let target = rect(x, y, w, h);
        let cursor = circle(self.mouse.x, self.mouse.y, CURSOR_RADIUS, DEFAULT_RESOLUTION);

        let spinner_hit = polygon_polygon(&target, &self.spinner, true)?;
        let cursor_hit = rect_circle(x, y, w, h, self.mouse.x, self.mouse.y, CURSOR_RADIUS);
        let target_hit = spinner_hit || cursor_hit;

        draw_shape(canvas, &target, if target_hit { HIT } else { IDLE });
        draw_shape(canvas, &self.spinner, if spinner_hit { HIT } else { IDLE });
        draw_shape(canvas, &cursor, if cursor_hit { HIT } else { IDLE });

        let _ = canvas.line(0, 0, self.mouse.x as i16, self.mouse.y as i16, to_abgr(Color::WHITE));
        for point in rect_line_points(x, y, w, h, 0.0, 0.0, self.mouse.x, self.mouse.y) {
            let _ = canvas.filled_circle(point.x as i16, point.y as i16, 5, to_abgr(Color::WHITE));
        }
        Ok(())
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    let mut scene = Scene::new();
    log::info!("spinning triangle at {:.1} deg/s", scene.spin_rate);

    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'running
                }
                Event::MouseMotion { x, y, .. } => {
                    scene.mouse = Vector::new(x as f32, y as f32);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        scene.update(dt);

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        scene.draw(&mut canvas).map_err(|e| e.to_string())?;
        canvas.present();

        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / FPS));
    }
    Ok(())
}
