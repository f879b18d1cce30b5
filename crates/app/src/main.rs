use app::frame_input::{MouseTracker, capture_tick_input};
use app::minimap::draw_minimap;
use app::scene::draw_scene;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use app::settings_file::SettingsFile;
use app::window_config::build_window_conf;
use app::{APP_NAME, format_fingerprint, format_seed};
use maze_core::{Simulation, TickInput};
use macroquad::prelude::{
    KeyCode, SKYBLUE, WHITE, clear_background, draw_line, draw_text, get_fps, get_frame_time,
    is_key_pressed, next_frame, screen_height, screen_width, set_cursor_grab, show_mouse,
};

const MAZE_WIDTH: usize = 20;
const MAZE_HEIGHT: usize = 20;

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{APP_NAME}: {message}");
            std::process::exit(2);
        }
    };

    let settings_path = SettingsFile::default_path();
    let mut settings = settings_path
        .as_deref()
        .and_then(|path| SettingsFile::load(path).ok())
        .unwrap_or_default();
    settings.last_seed = seed_choice.value();
    if let Some(path) = settings_path.as_deref()
        && let Err(error) = settings.write_atomic(path)
    {
        eprintln!("{APP_NAME}: could not save settings: {error}");
    }

    let mut sim = Simulation::new(seed_choice.value(), MAZE_WIDTH, MAZE_HEIGHT);
    let mut mouse = MouseTracker::default();
    let mut cursor_grabbed = true;
    set_cursor_grab(true);
    show_mouse(false);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            cursor_grabbed = !cursor_grabbed;
            set_cursor_grab(cursor_grabbed);
            show_mouse(!cursor_grabbed);
            mouse.reset();
        }

        let input = if cursor_grabbed {
            capture_tick_input(&mut mouse, settings.mouse_sensitivity)
        } else {
            TickInput::default()
        };
        sim.step(input, get_frame_time());

        clear_background(SKYBLUE);
        draw_scene(&sim);
        draw_minimap(&sim, screen_width(), screen_height());
        draw_crosshair();
        draw_hud(&sim);

        next_frame().await
    }
}

fn draw_crosshair() {
    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;
    draw_line(center_x - 10.0, center_y, center_x + 10.0, center_y, 1.0, WHITE);
    draw_line(center_x, center_y - 10.0, center_x, center_y + 10.0, 1.0, WHITE);
}

fn draw_hud(sim: &Simulation) {
    draw_text(&format!("seed {}", format_seed(sim.seed())), 10.0, 20.0, 20.0, WHITE);
    draw_text(&format_fingerprint(sim.grid().fingerprint()), 10.0, 40.0, 20.0, WHITE);
    draw_text(&format!("{} FPS", get_fps()), screen_width() - 100.0, 20.0, 20.0, WHITE);
}
