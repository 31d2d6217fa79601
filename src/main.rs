mod app;
mod assets;
mod audio;
mod bullets;
mod canvas;
mod color;
mod constants;
mod deaths;
mod game;
mod game_loop;
mod hud;
mod obstacles;
mod players;
mod protocol;
mod renderer;
mod sprites;
mod state;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
