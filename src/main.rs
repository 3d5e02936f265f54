mod behaviors;
mod config;
mod controller;
mod dom;
mod error;
mod state;
mod util;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = controller::start() {
        util::cwarn(&format!("page interactions disabled: {e}"));
    }
}
