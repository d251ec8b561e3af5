//! WASM entry point: wires the header, theme, preloader and forms into the page

fn main() {
    console_error_panic_hook::set_once();
    buxdu_web::start();
}
