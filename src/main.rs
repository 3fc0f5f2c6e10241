use ibx_website::{config, App};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Starting IBX site");
    yew::Renderer::<App>::new().render();
}
