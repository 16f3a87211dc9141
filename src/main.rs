use clinic_desk::config::CONFIG;
use clinic_desk::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🏥 Clinic Desk starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
