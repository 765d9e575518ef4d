use rategrid::config::AppConfig;
use rategrid::ui::app::App;

fn main() {
    let config = AppConfig::from_env();
    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("logger already initialised: {err}");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Supplier Rate Analyzer")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}
