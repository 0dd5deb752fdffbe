use eframe::egui;

use c_atlas::config::AppConfig;

mod app;

use app::AtlasApp;

fn main() {
    env_logger::init();

    let config = AppConfig::from_env();
    let title = config.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let app = AtlasApp::new(config)?;
            Ok(Box::new(app))
        }),
    )
    .expect("Failed to start C-Atlas");
}
