use super::state::{Settings, SAVE_DIR_ENV};

pub fn show_settings_window(ctx: &egui::Context, settings: &mut Settings) {
    if !settings.is_visible() {
        return;
    }

    egui::Window::new("⚙ Settings")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("UI scale");
                    ui.add(egui::Slider::new(&mut settings.scale, 0.5..=2.0).step_by(0.1));
                    ui.end_row();

                    ui.label("Font size");
                    ui.add(
                        egui::Slider::new(&mut settings.font_size, 8.0..=32.0)
                            .step_by(1.0)
                            .suffix(" pt"),
                    );
                    ui.end_row();

                    ui.label("Chart samples");
                    ui.add(egui::Slider::new(&mut settings.visible_samples, 5..=120));
                    ui.end_row();
                });

            ui.separator();
            ui.label(format!("Save folder: {}", settings.save_dir.display()));
            ui.small(format!("Set {SAVE_DIR_ENV} to change it."));

            ui.separator();
            if ui.button("Close").clicked() {
                settings.hide();
            }
        });
}
