pub const APP_NAME: &str = "NanoHW";
pub const AUTHOR: &str = "Veddev";

pub fn show_about(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.heading(APP_NAME);
        ui.add_space(5.0);
        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
        ui.add_space(5.0);
        ui.label(format!("Made by {AUTHOR}"));
        ui.add_space(5.0);
        ui.label("This program is free and open-source software");
        ui.label("under the GNU General Public License (GPL) v3.0.");
        ui.add_space(16.0);
        powered_by_egui_and_eframe(ui);
    });
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
