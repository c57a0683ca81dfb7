use crate::metrics::TimeSeries;

pub fn show_usage_stats(ui: &mut egui::Ui, cpu: &TimeSeries, memory: &TimeSeries) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            match cpu.last() {
                Some(value) => ui.label(format!("Current CPU: {:.1}%", value)),
                None => ui.label("Current CPU: –"),
            };
            match memory.last() {
                Some(value) => ui.label(format!("Memory in use: {:.1}%", value)),
                None => ui.label("Memory in use: –"),
            };
        });

        ui.add_space(32.0);

        ui.vertical(|ui| {
            ui.label(format!("Samples: {}", cpu.len()));
        });
    });
    ui.add_space(8.0);
}
