use crate::components::about::{show_about, APP_NAME};
use crate::components::chart::show_usage_chart;
use crate::components::paint_view::PaintView;
use crate::components::settings::{show_settings_window, Settings};
use crate::components::stats_view::show_usage_stats;
use crate::metrics::MetricsSampler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    SystemInfo,
    NanoPaint,
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::SystemInfo, Tab::NanoPaint, Tab::About];

    pub fn title(self) -> &'static str {
        match self {
            Tab::SystemInfo => "System Info",
            Tab::NanoPaint => "NanoPaint",
            Tab::About => "About",
        }
    }
}

/// Tabbed shell around the system monitor and the paint canvas.
/// The two tabs share nothing.
pub struct NanoHwApp {
    sampler: MetricsSampler,
    paint: PaintView,
    settings: Settings,
    active_tab: Tab,
}

impl Default for NanoHwApp {
    fn default() -> Self {
        let settings = Settings::from_env();
        let mut sampler = MetricsSampler::default();
        sampler.set_update_interval(settings.update_interval());
        Self {
            sampler,
            paint: PaintView::default(),
            settings,
            active_tab: Tab::default(),
        }
    }
}

impl NanoHwApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let app = Self::default();
        log::info!(
            "{APP_NAME} started, saving to {}",
            app.settings.save_dir.display()
        );
        app
    }

    fn show_system_info(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("System Information");
        });
        ui.add_space(10.0);
        show_usage_stats(ui, self.sampler.cpu(), self.sampler.memory());
        show_usage_chart(
            ui,
            self.sampler.cpu(),
            self.sampler.memory(),
            self.settings.visible_samples,
        );
    }
}

impl eframe::App for NanoHwApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        self.sampler.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.add_space(16.0);
                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }
            });

            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.active_tab, tab, tab.title());
                }
            });
        });

        show_settings_window(ctx, &mut self.settings);

        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            Tab::SystemInfo => self.show_system_info(ui),
            Tab::NanoPaint => self.paint.show(ui, &self.settings.save_dir),
            Tab::About => show_about(ui),
        });

        // Wake up for the next sample even without input.
        ctx.request_repaint_after(self.sampler.until_next_update());
    }
}
