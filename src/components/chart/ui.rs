use super::state::ChartWindow;
use crate::metrics::TimeSeries;
use egui::Color32;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotBounds, PlotPoints};

const CPU_COLOR: Color32 = Color32::BLUE;
const MEMORY_COLOR: Color32 = Color32::RED;

/// Dual-axis line chart of the trailing `visible` samples: CPU on the left
/// axis, memory on the right. Read-only.
pub fn show_usage_chart(ui: &mut egui::Ui, cpu: &TimeSeries, memory: &TimeSeries, visible: usize) {
    let window = ChartWindow::compute(cpu, memory, visible);
    let axis_window = window.clone();

    let plot = Plot::new("system_usage_chart")
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![AxisHints::new_x().label("Time")])
        .custom_y_axes(vec![
            AxisHints::new_y().label("CPU Usage (%)"),
            AxisHints::new_y()
                .label("Memory Usage (%)")
                .placement(HPlacement::Right)
                .formatter(move |mark, _range| {
                    format!("{:.1}", axis_window.plot_to_memory(mark.value))
                }),
        ])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [window.x_min, window.cpu.min],
            [window.x_max, window.cpu.max],
        ));

        let cpu_points: PlotPoints = cpu
            .window(visible)
            .iter()
            .map(|&(i, v)| [i as f64, v])
            .collect();
        plot_ui.line(Line::new(cpu_points).color(CPU_COLOR).name("CPU Usage"));

        let memory_points: PlotPoints = memory
            .window(visible)
            .iter()
            .map(|&(i, v)| [i as f64, window.memory_to_plot(v)])
            .collect();
        plot_ui.line(Line::new(memory_points).color(MEMORY_COLOR).name("Memory Usage"));
    });
}
