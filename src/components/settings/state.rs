use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the directory save/load dialogs start in
pub const SAVE_DIR_ENV: &str = "DEFAULT_SAVE_DIR";

pub struct Settings {
    pub scale: f32,
    pub font_size: f32,
    pub update_interval_ms: u64,
    /// Number of trailing samples shown by the chart
    pub visible_samples: usize,
    pub save_dir: PathBuf,
    show_window: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_size: 14.0,
            update_interval_ms: 1000,
            visible_samples: 20,
            save_dir: PathBuf::from("."),
            show_window: false,
        }
    }
}

impl Settings {
    /// Defaults, with the save directory resolved from the environment.
    pub fn from_env() -> Self {
        Self {
            save_dir: resolve_save_dir(std::env::var_os(SAVE_DIR_ENV), dirs::home_dir()),
            ..Default::default()
        }
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn show(&mut self) {
        self.show_window = true;
    }

    pub fn is_visible(&self) -> bool {
        self.show_window
    }

    pub fn hide(&mut self) {
        self.show_window = false;
    }

    /// Point size for one text style, relative to the body `font_size`
    pub fn font_size_for(&self, text_style: &egui::TextStyle) -> f32 {
        match text_style {
            egui::TextStyle::Heading => self.font_size + 4.0,
            egui::TextStyle::Small => (self.font_size - 2.0).max(1.0),
            _ => self.font_size,
        }
    }

    /// Pushes scale and font sizes into the egui context. Font families are left alone.
    pub fn apply(&self, ctx: &egui::Context) {
        if ctx.pixels_per_point() != self.scale {
            ctx.set_pixels_per_point(self.scale);
        }
        ctx.style_mut(|style| {
            for (text_style, font_id) in style.text_styles.iter_mut() {
                font_id.size = self.font_size_for(text_style);
            }
        });
    }
}

/// Env override first, then the home directory, then the working directory.
/// An empty override counts as unset.
pub fn resolve_save_dir(env_override: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    env_override
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or(home)
        .unwrap_or_else(|| PathBuf::from("."))
}
