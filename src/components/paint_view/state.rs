use crate::paint::{PaintError, PaintSurface, Point, PointerEvent};
use log::error;
use std::path::{Path, PathBuf};

/// A failure shown to the operator in a modal window
pub struct ErrorMessage {
    pub title: &'static str,
    pub body: String,
}

/// NanoPaint tab: the paint surface plus the dialogs and texture that
/// present it.
#[derive(Default)]
pub struct PaintView {
    pub surface: PaintSurface,
    pub(super) texture: Option<egui::TextureHandle>,
    pub(super) uploaded_revision: Option<u64>,
    /// Color being edited while the picker is open
    pub color_dialog: Option<egui::Color32>,
    /// Text being typed while the text prompt is open
    pub text_dialog: Option<String>,
    pub error: Option<ErrorMessage>,
}

/// Raw pointer state for one frame, already in canvas coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    pub pos: Point,
    pub hovered: bool,
    pub pressed: bool,
    pub released: bool,
    pub moved: bool,
}

/// Converts one frame of pointer state into state machine events.
/// A stroke only starts on a press over the canvas but continues outside it.
pub fn pointer_events(input: PointerInput, stroking: bool) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let mut stroking = stroking;
    if !stroking {
        if input.pressed && input.hovered {
            events.push(PointerEvent::Down(input.pos));
            stroking = true;
        }
    } else if input.moved {
        events.push(PointerEvent::Move(input.pos));
    }
    if stroking && input.released {
        events.push(PointerEvent::Up(input.pos));
    }
    events
}

/// Canvas pixel under a screen position, given the canvas' top-left corner
pub fn to_canvas_point(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    let offset = pos - origin;
    Point::new(offset.x.floor() as i32, offset.y.floor() as i32)
}

/// Appends `.png` when the chosen file name has no extension
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("png")
    }
}

impl PaintView {
    pub fn needs_upload(&self) -> bool {
        self.uploaded_revision != Some(self.surface.revision())
    }

    pub fn apply_pointer(&mut self, input: PointerInput) -> bool {
        let mut changed = false;
        for event in pointer_events(input, self.surface.is_stroking()) {
            changed |= self.surface.handle(event);
        }
        changed
    }

    pub fn save_to(&mut self, path: &Path) {
        if let Err(e) = self.surface.save(path) {
            self.report("Save Error", e);
        }
    }

    pub fn load_from(&mut self, path: &Path) {
        if let Err(e) = self.surface.load(path) {
            self.report("Load Error", e);
        }
    }

    pub fn open_color_dialog(&mut self) {
        let [r, g, b] = self.surface.brush().color.0;
        self.color_dialog = Some(egui::Color32::from_rgb(r, g, b));
    }

    /// Closes the picker; `confirmed == false` keeps the current color.
    pub fn close_color_dialog(&mut self, confirmed: bool) {
        let picked = self.color_dialog.take().filter(|_| confirmed);
        self.surface
            .set_color(picked.map(|c| image::Rgb([c.r(), c.g(), c.b()])));
    }

    pub fn open_text_dialog(&mut self) {
        self.text_dialog = Some(String::new());
    }

    /// Closes the prompt, stamping the text when confirmed
    pub fn close_text_dialog(&mut self, confirmed: bool) {
        if let Some(text) = self.text_dialog.take() {
            if confirmed {
                self.surface.add_text(&text);
            }
        }
    }

    fn report(&mut self, title: &'static str, e: PaintError) {
        error!("{title}: {e}");
        self.error = Some(ErrorMessage {
            title,
            body: e.to_string(),
        });
    }
}
