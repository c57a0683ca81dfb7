use super::state::{to_canvas_point, with_png_extension, PaintView, PointerInput};
use crate::paint::{BrushShape, CANVAS_HEIGHT, CANVAS_WIDTH};
use egui::color_picker::{color_picker_color32, Alpha};
use std::path::Path;

impl PaintView {
    pub fn show(&mut self, ui: &mut egui::Ui, save_dir: &Path) {
        self.show_canvas(ui);
        ui.add_space(6.0);
        self.show_toolbar(ui, save_dir);

        let ctx = ui.ctx().clone();
        self.show_color_dialog(&ctx);
        self.show_text_dialog(&ctx);
        self.show_error(&ctx);
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        // Dialogs own the pointer while open.
        if self.color_dialog.is_none() && self.text_dialog.is_none() && self.error.is_none() {
            let (pressed, released, delta, pos) = ui.input(|i| {
                (
                    i.pointer.primary_pressed(),
                    i.pointer.primary_released(),
                    i.pointer.delta(),
                    i.pointer.interact_pos(),
                )
            });
            let pos = pos
                .map(|p| to_canvas_point(p, rect.min))
                .or(self.surface.last_pointer())
                .unwrap_or_default();
            self.apply_pointer(PointerInput {
                pos,
                hovered: response.hovered(),
                pressed,
                released,
                moved: delta != egui::Vec2::ZERO,
            });
        }

        let texture = self.sync_texture(ui.ctx());
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter().image(texture, rect, uv, egui::Color32::WHITE);
    }

    /// Uploads the raster if it changed since the last frame
    fn sync_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let needs_upload = self.needs_upload();
        let surface = &self.surface;
        let raster = || {
            egui::ColorImage::from_rgb(
                [CANVAS_WIDTH as usize, CANVAS_HEIGHT as usize],
                surface.image().as_raw(),
            )
        };
        let texture = match self.texture.take() {
            Some(mut texture) => {
                if needs_upload {
                    texture.set(raster(), egui::TextureOptions::NEAREST);
                }
                texture
            }
            None => ctx.load_texture("nanopaint_canvas", raster(), egui::TextureOptions::NEAREST),
        };
        let id = texture.id();
        self.texture = Some(texture);
        self.uploaded_revision = Some(self.surface.revision());
        id
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui, save_dir: &Path) {
        ui.horizontal(|ui| {
            ui.label("Brush:");
            let mut shape = self.surface.brush().shape;
            for candidate in BrushShape::ALL {
                ui.radio_value(&mut shape, candidate, candidate.label());
            }
            self.surface.set_brush(shape);

            let mut size = self.surface.brush().size();
            ui.add(egui::Slider::new(&mut size, 1..=50).text("Size"));
            self.surface.set_size(size);
        });

        ui.horizontal(|ui| {
            if ui.button("Color").clicked() {
                self.open_color_dialog();
            }
            if ui.button("Undo").clicked() {
                self.surface.undo();
            }
            if ui.button("Clear").clicked() {
                self.surface.clear();
            }
            if ui.button("Save").clicked() {
                let picked = rfd::FileDialog::new()
                    .set_directory(save_dir)
                    .set_file_name("untitled.png")
                    .add_filter("PNG files", &["png"])
                    .save_file();
                if let Some(path) = picked {
                    self.save_to(&with_png_extension(path));
                }
            }
            if ui.button("Load").clicked() {
                let picked = rfd::FileDialog::new()
                    .set_directory(save_dir)
                    .add_filter("PNG files", &["png"])
                    .pick_file();
                if let Some(path) = picked {
                    self.load_from(&path);
                }
            }
            if ui.button("Text").clicked() {
                self.open_text_dialog();
            }
        });
    }

    fn show_color_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut color) = self.color_dialog else {
            return;
        };
        let mut outcome = None;

        egui::Window::new("Choose color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                color_picker_color32(ui, &mut color, Alpha::Opaque);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(false);
                    }
                });
            });

        self.color_dialog = Some(color);
        if let Some(confirmed) = outcome {
            self.close_color_dialog(confirmed);
        }
    }

    fn show_text_dialog(&mut self, ctx: &egui::Context) {
        let Some(text) = self.text_dialog.as_mut() else {
            return;
        };
        let mut outcome = None;

        egui::Window::new("Input")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Enter text:");
                let response = ui.text_edit_singleline(text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    outcome = Some(true);
                } else if !response.has_focus() {
                    response.request_focus();
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(false);
                    }
                });
            });

        if let Some(confirmed) = outcome {
            self.close_text_dialog(confirmed);
        }
    }

    fn show_error(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.error else {
            return;
        };
        let mut dismissed = false;

        egui::Window::new(message.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&message.body);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.error = None;
        }
    }
}
