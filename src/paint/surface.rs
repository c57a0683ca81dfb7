use super::raster::{draw_line, draw_text, fill_disc, fill_square};
use super::{
    blank_canvas, BrushShape, BrushState, Color, PaintError, Point, RasterImage, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
use image::ImageFormat;
use log::{debug, info};
use std::path::Path;

/// Pointer input over the canvas, in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    /// `anchor` is the last pointer position seen during the stroke
    Stroking { anchor: Point },
}

/// The paint canvas: a fixed 600x400 RGB raster edited by pointer strokes,
/// with a linear stack of full snapshots for undo.
pub struct PaintSurface {
    image: RasterImage,
    history: Vec<RasterImage>,
    brush: BrushState,
    state: StrokeState,
    last_pointer: Option<Point>,
    revision: u64,
}

impl Default for PaintSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSurface {
    pub fn new() -> Self {
        Self {
            image: blank_canvas(),
            history: Vec::new(),
            brush: BrushState::default(),
            state: StrokeState::Idle,
            last_pointer: None,
            revision: 0,
        }
    }

    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.state, StrokeState::Stroking { .. })
    }

    /// Number of snapshots available to [`undo`](Self::undo)
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Last pointer position seen on a down or move event
    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    /// Bumped on every raster mutation; views re-upload when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Feeds one pointer event through the stroke state machine.
    ///
    /// Returns `true` if the raster changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match (self.state, event) {
            (StrokeState::Idle, PointerEvent::Down(pos)) => {
                self.history.push(self.image.clone());
                self.state = StrokeState::Stroking { anchor: pos };
                self.last_pointer = Some(pos);
                false
            }
            (StrokeState::Stroking { anchor }, PointerEvent::Move(pos)) => {
                self.stamp(anchor, pos);
                self.state = StrokeState::Stroking { anchor: pos };
                self.last_pointer = Some(pos);
                self.touch();
                true
            }
            (StrokeState::Stroking { .. }, PointerEvent::Up(_)) => {
                self.state = StrokeState::Idle;
                false
            }
            // A second press without a release keeps the current stroke.
            (StrokeState::Stroking { .. }, PointerEvent::Down(_)) => false,
            (StrokeState::Idle, PointerEvent::Move(_) | PointerEvent::Up(_)) => false,
        }
    }

    /// Stamps the current brush for a move from `anchor` to `pos`.
    /// Circles and squares are centered on the previous anchor.
    fn stamp(&mut self, anchor: Point, pos: Point) {
        let (size, color) = (self.brush.size(), self.brush.color);
        match self.brush.shape {
            BrushShape::Circle => fill_disc(&mut self.image, anchor, size, color),
            BrushShape::Square => fill_square(&mut self.image, anchor, size, color),
            BrushShape::Line => draw_line(&mut self.image, anchor, pos, size, color),
        }
    }

    pub fn set_brush(&mut self, shape: BrushShape) {
        self.brush.shape = shape;
    }

    /// Selects a brush by name (`circle`, `square` or `line`)
    pub fn set_brush_named(&mut self, name: &str) -> Result<(), PaintError> {
        self.brush.shape = name.parse()?;
        Ok(())
    }

    pub fn set_size(&mut self, size: u32) {
        self.brush.set_size(size);
    }

    /// Applies a color picker result; `None` (cancelled) leaves the color as is.
    pub fn set_color(&mut self, color: Option<Color>) {
        if let Some(color) = color {
            self.brush.color = color;
        }
    }

    /// Restores the most recent snapshot. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.image = snapshot;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Replaces the raster with a blank white one. Not recorded in the undo history.
    pub fn clear(&mut self) {
        self.image = blank_canvas();
        self.touch();
    }

    /// Stamps `text` at the last pointer position (or the origin) in the
    /// current color. Not recorded in the undo history. Empty text is a no-op.
    pub fn add_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let origin = self.last_pointer.unwrap_or_default();
        let scale = (self.brush.size() / 4).max(1);
        draw_text(&mut self.image, origin, text, scale, self.brush.color);
        self.touch();
        true
    }

    /// Writes the raster as PNG, whatever the extension of `path`.
    pub fn save(&self, path: &Path) -> Result<(), PaintError> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| PaintError::Save {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Image saved to {}", path.display());
        Ok(())
    }

    /// Reads an image and pastes it at the origin. Pixels beyond the canvas
    /// are dropped; canvas pixels outside the source keep their values.
    pub fn load(&mut self, path: &Path) -> Result<(), PaintError> {
        let loaded = image::open(path)
            .map_err(|source| PaintError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        debug!(
            "pasting {}x{} image onto {}x{} canvas",
            loaded.width(),
            loaded.height(),
            CANVAS_WIDTH,
            CANVAS_HEIGHT
        );
        image::imageops::replace(&mut self.image, &loaded, 0, 0);
        self.touch();
        info!("Image loaded from {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{BLACK, MAX_BRUSH_SIZE, WHITE};
    use image::Rgb;

    const RED: Color = Rgb([255, 0, 0]);

    fn stroke(surface: &mut PaintSurface, points: &[(i32, i32)]) {
        let mut iter = points.iter().copied().map(Point::from);
        let first = iter.next().expect("stroke needs a start point");
        surface.handle(PointerEvent::Down(first));
        let mut last = first;
        for p in iter {
            surface.handle(PointerEvent::Move(p));
            last = p;
        }
        surface.handle(PointerEvent::Up(last));
    }

    fn is_blank(img: &RasterImage) -> bool {
        img.pixels().all(|&p| p == WHITE)
    }

    #[test]
    fn starts_idle_and_blank() {
        let surface = PaintSurface::new();
        assert_eq!(surface.state(), StrokeState::Idle);
        assert_eq!(surface.image().dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert!(is_blank(surface.image()));
        assert_eq!(surface.history_len(), 0);
        assert_eq!(surface.brush().shape, BrushShape::Circle);
        assert_eq!(surface.brush().color, BLACK);
    }

    #[test]
    fn stroke_transitions() {
        let mut surface = PaintSurface::new();
        assert!(!surface.handle(PointerEvent::Down(Point::new(10, 10))));
        assert_eq!(
            surface.state(),
            StrokeState::Stroking {
                anchor: Point::new(10, 10)
            }
        );
        assert_eq!(surface.history_len(), 1);

        assert!(surface.handle(PointerEvent::Move(Point::new(20, 15))));
        assert_eq!(
            surface.state(),
            StrokeState::Stroking {
                anchor: Point::new(20, 15)
            }
        );

        assert!(!surface.handle(PointerEvent::Up(Point::new(20, 15))));
        assert_eq!(surface.state(), StrokeState::Idle);
        assert_eq!(surface.history_len(), 1);
    }

    #[test]
    fn moves_while_idle_do_not_paint() {
        let mut surface = PaintSurface::new();
        assert!(!surface.handle(PointerEvent::Move(Point::new(50, 50))));
        assert!(!surface.handle(PointerEvent::Up(Point::new(50, 50))));
        assert!(is_blank(surface.image()));
        assert_eq!(surface.revision(), 0);
    }

    #[test]
    fn circle_is_stamped_at_previous_anchor() {
        let mut surface = PaintSurface::new();
        stroke(&mut surface, &[(100, 100), (300, 300)]);
        assert_eq!(*surface.image().get_pixel(100, 100), BLACK);
        assert_eq!(*surface.image().get_pixel(300, 300), WHITE);
    }

    #[test]
    fn square_is_stamped_at_previous_anchor() {
        let mut surface = PaintSurface::new();
        surface.set_brush(BrushShape::Square);
        surface.set_color(Some(RED));
        stroke(&mut surface, &[(50, 60), (400, 300)]);
        let img = surface.image();
        assert_eq!(*img.get_pixel(45, 55), RED);
        assert_eq!(*img.get_pixel(55, 65), RED);
        assert_eq!(*img.get_pixel(56, 60), WHITE);
        assert_eq!(*img.get_pixel(400, 300), WHITE);
    }

    #[test]
    fn line_connects_anchor_to_new_position() {
        let mut surface = PaintSurface::new();
        surface.set_brush(BrushShape::Line);
        surface.set_size(1);
        stroke(&mut surface, &[(10, 200), (110, 200)]);
        let img = surface.image();
        for x in 10..=110 {
            assert_eq!(*img.get_pixel(x, 200), BLACK, "column {x}");
        }
        assert_eq!(*img.get_pixel(111, 200), WHITE);
    }

    #[test]
    fn even_width_line_is_not_widened() {
        let mut surface = PaintSurface::new();
        surface.set_brush(BrushShape::Line);
        surface.set_size(6);
        stroke(&mut surface, &[(100, 100), (200, 100)]);
        let img = surface.image();
        let rows: Vec<u32> = (0..img.height())
            .filter(|&y| *img.get_pixel(150, y) == BLACK)
            .collect();
        assert_eq!(rows, (97..=102).collect::<Vec<_>>());
    }

    #[test]
    fn huge_brush_is_clamped_and_paints_whole_canvas() {
        for shape in BrushShape::ALL {
            let mut surface = PaintSurface::new();
            surface.set_brush(shape);
            surface.set_size(u32::MAX);
            assert_eq!(surface.brush().size(), MAX_BRUSH_SIZE);
            stroke(&mut surface, &[(10, 10), (11, 10)]);
            let img = surface.image();
            let painted = |x: u32, y: u32| *img.get_pixel(x, y) == BLACK;
            match shape {
                // a one-pixel segment with flat ends only spans its two columns
                BrushShape::Line => {
                    assert!((0..CANVAS_HEIGHT).all(|y| painted(10, y) && painted(11, y)));
                    assert!(!painted(12, 10));
                }
                _ => assert!(
                    img.pixels().all(|&p| p == BLACK),
                    "{shape} brush left white pixels"
                ),
            }
        }
    }

    #[test]
    fn each_move_stamps_once_in_order() {
        let moves = [(10, 10), (40, 10), (70, 10), (100, 10), (130, 10)];
        let mut surface = PaintSurface::new();
        surface.set_brush(BrushShape::Square);
        surface.set_size(2);
        stroke(&mut surface, &moves);

        let mut expected = blank_canvas();
        for pair in moves.windows(2) {
            fill_square(&mut expected, pair[0].into(), 2, BLACK);
        }
        assert_eq!(surface.image().as_raw(), expected.as_raw());
        // the final position is never stamped by a square brush
        assert_eq!(*surface.image().get_pixel(130, 10), WHITE);
        assert_eq!(surface.revision(), 4);
    }

    #[test]
    fn later_stamps_overwrite_earlier_ones() {
        let mut surface = PaintSurface::new();
        surface.set_brush(BrushShape::Square);
        surface.set_size(3);
        surface.handle(PointerEvent::Down(Point::new(20, 20)));
        surface.handle(PointerEvent::Move(Point::new(22, 20)));
        surface.set_color(Some(RED));
        surface.handle(PointerEvent::Move(Point::new(24, 20)));
        surface.handle(PointerEvent::Up(Point::new(24, 20)));
        // overlap between the two stamps holds the second color
        assert_eq!(*surface.image().get_pixel(21, 20), RED);
        assert_eq!(*surface.image().get_pixel(17, 20), BLACK);
    }

    #[test]
    fn undo_restores_pre_stroke_pixels() {
        let mut surface = PaintSurface::new();
        stroke(&mut surface, &[(30, 30), (60, 60), (90, 90)]);
        let before = surface.image().clone();
        stroke(&mut surface, &[(200, 200), (220, 210), (240, 220)]);
        assert_ne!(surface.image().as_raw(), before.as_raw());

        assert!(surface.undo());
        assert_eq!(surface.image().as_raw(), before.as_raw());
        assert_eq!(surface.history_len(), 1);
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut surface = PaintSurface::new();
        surface.add_text("HI");
        let before = surface.image().clone();
        let revision = surface.revision();
        assert!(!surface.undo());
        assert_eq!(surface.image().as_raw(), before.as_raw());
        assert_eq!(surface.revision(), revision);
    }

    #[test]
    fn snapshots_are_not_aliased_with_live_image() {
        let mut surface = PaintSurface::new();
        surface.handle(PointerEvent::Down(Point::new(5, 5)));
        for x in 6..50 {
            surface.handle(PointerEvent::Move(Point::new(x, 5)));
        }
        surface.handle(PointerEvent::Up(Point::new(49, 5)));
        assert!(surface.undo());
        assert!(is_blank(surface.image()));
    }

    #[test]
    fn clear_yields_blank_canvas_and_is_not_undoable() {
        let mut surface = PaintSurface::new();
        stroke(&mut surface, &[(10, 10), (100, 100)]);
        surface.clear();
        assert!(is_blank(surface.image()));
        assert_eq!(surface.image().dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        // the only snapshot is the pre-stroke one
        assert_eq!(surface.history_len(), 1);
        assert!(surface.undo());
        assert!(is_blank(surface.image()));
        assert!(!surface.undo());
    }

    #[test]
    fn add_text_uses_last_pointer_and_color() {
        let mut surface = PaintSurface::new();
        surface.set_color(Some(RED));
        surface.set_size(4);
        stroke(&mut surface, &[(300, 100), (310, 120)]);
        let history = surface.history_len();

        assert!(surface.add_text("I"));
        // top bar of "I" at scale 1: columns 1..=3 of the first glyph row
        assert_eq!(*surface.image().get_pixel(311, 120), RED);
        assert_eq!(surface.history_len(), history);
    }

    #[test]
    fn add_text_defaults_to_origin_and_ignores_empty_input() {
        let mut surface = PaintSurface::new();
        assert!(!surface.add_text(""));
        assert!(is_blank(surface.image()));
        assert!(surface.add_text("I"));
        assert_eq!(*surface.image().get_pixel(1, 0), BLACK);
    }

    #[test]
    fn cancelled_color_pick_keeps_color() {
        let mut surface = PaintSurface::new();
        surface.set_color(Some(RED));
        surface.set_color(None);
        assert_eq!(surface.brush().color, RED);
    }

    #[test]
    fn brush_can_be_selected_by_name() {
        let mut surface = PaintSurface::new();
        surface.set_brush_named("line").unwrap();
        assert_eq!(surface.brush().shape, BrushShape::Line);
        assert!(surface.set_brush_named("triangle").is_err());
        assert_eq!(surface.brush().shape, BrushShape::Line);
    }

    #[test]
    fn save_to_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let surface = PaintSurface::new();
        let err = surface.save(&path).unwrap_err();
        assert!(matches!(err, PaintError::Save { .. }));
    }

    #[test]
    fn load_of_missing_file_leaves_canvas_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = PaintSurface::new();
        stroke(&mut surface, &[(10, 10), (20, 20)]);
        let before = surface.image().clone();
        let err = surface.load(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, PaintError::Load { .. }));
        assert_eq!(surface.image().as_raw(), before.as_raw());
    }

    #[test]
    fn load_of_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let mut surface = PaintSurface::new();
        assert!(matches!(surface.load(&path), Err(PaintError::Load { .. })));
        assert!(is_blank(surface.image()));
    }
}
