use crate::config::{Colors, Config};
use crate::gui::dial::{
    ANGLE_STEP, LABEL_OFFSET, MARKER_OFFSET, RADIUS_FACTOR, START_OFFSET,
};
use crate::gui::theme::ThemeColors;
use derive_more::{Display, From, Into};
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The active selection index. Only ever mutated modulo the selection count,
/// so it stays a valid position index for its owning [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, From, Into)]
pub struct Selection(usize);

impl Selection {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn advance(&mut self, count: usize) {
        self.0 = (self.0 + 1) % count;
    }

    pub fn rewrap(&mut self, count: usize) {
        self.0 %= count;
    }
}

/// Last known draw-surface dimensions and the disc radius derived from them.
/// Meaningless until the first resize notification; `is_ready` gates drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl Geometry {
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.radius = RADIUS_FACTOR * width.min(height) / 2.0;
    }

    pub fn is_ready(&self) -> bool {
        self.radius > 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Point on a circle of the given radius around the widget center, at the
    /// fixed angle for a position index: `9π/8 + index × π/4`.
    pub fn position(&self, index: usize, radius: f64) -> Point {
        let angle = START_OFFSET + index as f64 * ANGLE_STEP;
        let center = self.center();
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialColor {
    Neutral,
    Highlight,
}

impl DialColor {
    fn for_selection(selection: Selection) -> Self {
        if selection.index() == 0 {
            Self::Neutral
        } else {
            Self::Highlight
        }
    }

    pub fn color(&self, colors: &ThemeColors) -> Srgba<f64> {
        match self {
            Self::Neutral => colors.neutral,
            Self::Highlight => colors.highlight,
        }
    }
}

pub struct State {
    pub selection_count: usize,
    pub selection: Selection,
    pub dial_color: DialColor,
    pub geometry: Geometry,
    pub text_size: f64,
    pub colors: Colors,
}

impl State {
    pub fn from_config(config: &Config) -> Self {
        Self {
            selection_count: config.selections(),
            selection: Selection::default(),
            dial_color: DialColor::Neutral,
            geometry: Geometry::default(),
            text_size: config.text_size,
            colors: config.colors.clone(),
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.geometry.resize(width as f64, height as f64);
    }

    /// Advance to the next position. The dial color is resolved here, at
    /// update time, rather than on every frame.
    pub fn tap(&mut self) {
        self.selection.advance(self.selection_count);
        self.dial_color = DialColor::for_selection(self.selection);
    }

    pub fn reset(&mut self) {
        self.selection = Selection::default();
        self.dial_color = DialColor::Neutral;
    }

    pub fn apply_config(&mut self, config: &Config) {
        self.selection_count = config.selections();
        self.selection.rewrap(self.selection_count);
        self.dial_color = DialColor::for_selection(self.selection);
        self.text_size = config.text_size;
        self.colors = config.colors.clone();
    }

    pub fn label_position(&self, index: usize) -> Point {
        self.geometry
            .position(index, self.geometry.radius + LABEL_OFFSET)
    }

    pub fn marker_position(&self) -> Point {
        self.geometry
            .position(self.selection.index(), self.geometry.radius - MARKER_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn ready_state() -> State {
        let mut state = State::from_config(&Config::default());
        state.resize(300, 300);
        state
    }

    #[test]
    fn tap_cycles_selection_modulo_count() {
        let mut state = State::from_config(&Config::default());
        assert_eq!(state.selection.index(), 0);
        for n in 1..=12 {
            state.tap();
            assert_eq!(state.selection.index(), n % 4);
        }
    }

    #[test]
    fn dial_color_is_neutral_only_at_zero() {
        let mut state = State::from_config(&Config::default());
        assert_eq!(state.dial_color, DialColor::Neutral);
        for _ in 0..3 {
            state.tap();
            assert_eq!(state.dial_color, DialColor::Highlight);
        }
        state.tap(); // back to 0
        assert_eq!(state.dial_color, DialColor::Neutral);
    }

    #[test]
    fn resize_derives_radius_from_shorter_edge() {
        let mut state = State::from_config(&Config::default());
        assert!(!state.geometry.is_ready());

        state.resize(200, 100);
        assert!((state.geometry.radius - 40.0).abs() < EPS);
        assert!(state.geometry.is_ready());

        state.resize(300, 300);
        assert!((state.geometry.radius - 120.0).abs() < EPS);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut state = State::from_config(&Config::default());
        state.resize(200, 100);
        let first = state.geometry;
        state.resize(200, 100);
        assert_eq!(state.geometry, first);
    }

    #[test]
    fn label_positions_match_fixed_angles() {
        let state = ready_state();
        let r = state.geometry.radius + LABEL_OFFSET;
        let center = state.geometry.center();

        for pos in 0..state.selection_count {
            let angle = 9.0 * PI / 8.0 + pos as f64 * (PI / 4.0);
            let p = state.label_position(pos);
            assert!((p.x - (center.x + r * angle.cos())).abs() < EPS);
            assert!((p.y - (center.y + r * angle.sin())).abs() < EPS);
        }
    }

    #[test]
    fn marker_tracks_active_selection_inside_rim() {
        let mut state = ready_state();
        state.tap();
        assert_eq!(state.selection.index(), 1);

        let r = state.geometry.radius - MARKER_OFFSET;
        let center = state.geometry.center();
        let angle = 9.0 * PI / 8.0 + PI / 4.0;
        let p = state.marker_position();
        assert!((p.x - (center.x + r * angle.cos())).abs() < EPS);
        assert!((p.y - (center.y + r * angle.sin())).abs() < EPS);
    }

    #[test]
    fn apply_config_rewraps_out_of_range_selection() {
        let mut state = State::from_config(&Config::default());
        state.tap();
        state.tap();
        state.tap(); // selection = 3

        let config = Config {
            selections: 2,
            ..Config::default()
        };
        state.apply_config(&config);
        assert_eq!(state.selection_count, 2);
        assert_eq!(state.selection.index(), 1);
        assert_eq!(state.dial_color, DialColor::Highlight);
    }
}
