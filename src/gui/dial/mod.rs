use std::f64::consts::PI;

pub mod model;
pub mod view;

pub use model::{DialColor, Geometry, Point, Selection, State};
pub use view::draw;

pub const DEFAULT_SELECTIONS: usize = 4;
pub const MAX_SELECTIONS: usize = 8; // positions wrap past a full turn beyond this
pub const START_OFFSET: f64 = 9.0 * PI / 8.0;
pub const ANGLE_STEP: f64 = PI / 4.0;
pub const RADIUS_FACTOR: f64 = 0.8; // disc takes 80% of the shorter edge
pub const LABEL_OFFSET: f64 = 20.0; // labels sit just outside the rim
pub const MARKER_OFFSET: f64 = 35.0; // marker sits just inside the rim
pub const MARKER_RADIUS: f64 = 20.0;
pub const DEFAULT_TEXT_SIZE: f64 = 40.0;
