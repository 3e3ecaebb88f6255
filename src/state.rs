use crate::bounds::Rect;
use crate::font;
use crate::transform::Transform;
use druid::Data;

/// Application state
#[derive(Clone, Data)]
pub struct AppState {
    /// Current transform applied to the text
    pub transform: Transform,
    /// The string being rendered
    pub text: String,
    /// Model-space bounding box of the laid-out text
    pub model_box: Rect,
    /// Show the debug overlay
    pub debug: bool,
}

impl AppState {
    /// Measures the text once and anchors its model box at the origin
    /// with unit height.
    pub fn new(text: String, debug: bool) -> Self {
        let model_box = font::model_box(&text);
        AppState {
            transform: Transform::default(),
            text,
            model_box,
            debug,
        }
    }
}
