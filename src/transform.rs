use druid::Data;

/// Smallest allowed uniform scale; decrements pin here so the text
/// can never shrink to nothing or invert.
pub const SCALE_MIN: f64 = 0.15;
/// Scale change per key press
pub const SCALE_STEP: f64 = 0.05;
/// Rotation change per key press, in degrees
pub const ROT_STEP_DEG: f64 = 5.0;
/// Translation change per key press, in world units
pub const MOVE_STEP: f64 = 0.08;

/// Current transform applied to the text: uniform scale, rotation
/// about Z, then translation.
#[derive(Clone, Copy, PartialEq, Debug, Data)]
pub struct Transform {
    pub scale: f64,
    /// Rotation in degrees, kept within (-360, 360)
    pub angle_deg: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            scale: 0.9,
            angle_deg: 0.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Transform {
    /// Applies scale, then rotation, then translation to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let (sin_a, cos_a) = self.angle_deg.to_radians().sin_cos();
        let (x, y) = (x * self.scale, y * self.scale);
        let xr = cos_a * x - sin_a * y;
        let yr = sin_a * x + cos_a * y;
        (xr + self.tx, yr + self.ty)
    }
}

/// A single keyboard-driven edit step
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditAction {
    ScaleUp,
    ScaleDown,
    RotateCcw,
    RotateCw,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

/// Key-to-edit table; keys are matched case-insensitively
pub const KEY_BINDINGS: &[(&str, EditAction)] = &[
    ("+", EditAction::ScaleUp),
    ("=", EditAction::ScaleUp),
    ("-", EditAction::ScaleDown),
    ("_", EditAction::ScaleDown),
    ("q", EditAction::RotateCcw),
    ("e", EditAction::RotateCw),
    ("w", EditAction::MoveUp),
    ("s", EditAction::MoveDown),
    ("a", EditAction::MoveLeft),
    ("d", EditAction::MoveRight),
];

/// Looks up the edit bound to a key character, if any
pub fn action_for_key(key: &str) -> Option<EditAction> {
    let key = key.to_ascii_lowercase();
    KEY_BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, action)| *action)
}

impl EditAction {
    /// Applies one edit step, returning the new transform. Scale is
    /// clamped to [`SCALE_MIN`]; the angle is wrapped to (-360, 360).
    pub fn apply(self, t: Transform) -> Transform {
        match self {
            EditAction::ScaleUp => Transform {
                scale: t.scale + SCALE_STEP,
                ..t
            },
            EditAction::ScaleDown => Transform {
                scale: (t.scale - SCALE_STEP).max(SCALE_MIN),
                ..t
            },
            EditAction::RotateCcw => Transform {
                angle_deg: wrap_angle(t.angle_deg + ROT_STEP_DEG),
                ..t
            },
            EditAction::RotateCw => Transform {
                angle_deg: wrap_angle(t.angle_deg - ROT_STEP_DEG),
                ..t
            },
            EditAction::MoveUp => Transform {
                ty: t.ty + MOVE_STEP,
                ..t
            },
            EditAction::MoveDown => Transform {
                ty: t.ty - MOVE_STEP,
                ..t
            },
            EditAction::MoveLeft => Transform {
                tx: t.tx - MOVE_STEP,
                ..t
            },
            EditAction::MoveRight => Transform {
                tx: t.tx + MOVE_STEP,
                ..t
            },
        }
    }
}

fn wrap_angle(deg: f64) -> f64 {
    if deg >= 360.0 {
        deg - 360.0
    } else if deg <= -360.0 {
        deg + 360.0
    } else {
        deg
    }
}
