use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub const MAX_DIMENSION: f64 = 5000.0;
pub const MIN_FIT_HEIGHT: f64 = 240.0;
pub const GRID_UNIT: f64 = 8.0;
pub const DEFAULT_GAP: f64 = 24.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub const EXPECTED: &'static str = "portrait, landscape";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "portrait" => Some(Self::Portrait),
            "landscape" => Some(Self::Landscape),
            _ => None,
        }
    }

    /// Preset `(w, h)` used when a section carries no usable size.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            Self::Landscape => (720.0, 320.0),
            Self::Portrait => (448.0, 420.0),
        }
    }
}

/// Free-canvas placement as authored. Any field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SectionLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl SectionLayout {
    pub fn normalized(&self) -> NormalizedLayout {
        let orientation = self.orientation.unwrap_or_default();
        let (default_w, default_h) = orientation.default_size();

        NormalizedLayout {
            x: self.x.filter(|v| v.is_finite()).unwrap_or(0.0),
            y: self.y.filter(|v| v.is_finite()).unwrap_or(0.0),
            w: self.w.filter(|v| is_usable_size(*v)).unwrap_or(default_w),
            h: self.h.filter(|v| is_usable_size(*v)).unwrap_or(default_h),
            orientation,
        }
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn from_normalized(layout: NormalizedLayout) -> Self {
        Self {
            x: Some(layout.x),
            y: Some(layout.y),
            w: Some(layout.w),
            h: Some(layout.h),
            orientation: Some(layout.orientation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct NormalizedLayout {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub orientation: Orientation,
}

impl Default for NormalizedLayout {
    fn default() -> Self {
        SectionLayout::default().normalized()
    }
}

/// Resolves an arbitrary value into a complete layout.
pub fn normalize_layout(raw: &Value) -> NormalizedLayout {
    let Some(obj) = raw.as_object() else {
        return NormalizedLayout::default();
    };

    let number = |key: &str| obj.get(key).and_then(Value::as_f64);

    SectionLayout {
        x: number("x"),
        y: number("y"),
        w: number("w"),
        h: number("h"),
        orientation: match obj.get("orientation").and_then(Value::as_str) {
            Some("landscape") => Some(Orientation::Landscape),
            _ => Some(Orientation::Portrait),
        },
    }
    .normalized()
}

/// Height for a measured content box: rounded up to the grid and clamped
/// to `[MIN_FIT_HEIGHT, MAX_DIMENSION]`.
pub fn fit_height(measured: f64) -> f64 {
    if !measured.is_finite() {
        return MIN_FIT_HEIGHT;
    }
    let snapped = (measured / GRID_UNIT).ceil() * GRID_UNIT;
    snapped.clamp(MIN_FIT_HEIGHT, MAX_DIMENSION)
}

/// Returns `layout` with `h` replaced by the fitted height of `measured`.
pub fn auto_fit_height(layout: &SectionLayout, measured: f64) -> SectionLayout {
    let mut fitted = SectionLayout::from_normalized(layout.normalized());
    fitted.h = Some(fit_height(measured));
    fitted
}

fn is_usable_size(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_layout_is_portrait_preset() {
        let layout = normalize_layout(&json!({}));
        assert_eq!(
            layout,
            NormalizedLayout {
                x: 0.0,
                y: 0.0,
                w: 448.0,
                h: 420.0,
                orientation: Orientation::Portrait,
            }
        );
    }

    #[test]
    fn test_landscape_layout_uses_landscape_preset() {
        let layout = normalize_layout(&json!({"orientation": "landscape"}));
        assert_eq!(layout.w, 720.0);
        assert_eq!(layout.h, 320.0);
        assert_eq!(layout.x, 0.0);
        assert_eq!(layout.y, 0.0);
        assert_eq!(layout.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_unknown_orientation_is_portrait() {
        let layout = normalize_layout(&json!({"orientation": "Landscape"}));
        assert_eq!(layout.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_non_positive_sizes_fall_back_to_preset() {
        let layout = normalize_layout(&json!({"w": 0, "h": -12, "x": "10", "y": 32.5}));
        assert_eq!(layout.w, 448.0);
        assert_eq!(layout.h, 420.0);
        assert_eq!(layout.x, 0.0);
        assert_eq!(layout.y, 32.5);
    }

    #[test]
    fn test_explicit_values_survive() {
        let layout = normalize_layout(&json!({"x": 16, "y": 40, "w": 600, "h": 300}));
        assert_eq!((layout.x, layout.y, layout.w, layout.h), (16.0, 40.0, 600.0, 300.0));
    }

    #[test]
    fn test_normalize_layout_is_idempotent() {
        let once = normalize_layout(&json!({"orientation": "landscape", "h": 512}));
        let again = normalize_layout(&serde_json::to_value(once).unwrap());
        assert_eq!(once, again);
    }

    #[test]
    fn test_non_finite_typed_values_fall_back() {
        let layout = SectionLayout {
            x: Some(f64::NAN),
            w: Some(f64::INFINITY),
            ..SectionLayout::default()
        }
        .normalized();
        assert_eq!(layout.x, 0.0);
        assert_eq!(layout.w, 448.0);
    }

    #[test]
    fn test_fit_height_snaps_to_grid() {
        assert_eq!(fit_height(301.0), 304.0);
        assert_eq!(fit_height(304.0), 304.0);
    }

    #[test]
    fn test_fit_height_clamps() {
        assert_eq!(fit_height(12.0), 240.0);
        assert_eq!(fit_height(9000.0), 5000.0);
        assert_eq!(fit_height(f64::NAN), 240.0);
    }

    #[test]
    fn test_auto_fit_is_idempotent_and_keeps_other_fields() {
        let layout = SectionLayout {
            x: Some(24.0),
            orientation: Some(Orientation::Landscape),
            ..SectionLayout::default()
        };
        let once = auto_fit_height(&layout, 333.0);
        let twice = auto_fit_height(&once, 333.0);
        assert_eq!(once, twice);
        assert_eq!(once.h, Some(336.0));
        assert_eq!(once.x, Some(24.0));
        assert_eq!(once.w, Some(720.0));
    }
}
