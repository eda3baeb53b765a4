use crate::error::PageError;

/// Scroll distance in px over which the header fades in.
pub const FADE_DISTANCE: f64 = 200.0;
pub const MAX_OPACITY: f64 = 0.8;

/// Alpha of the fixed header's black background. Always within [0, MAX_OPACITY].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct HeaderOpacity(f64);

impl HeaderOpacity {
    pub fn from_scroll_y(scroll_y: f64) -> Result<Self, PageError> {
        if !scroll_y.is_finite() {
            return Err(PageError::InvalidScrollOffset(scroll_y));
        }
        Ok(Self((scroll_y / FADE_DISTANCE).clamp(0.0, MAX_OPACITY)))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn background_style(self) -> String {
        format!("background-color: rgba(0, 0, 0, {});", self.value())
    }
}
