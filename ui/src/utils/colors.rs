//! Shared color constants for the UI.

use egui::Color32;
use roster_business::Status;

/// Forest green for active users.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for inactive users and error messages.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

#[inline]
pub fn status_color(status: Status) -> Color32 {
    match status {
        Status::Active => COLOR_GREEN,
        Status::Inactive => COLOR_RED,
    }
}
