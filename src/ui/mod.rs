mod browser;
mod help;
pub mod picker;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    browser::render(app, frame);

    if let Some(picker) = &app.picker {
        picker::render(picker, frame);
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
