use display_info::DisplayInfo;
use fibrt_consts::consts;
use miette::Diagnostic;
use minifb::{Window, WindowOptions};
use thiserror::Error;

use crate::ChartFrame;

const WINDOW_FPS: usize = 30;

#[derive(Debug, Error, Diagnostic)]
pub enum DisplayError {
    #[error("failed to open the chart window")]
    #[diagnostic(
        code(fibrt::display::open),
        help("showing the chart requires a graphical session")
    )]
    Open(#[source] minifb::Error),

    #[error("failed to draw the chart window")]
    Update(#[source] minifb::Error),
}

/// Presents a rendered chart to the user.
pub trait ChartDisplay {
    /// Shows `frame`, returning once the user is done looking at it.
    fn show(&mut self, frame: &ChartFrame) -> Result<(), DisplayError>;
}

/// Shows the chart in a native top-level window sized to the frame.
///
/// [`ChartDisplay::show`] blocks until the user closes the window.
#[derive(Debug, Clone)]
pub struct WindowDisplay {
    title: String,
}

impl WindowDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for WindowDisplay {
    fn default() -> Self {
        Self::new(consts::WINDOW_TITLE)
    }
}

impl ChartDisplay for WindowDisplay {
    fn show(&mut self, frame: &ChartFrame) -> Result<(), DisplayError> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;

        let mut window = Window::new(&self.title, width, height, WindowOptions::default())
            .map_err(DisplayError::Open)?;
        window.set_target_fps(WINDOW_FPS);
        if let Some(screen) = primary_screen() {
            let (x, y) = centered_position(screen, (width, height));
            window.set_position(x, y);
        }

        let buffer = frame.to_packed_rgb();
        tracing::info!("showing the chart, close the window to exit");
        while window.is_open() {
            window
                .update_with_buffer(&buffer, width, height)
                .map_err(DisplayError::Update)?;
        }

        tracing::debug!("chart window closed");
        Ok(())
    }
}

/// The position and size of a monitor in desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenArea {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Looks up the primary monitor, falling back to the first one reported.
fn primary_screen() -> Option<ScreenArea> {
    let displays = match DisplayInfo::all() {
        Ok(displays) => displays,
        Err(err) => {
            tracing::debug!("could not query the screen size, leaving window placement to the desktop: {err}");
            return None;
        }
    };
    let primary = displays
        .iter()
        .find(|display| display.is_primary)
        .or_else(|| displays.first())?;
    Some(ScreenArea {
        x: primary.x,
        y: primary.y,
        width: primary.width,
        height: primary.height,
    })
}

/// The top left corner that centers a window of `size` on `screen`. Windows larger
/// than the screen are pinned to its top left corner.
pub fn centered_position(screen: ScreenArea, size: (usize, usize)) -> (isize, isize) {
    let offset = |available: u32, used: usize| {
        (available as isize - used as isize).max(0) / 2
    };
    (
        screen.x as isize + offset(screen.width, size.0),
        screen.y as isize + offset(screen.height, size.1),
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn screen(x: i32, y: i32, width: u32, height: u32) -> ScreenArea {
        ScreenArea {
            x,
            y,
            width,
            height,
        }
    }

    #[rstest]
    #[case::full_hd(screen(0, 0, 1920, 1080), (640, 300))]
    #[case::secondary_origin(screen(1920, -200, 1280, 1024), (2240, 72))]
    #[case::exact_fit(screen(0, 0, 640, 480), (0, 0))]
    #[case::smaller_than_window(screen(10, 20, 600, 400), (10, 20))]
    fn test_centered_position(#[case] screen: ScreenArea, #[case] expected: (isize, isize)) {
        assert_eq!(centered_position(screen, (640, 480)), expected);
    }
}
