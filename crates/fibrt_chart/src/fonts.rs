use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

/// The family every text element of the chart is drawn with.
pub const FONT_FAMILY: &str = "sans-serif";

/// Regular sans-serif fonts at their usual locations on Linux, macOS and Windows.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Registers the first usable system font as [`FONT_FAMILY`].
///
/// The lookup only happens once per process. Returns `false` when no font could be
/// found, in which case the chart has to be drawn without any text.
pub fn register_system_font() -> bool {
    *FONT_REGISTERED.get_or_init(|| {
        for path in FONT_CANDIDATES {
            let Ok(bytes) = fs_err::read(path) else {
                continue;
            };

            // The font registry only accepts data that lives for the rest of the process.
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
                Ok(()) => {
                    tracing::debug!("drawing chart text with '{path}'");
                    return true;
                }
                Err(_) => tracing::debug!("'{path}' could not be parsed as a font"),
            }
        }

        tracing::warn!("no usable system font was found, the chart is drawn without text");
        false
    })
}
