// SPDX-License-Identifier: MPL-2.0
//! Window/application icon.
//! A small SVG (four photo tiles) rasterized at runtime into an RGBA icon for
//! the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="128" height="128" viewBox="0 0 128 128">
<rect width="128" height="128" rx="24" fill="#1a1a1a"/>
<rect x="16" y="16" width="44" height="44" rx="6" fill="#4d99e6"/>
<rect x="68" y="16" width="44" height="44" rx="6" fill="#e6b34d"/>
<rect x="16" y="68" width="44" height="44" rx="6" fill="#66b366"/>
<rect x="68" y="68" width="44" height="44" rx="6" fill="#cc6666"/>
</svg>"##;

/// Rasterize the icon to a 128x128 RGBA buffer.
pub fn load_window_icon() -> Option<Icon> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            log::debug!("window icon not rendered: {err}");
            return None;
        }
    };

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / orig_size.width(),
        ICON_SIZE as f32 / orig_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.take(), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders() {
        assert!(load_window_icon().is_some());
    }
}
