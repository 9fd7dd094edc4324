// SPDX-License-Identifier: MPL-2.0
//! Generated "image not found" graphic.
//!
//! The graphic is an SVG built at runtime and rasterized with resvg, so no
//! asset file has to ship with the binary. The localized "Image not found"
//! text is drawn by the widget layer on top of it.

use iced::widget::image;
use resvg::usvg;

const FILL: &str = "#333333";
const INK: &str = "#666666";

/// SVG source for a `width` x `height` placeholder: a dark card with a
/// picture glyph in the middle.
#[must_use]
pub fn placeholder_svg(width: u32, height: u32) -> String {
    let w = width as f32;
    let h = height as f32;
    let glyph = w.min(h) * 0.3;
    let left = (w - glyph) / 2.0;
    let top = (h - glyph) / 2.0;
    let right = left + glyph;
    let bottom = top + glyph;
    let sun_r = glyph * 0.1;

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
<rect width="{width}" height="{height}" fill="{FILL}"/>
<rect x="{left}" y="{top}" width="{glyph}" height="{glyph}" rx="{radius}" fill="none" stroke="{INK}" stroke-width="{stroke}"/>
<circle cx="{sun_x}" cy="{sun_y}" r="{sun_r}" fill="{INK}"/>
<path d="M {left} {bottom} L {peak_x} {peak_y} L {right} {bottom} Z" fill="{INK}"/>
</svg>"#,
        radius = glyph * 0.08,
        stroke = (glyph * 0.05).max(1.0),
        sun_x = left + glyph * 0.72,
        sun_y = top + glyph * 0.28,
        peak_x = left + glyph * 0.4,
        peak_y = top + glyph * 0.45,
    )
}

/// Rasterizes `svg` into a `width` x `height` RGBA buffer.
/// Returns `None` if parsing or rendering fails.
#[must_use]
pub fn rasterize(svg: &str, width: u32, height: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).ok()?;
    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(width, height)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

/// Placeholder handle of the given size. Falls back to a flat card if the
/// SVG cannot be rendered.
#[must_use]
pub fn placeholder_handle(width: u32, height: u32) -> image::Handle {
    let pixels = rasterize(&placeholder_svg(width, height), width, height).unwrap_or_else(|| {
        log::warn!("placeholder rendering failed, using flat fill");
        [0x33, 0x33, 0x33, 0xFF].repeat((width * height) as usize)
    });
    image::Handle::from_rgba(width, height, pixels)
}

/// Placeholders for both display sizes, built once at startup.
#[derive(Debug, Clone)]
pub struct Placeholders {
    pub cell: image::Handle,
    pub viewer: image::Handle,
}

impl Placeholders {
    #[must_use]
    pub fn new(cell: (u32, u32), viewer: (u32, u32)) -> Self {
        Self {
            cell: placeholder_handle(cell.0, cell.1),
            viewer: placeholder_handle(viewer.0, viewer.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_declares_requested_size() {
        let svg = placeholder_svg(400, 300);
        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
    }

    #[test]
    fn rasterized_buffer_matches_dimensions() {
        let pixels = rasterize(&placeholder_svg(40, 30), 40, 30).expect("render failed");
        assert_eq!(pixels.len(), 40 * 30 * 4);
        // Top-left corner is the opaque card fill.
        assert_eq!(&pixels[..4], &[0x33, 0x33, 0x33, 0xFF]);
    }

    #[test]
    fn invalid_svg_does_not_rasterize() {
        assert!(rasterize("<not-svg", 10, 10).is_none());
    }
}
