// SPDX-License-Identifier: MPL-2.0
//! Photo records and the filename rules that produce them.
//!
//! A [`Photo`] is built once per load from a bare filename. Everything the
//! gallery shows about a photo (its asset path, its display title) is derived
//! here, so the grid and the lightbox never look at filenames directly.

/// Extensions recognized as displayable images.
///
/// Matching is case-sensitive: only the all-lowercase and all-uppercase
/// spellings are accepted, so `photo.Jpg` is rejected.
pub const IMAGE_EXTENSIONS: [&str; 10] = [
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".JPG", ".JPEG", ".PNG", ".GIF", ".WEBP",
];

/// Directory, relative to the gallery root, that holds every image asset.
pub const IMAGES_DIR: &str = "images";

/// A single displayable photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// 1-based position in the canonical list.
    pub id: usize,
    /// Asset path relative to the gallery root (`images/<filename>`).
    pub src: String,
    /// Display name derived from the filename.
    pub title: String,
    pub date: String,
    pub caption: String,
}

impl Photo {
    /// Builds the photo for `filename` found at position `index` of the
    /// filtered filename list.
    #[must_use]
    pub fn from_filename(filename: &str, index: usize) -> Self {
        Self {
            id: index + 1,
            src: format!("{IMAGES_DIR}/{filename}"),
            title: title_from_filename(filename),
            date: String::new(),
            caption: String::new(),
        }
    }

    /// Text shown when the image itself cannot be displayed.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.title
    }
}

/// Returns true if `name` ends with one of [`IMAGE_EXTENSIONS`].
#[must_use]
pub fn is_image_file(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Removes the text after the last `.`, unless that dot starts the name.
#[must_use]
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos > 0 => &filename[..pos],
        _ => filename,
    }
}

/// Derives a human-readable title from a filename.
///
/// `IMG_5751.JPG` becomes `5751` and `sunset-beach_2024.png` becomes
/// `Sunset Beach 2024`. When nothing is left after stripping, the filename
/// itself is returned unchanged.
#[must_use]
pub fn title_from_filename(filename: &str) -> String {
    let spaced = collapse_separators(strip_extension(filename));
    let base = strip_img_prefix(&spaced).trim();

    if base.is_empty() {
        return filename.to_string();
    }

    title_case(base)
}

/// Replaces every run of `_` and `-` with a single space.
fn collapse_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if c == '_' || c == '-' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Drops a leading `IMG` (any case) together with the whitespace after it.
fn strip_img_prefix(input: &str) -> &str {
    match input.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("img") => input[3..].trim_start(),
        _ => input,
    }
}

/// Uppercases the first alphanumeric character of each whitespace-delimited
/// word and lowercases the rest of the word. Separating whitespace is kept.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_word_char = false;
    for c in input.chars() {
        if c.is_whitespace() {
            seen_word_char = false;
            out.push(c);
        } else if !seen_word_char && c.is_alphanumeric() {
            seen_word_char = true;
            out.extend(c.to_uppercase());
        } else if seen_word_char {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Keeps the image filenames of `names`, in order, and turns each one into a
/// [`Photo`] whose id is its 1-based position among the kept names.
#[must_use]
pub fn photos_from_filenames(names: &[String]) -> Vec<Photo> {
    names
        .iter()
        .filter(|name| is_image_file(name))
        .enumerate()
        .map(|(index, name)| Photo::from_filename(name, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn recognizes_lowercase_and_uppercase_extensions() {
        for name in ["a.jpg", "a.jpeg", "a.png", "a.gif", "a.webp"] {
            assert!(is_image_file(name), "{name} should be accepted");
            assert!(is_image_file(&name.to_uppercase()));
        }
    }

    #[test]
    fn rejects_mixed_case_and_unknown_extensions() {
        assert!(!is_image_file("photo.Jpg"));
        assert!(!is_image_file("photo.tiff"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("jpg"));
    }

    #[test]
    fn strip_extension_keeps_leading_dot_names() {
        assert_eq!(strip_extension(".hidden"), ".hidden");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("plain"), "plain");
    }

    #[test]
    fn img_prefix_is_removed() {
        assert_eq!(title_from_filename("IMG_5751.JPG"), "5751");
        assert_eq!(title_from_filename("img-0042.png"), "0042");
        assert_eq!(title_from_filename("Img 7 beach.jpg"), "7 Beach");
    }

    #[test]
    fn separators_become_single_spaces_and_words_are_capitalized() {
        assert_eq!(
            title_from_filename("sunset-beach_2024.png"),
            "Sunset Beach 2024"
        );
        assert_eq!(title_from_filename("MOUNTAIN__-__lake.webp"), "Mountain Lake");
    }

    #[test]
    fn clean_titles_are_unchanged() {
        for title in ["Sunset Beach 2024", "5751", "Mountain Lake"] {
            assert_eq!(title_from_filename(title), title);
        }
    }

    #[test]
    fn empty_base_falls_back_to_filename() {
        assert_eq!(title_from_filename("IMG.JPG"), "IMG.JPG");
        assert_eq!(title_from_filename("__.png"), "__.png");
    }

    #[test]
    fn photo_fields_are_derived_from_filename() {
        let photo = Photo::from_filename("IMG_5751.JPG", 0);
        assert_eq!(photo.id, 1);
        assert_eq!(photo.src, "images/IMG_5751.JPG");
        assert_eq!(photo.title, "5751");
        assert!(photo.date.is_empty());
        assert!(photo.caption.is_empty());
    }

    #[test]
    fn photos_keep_input_order_and_renumber_after_filtering() {
        let photos = photos_from_filenames(&names(&["b.png", "readme.md", "a.JPG", "c.Gif"]));
        let srcs: Vec<&str> = photos.iter().map(|p| p.src.as_str()).collect();
        assert_eq!(srcs, vec!["images/b.png", "images/a.JPG"]);
        assert_eq!(photos[0].id, 1);
        assert_eq!(photos[1].id, 2);
    }
}
