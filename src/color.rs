//! Color notation matching in editor text.
//!
//! The plugin seeds termpicker with the color under the cursor (or inside a
//! visual selection) and writes the picked value back over the same span.
//! This module finds those spans.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::OnceLock;

const HEX: &str = r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{4}|[0-9a-fA-F]{3})\b";
const RGB: &str = r"(?i:\brgba?\(\s*\d{1,3}%?\s*,\s*\d{1,3}%?\s*,\s*\d{1,3}%?\s*(?:,\s*(?:\d*\.)?\d+%?\s*)?\))";
const HSL: &str = r"(?i:\bhsla?\(\s*(?:\d*\.)?\d+(?:deg)?\s*,\s*(?:\d*\.)?\d+%\s*,\s*(?:\d*\.)?\d+%\s*(?:,\s*(?:\d*\.)?\d+%?\s*)?\))";

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("(?P<hex>{HEX})|(?P<rgb>{RGB})|(?P<hsl>{HSL})"))
            .expect("Invalid color regex pattern")
    })
}

/// Which notation a color literal is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorNotation {
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    Hex,
    /// `rgb(...)` / `rgba(...)`
    Rgb,
    /// `hsl(...)` / `hsla(...)`
    Hsl,
}

/// A color literal found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMatch {
    pub notation: ColorNotation,
    /// The literal exactly as written.
    pub text: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl ColorMatch {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// `text` with this literal replaced by `replacement`.
    ///
    /// `None` if `text` no longer holds this literal at the same span, e.g.
    /// the line was edited while the picker was open.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nvim_termpicker::color::first_color;
    ///
    /// let line = "color: #fff;";
    /// let found = first_color(line).unwrap();
    /// assert_eq!(
    ///     found.replace_in(line, "#112233").as_deref(),
    ///     Some("color: #112233;")
    /// );
    /// assert!(found.replace_in("color: red;", "#112233").is_none());
    /// ```
    pub fn replace_in(&self, text: &str, replacement: &str) -> Option<String> {
        if text.get(self.span())? != self.text {
            return None;
        }
        let before = text.get(..self.start)?;
        let after = text.get(self.end..)?;

        let mut out = String::with_capacity(before.len() + replacement.len() + after.len());
        out.push_str(before);
        out.push_str(replacement);
        out.push_str(after);
        Some(out)
    }
}

/// Every color literal in `text`, left to right.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::color::{find_colors, ColorNotation};
///
/// let found = find_colors("border: 1px solid #333; background: rgb(10, 20, 30)");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].notation, ColorNotation::Hex);
/// assert_eq!(found[1].text, "rgb(10, 20, 30)");
/// ```
pub fn find_colors(text: &str) -> Vec<ColorMatch> {
    color_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let (notation, m) = if let Some(m) = caps.name("hex") {
                // no lookbehind in regex: reject `issue#123`, `foo_#abc`
                if text[..m.start()]
                    .chars()
                    .next_back()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
                {
                    return None;
                }
                (ColorNotation::Hex, m)
            } else if let Some(m) = caps.name("rgb") {
                (ColorNotation::Rgb, m)
            } else {
                (ColorNotation::Hsl, caps.name("hsl")?)
            };
            Some(ColorMatch {
                notation,
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// The first color literal in `text`, typically a visual selection.
pub fn first_color(text: &str) -> Option<ColorMatch> {
    find_colors(text).into_iter().next()
}

/// The color literal covering byte column `col` of `line`.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::color::color_at;
///
/// let line = "a { color: hsl(120, 50%, 50%) }";
/// assert_eq!(color_at(line, 15).unwrap().text, "hsl(120, 50%, 50%)");
/// assert!(color_at(line, 2).is_none());
/// ```
pub fn color_at(line: &str, col: usize) -> Option<ColorMatch> {
    find_colors(line)
        .into_iter()
        .find(|m| m.span().contains(&col))
}
