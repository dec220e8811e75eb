//! Shields-style SVG badges.
//!
//! Widths are estimated from per-character advances of Verdana 11px, which is
//! close enough for labels made of ASCII words and percentages.

use std::fmt::Write;

use crate::core::engine::traits::BadgeRenderer;
use crate::types::{BadgeError, BadgeSpec, BadgeStyle};
use crate::utils::escape_xml;

const FONT_FAMILY: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";
const LABEL_BACKGROUND: &str = "#555";

/// Badge color for a score, from red to bright green
pub fn score_color(value: u8) -> &'static str {
    match value {
        95.. => "#4c1",       // brightgreen
        90..=94 => "#97ca00", // green
        75..=89 => "#a4a61d", // yellowgreen
        60..=74 => "#dfb317", // yellow
        40..=59 => "#fe7d37", // orange
        _ => "#e05d44",       // red
    }
}

struct Geometry {
    height: u32,
    radius: u32,
    gradient: Option<(&'static str, &'static str)>,
    shadow: bool,
    uppercase: bool,
    font_size: u32,
    padding: f64,
    label_background: &'static str,
    label_foreground: &'static str,
}

fn geometry(style: BadgeStyle) -> Geometry {
    let base = Geometry {
        height: 20,
        radius: 3,
        gradient: Some((".1", ".1")),
        shadow: true,
        uppercase: false,
        font_size: 11,
        padding: 10.0,
        label_background: LABEL_BACKGROUND,
        label_foreground: "#fff",
    };
    match style {
        BadgeStyle::Flat => base,
        BadgeStyle::FlatSquare => Geometry {
            radius: 0,
            gradient: None,
            shadow: false,
            ..base
        },
        BadgeStyle::Plastic => Geometry {
            height: 18,
            radius: 4,
            gradient: Some((".7", ".5")),
            ..base
        },
        BadgeStyle::ForTheBadge => Geometry {
            height: 28,
            radius: 0,
            gradient: None,
            shadow: false,
            uppercase: true,
            font_size: 10,
            padding: 24.0,
            ..base
        },
        BadgeStyle::Social => Geometry {
            radius: 2,
            gradient: None,
            shadow: false,
            label_background: "#fcfcfc",
            label_foreground: "#333",
            ..base
        },
    }
}

fn char_width(c: char) -> f64 {
    match c {
        'i' | 'l' | 'j' | '.' | ',' | ':' | '\'' | '|' | '!' => 3.5,
        'f' | 't' | 'r' | ' ' | '-' | '(' | ')' | 'I' => 4.5,
        'm' | 'w' => 10.0,
        'M' | 'W' => 11.0,
        '%' => 11.5,
        '0'..='9' => 7.0,
        c if c.is_ascii_uppercase() => 7.5,
        _ => 6.5,
    }
}

fn text_width(text: &str, uppercase: bool) -> f64 {
    if uppercase {
        // letter-spacing of 1.25 plus wider glyphs
        text.chars().map(|c| char_width(c) + 1.25).sum()
    } else {
        text.chars().map(char_width).sum()
    }
}

/// Renders shields-like badges for every supported style
#[derive(Debug, Clone, Default)]
pub struct SvgBadgeRenderer;

impl SvgBadgeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl BadgeRenderer for SvgBadgeRenderer {
    fn render(&self, spec: &BadgeSpec) -> Result<String, BadgeError> {
        if spec.value > 100 {
            return Err(BadgeError::ValueOutOfRange(spec.value));
        }
        if spec.label.trim().is_empty() {
            return Err(BadgeError::EmptyLabel);
        }

        let geo = geometry(spec.style);
        let (label, value) = if geo.uppercase {
            (spec.label.to_uppercase(), format!("{}%", spec.value))
        } else {
            (spec.label.clone(), format!("{}%", spec.value))
        };

        let label_width = (text_width(&label, geo.uppercase) + geo.padding).round() as u32;
        let value_width = (text_width(&value, geo.uppercase) + geo.padding).round() as u32;
        let width = label_width + value_width;
        let height = geo.height;
        let color = score_color(spec.value);
        let text_y = (height as f64 / 2.0 + geo.font_size as f64 / 2.0 - 1.5).round() as u32;
        let label_x = label_width as f64 / 2.0;
        let value_x = label_width as f64 + value_width as f64 / 2.0;
        let label = escape_xml(&label);
        let value = escape_xml(&value);

        let mut svg = String::with_capacity(1024);
        // write! into a String cannot fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" role="img" aria-label="{label}: {value}"><title>{label}: {value}</title>"#
        );
        if let Some((top, bottom)) = geo.gradient {
            let _ = write!(
                svg,
                r##"<linearGradient id="s" x2="0" y2="100%"><stop offset="0" stop-color="#bbb" stop-opacity="{top}"/><stop offset="1" stop-opacity="{bottom}"/></linearGradient>"##
            );
        }
        let _ = write!(
            svg,
            r##"<clipPath id="r"><rect width="{width}" height="{height}" rx="{radius}" fill="#fff"/></clipPath><g clip-path="url(#r)"><rect width="{label_width}" height="{height}" fill="{label_bg}"/><rect x="{label_width}" width="{value_width}" height="{height}" fill="{color}"/>"##,
            radius = geo.radius,
            label_bg = geo.label_background,
        );
        if geo.gradient.is_some() {
            let _ = write!(
                svg,
                r#"<rect width="{width}" height="{height}" fill="url(#s)"/>"#
            );
        }
        let _ = write!(
            svg,
            r#"</g><g text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{size}"{weight}>"#,
            size = geo.font_size,
            weight = if geo.uppercase {
                r#" font-weight="bold""#
            } else {
                ""
            },
        );
        for (x, text, fill) in [
            (label_x, &label, geo.label_foreground),
            (value_x, &value, "#fff"),
        ] {
            if geo.shadow {
                let _ = write!(
                    svg,
                    r##"<text x="{x}" y="{y}" fill="#010101" fill-opacity=".3">{text}</text>"##,
                    y = text_y + 1,
                );
            }
            let _ = write!(
                svg,
                r#"<text x="{x}" y="{text_y}" fill="{fill}">{text}</text>"#
            );
        }
        svg.push_str("</g></svg>");
        Ok(svg)
    }
}
