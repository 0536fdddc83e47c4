/// SVG preview backend
///
/// Shows the frame geometry with text placed at its anchors. LaTeX markup is
/// written out verbatim; this is a layout aid, not a typesetter.

use std::fmt::Write as _;

use super::paint::{Anchor, PaintCommand};
use super::{num, Backend, Scene};
use crate::content::{Alignment, Justification};
use crate::{Error, Result};

/// Font size of preview text in points
const PREVIEW_FONT_SIZE: f64 = 8.0;

pub struct SvgBackend;

impl Backend for SvgBackend {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, scene: &Scene) -> Result<String> {
        write_svg(scene).map_err(|e| Error::RenderError(e.to_string()))
    }
}

fn write_svg(scene: &Scene) -> std::result::Result<String, std::fmt::Error> {
    let (w, h) = (scene.width_pt, scene.height_pt);
    let flip = |y: f64| h - y;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}pt" height="{}pt" viewBox="0 0 {} {}">"#,
        num(w),
        num(h),
        num(w),
        num(h)
    )?;
    writeln!(out, "<title>{}</title>", escape(&scene.name))?;

    for cmd in &scene.commands {
        match cmd {
            PaintCommand::Polygon { points, fill, stroke } => {
                let pts = points
                    .iter()
                    .map(|p| format!("{},{}", num(p.x), num(flip(p.y))))
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(out, r#"<polygon points="{}" fill="{}""#, pts, fill.to_hex())?;
                if let Some(s) = stroke {
                    write!(
                        out,
                        r#" stroke="{}" stroke-width="{}" stroke-linejoin="miter""#,
                        s.color.to_hex(),
                        num(s.width)
                    )?;
                }
                writeln!(out, "/>")?;
            }
            PaintCommand::Text { at, text, anchor, color, angle } => {
                let (x, y) = (num(at.x), num(flip(at.y)));
                let (text_anchor, baseline) = anchor_attrs(*anchor);
                let fill = color.unwrap_or(scene.text_color).to_hex();
                write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="{}""#,
                    x,
                    y,
                    num(PREVIEW_FONT_SIZE),
                    fill,
                    text_anchor,
                    baseline
                )?;
                if *angle != 0.0 {
                    // SVG y points down, so a counter-clockwise page rotation is negative here.
                    write!(out, r#" transform="rotate({} {} {})""#, num(-angle), x, y)?;
                }
                writeln!(out, ">{}</text>", escape(text))?;
            }
        }
    }

    writeln!(out, "</svg>")?;
    Ok(out)
}

fn anchor_attrs(anchor: Anchor) -> (&'static str, &'static str) {
    let text_anchor = match anchor.justification {
        Justification::Left => "start",
        Justification::Center => "middle",
        Justification::Right => "end",
    };
    let baseline = match anchor.alignment {
        Alignment::Top => "hanging",
        Alignment::Center => "central",
        Alignment::Baseline => "alphabetic",
        Alignment::Bottom => "text-after-edge",
    };
    (text_anchor, baseline)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crate::palette::Color;

    fn scene(commands: Vec<PaintCommand>) -> Scene {
        Scene {
            name: "a & b".into(),
            width_pt: 100.0,
            height_pt: 200.0,
            preamble: Vec::new(),
            text_color: Color::BLACK,
            commands,
        }
    }

    #[test]
    fn y_axis_is_flipped() {
        let cmd = PaintCommand::Polygon {
            points: vec![Point::new(0.0, 0.0), Point::new(100.0, 50.0)],
            fill: Color::WHITE,
            stroke: None,
        };
        let svg = SvgBackend.render(&scene(vec![cmd])).unwrap();
        assert!(svg.contains(r##"<polygon points="0.000,200.000 100.000,150.000" fill="#ffffff"/>"##));
        assert!(svg.contains("<title>a &amp; b</title>"));
    }

    #[test]
    fn rotated_text_is_escaped_and_anchored() {
        let cmd = PaintCommand::Text {
            at: Point::new(10.0, 190.0),
            text: "x < y".into(),
            anchor: Anchor::new(Alignment::Top, Justification::Right),
            color: None,
            angle: 3.0,
        };
        let svg = SvgBackend.render(&scene(vec![cmd])).unwrap();
        assert!(svg.contains(r#"text-anchor="end" dominant-baseline="hanging""#));
        assert!(svg.contains(r#"transform="rotate(-3.000 10.000 10.000)""#));
        assert!(svg.contains(">x &lt; y</text>"));
    }
}
