/// Standalone LaTeX/TikZ document backend
///
/// The document is sized to the page and draws every command inside one
/// `tikzpicture` with 1bp units, so scene coordinates are used as-is.

use std::fmt::Write as _;

use super::paint::{Anchor, PaintCommand};
use super::{num, Backend, Scene};
use crate::content::{Alignment, Justification};
use crate::layout::Point;
use crate::palette::Color;
use crate::{Error, Result};

pub struct TikzBackend;

impl Backend for TikzBackend {
    fn extension(&self) -> &'static str {
        "tex"
    }

    fn render(&self, scene: &Scene) -> Result<String> {
        write_document(scene).map_err(|e| Error::RenderError(e.to_string()))
    }
}

fn write_document(scene: &Scene) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\\documentclass{{standalone}}")?;
    for line in &scene.preamble {
        writeln!(out, "{}", line)?;
    }
    let Color(r, g, b) = scene.text_color;
    writeln!(out, "\\definecolor{{postertext}}{{rgb}}{{{},{},{}}}", num(r), num(g), num(b))?;
    writeln!(out, "\\begin{{document}}")?;
    writeln!(out, "\\color{{postertext}}%")?;
    writeln!(out, "\\begin{{tikzpicture}}[x=1bp, y=1bp]")?;
    writeln!(
        out,
        "\\useasboundingbox (0,0) rectangle ({},{});",
        num(scene.width_pt),
        num(scene.height_pt)
    )?;

    for cmd in &scene.commands {
        match cmd {
            PaintCommand::Polygon { points, fill, stroke } => {
                let path = path(points);
                match stroke {
                    Some(s) => writeln!(
                        out,
                        "\\filldraw[fill={}, draw={}, line width={}bp, line join=miter] {};",
                        color(*fill),
                        color(s.color),
                        num(s.width),
                        path
                    )?,
                    None => writeln!(out, "\\fill[fill={}] {};", color(*fill), path)?,
                }
            }
            PaintCommand::Text { at, text, anchor, color: c, angle } => {
                let mut opts = format!("anchor={}, inner sep=0, outer sep=0", anchor_name(*anchor));
                if *angle != 0.0 {
                    write!(opts, ", rotate={}", num(*angle))?;
                }
                if let Some(c) = c {
                    write!(opts, ", text={}", color(*c))?;
                }
                writeln!(out, "\\node[{}] at ({},{}) {{{}}};", opts, num(at.x), num(at.y), text)?;
            }
        }
    }

    writeln!(out, "\\end{{tikzpicture}}")?;
    writeln!(out, "\\end{{document}}")?;
    Ok(out)
}

fn path(points: &[Point]) -> String {
    let mut parts: Vec<String> = points
        .iter()
        .map(|p| format!("({},{})", num(p.x), num(p.y)))
        .collect();
    parts.push("cycle".to_string());
    parts.join(" -- ")
}

fn color(c: Color) -> String {
    format!("{{rgb,1:red,{};green,{};blue,{}}}", num(c.0), num(c.1), num(c.2))
}

/// TikZ anchor for a block's alignment and justification.
pub fn anchor_name(anchor: Anchor) -> &'static str {
    use Alignment::*;
    use Justification::*;
    match (anchor.alignment, anchor.justification) {
        (Top, Left) => "north west",
        (Top, Justification::Center) => "north",
        (Top, Right) => "north east",
        (Alignment::Center, Left) => "west",
        (Alignment::Center, Justification::Center) => "center",
        (Alignment::Center, Right) => "east",
        (Baseline, Left) => "base west",
        (Baseline, Justification::Center) => "base",
        (Baseline, Right) => "base east",
        (Bottom, Left) => "south west",
        (Bottom, Justification::Center) => "south",
        (Bottom, Right) => "south east",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::Stroke;

    fn scene(commands: Vec<PaintCommand>) -> Scene {
        Scene {
            name: "t".into(),
            width_pt: 612.0,
            height_pt: 792.0,
            preamble: vec!["\\usepackage{tikz}".into()],
            text_color: Color(0.1, 0.1, 0.1),
            commands,
        }
    }

    #[test]
    fn document_is_sized_to_page() {
        let doc = TikzBackend.render(&scene(Vec::new())).unwrap();
        assert!(doc.starts_with("\\documentclass{standalone}\n\\usepackage{tikz}\n"));
        assert!(doc.contains("\\useasboundingbox (0,0) rectangle (612.000,792.000);"));
        assert!(doc.contains("\\definecolor{postertext}{rgb}{0.100,0.100,0.100}"));
        assert!(doc.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn stroked_polygon_is_closed_and_mitred() {
        let cmd = PaintCommand::Polygon {
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            fill: Color::WHITE,
            stroke: Some(Stroke { color: Color::BLACK, width: 0.25 }),
        };
        let doc = TikzBackend.render(&scene(vec![cmd])).unwrap();
        assert!(doc.contains(
            "\\filldraw[fill={rgb,1:red,1.000;green,1.000;blue,1.000}, draw={rgb,1:red,0.000;green,0.000;blue,0.000}, line width=0.250bp, line join=miter] (0.000,0.000) -- (1.000,0.000) -- (1.000,1.000) -- cycle;"
        ));
    }

    #[test]
    fn text_nodes_carry_anchor_rotation_and_colour() {
        let cmd = PaintCommand::Text {
            at: Point::new(10.0, 20.0),
            text: "\\textsc{Hi}".into(),
            anchor: Anchor::new(Alignment::Bottom, Justification::Left),
            color: Some(Color::RED),
            angle: 2.5,
        };
        let doc = TikzBackend.render(&scene(vec![cmd])).unwrap();
        assert!(doc.contains(
            "\\node[anchor=south west, inner sep=0, outer sep=0, rotate=2.500, text={rgb,1:red,1.000;green,0.000;blue,0.000}] at (10.000,20.000) {\\textsc{Hi}};"
        ));
    }

    #[test]
    fn anchors_cover_all_combinations() {
        let alignments = [Alignment::Top, Alignment::Center, Alignment::Baseline, Alignment::Bottom];
        let justifications = [Justification::Left, Justification::Center, Justification::Right];
        let names: Vec<&str> = alignments
            .iter()
            .flat_map(|&a| justifications.iter().map(move |&j| anchor_name(Anchor::new(a, j))))
            .collect();
        assert_eq!(
            names,
            [
                "north west", "north", "north east",
                "west", "center", "east",
                "base west", "base", "base east",
                "south west", "south", "south east",
            ]
        );
    }
}
