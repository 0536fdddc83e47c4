/// LaTeX markup for poster text: font styles, minipages, images and
/// wrapped figures.

use serde::{Deserialize, Serialize};

/// Font shape command wrapped around styled text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Upright,
    SmallCaps,
    Italic,
    Bold,
    BoldSmallCaps,
    SansBold,
}

/// Size, leading and shape of one text style
///
/// Without a size the text keeps the size of its surroundings and only the
/// shape command is written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Defaults to the size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading: Option<f64>,
    pub shape: Shape,
}

impl FontSpec {
    pub const fn new(size: f64, leading: f64, shape: Shape) -> Self {
        Self {
            size: Some(size),
            leading: Some(leading),
            shape,
        }
    }

    /// Shape only, no size change.
    pub const fn shaped(shape: Shape) -> Self {
        Self {
            size: None,
            leading: None,
            shape,
        }
    }

    pub fn format(&self, text: &str) -> String {
        let shaped = match self.shape {
            Shape::Upright => format!("{{{}}}", text),
            Shape::SmallCaps => format!("\\textsc{{{}}}", text),
            Shape::Italic => format!("\\textit{{{}}}", text),
            Shape::Bold => format!("\\textbf{{{}}}", text),
            Shape::BoldSmallCaps => format!("\\textbf{{\\textsc{{{}}}}}", text),
            Shape::SansBold => format!("\\textsf{{\\textbf{{{}}}}}", text),
        };
        format!("{}{}", self.size_command(), shaped)
    }

    /// `\fontsize` switch, empty when no size is set.
    pub fn size_command(&self) -> String {
        match self.size {
            Some(size) => format!(
                "\\fontsize{{{}}}{{{}}}\\selectfont",
                size,
                self.leading.unwrap_or(size)
            ),
            None => String::new(),
        }
    }
}

/// Font specs for every text style on a poster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub title: FontSpec,
    pub subtitle: FontSpec,
    pub author: FontSpec,
    pub section: FontSpec,
    pub body: FontSpec,
    pub caption: FontSpec,
    pub reference: FontSpec,
    pub reference_heading: FontSpec,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: FontSpec::new(36.0, 36.0, Shape::SmallCaps),
            subtitle: FontSpec::new(16.0, 16.0, Shape::SmallCaps),
            author: FontSpec::new(12.0, 12.0, Shape::Italic),
            section: FontSpec::new(16.0, 16.0, Shape::SmallCaps),
            body: FontSpec::new(12.0, 14.0, Shape::Upright),
            caption: FontSpec::new(10.0, 12.0, Shape::Upright),
            reference: FontSpec::new(12.0, 12.0, Shape::Italic),
            reference_heading: FontSpec::new(20.0, 20.0, Shape::SmallCaps),
        }
    }
}

/// Fixed-width block of body text.
pub fn minipage(text: &str, width_in: f64, body: &FontSpec) -> String {
    format!(
        "\\begin{{minipage}}{{{}in}} {} {} \\end{{minipage}}",
        inches(width_in),
        body.size_command(),
        text
    )
}

pub fn image(file: &str, width_in: f64) -> String {
    format!("\\includegraphics[width={}in]{{{}}}", inches(width_in), file)
}

/// Side of the text a wrapped figure floats on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    #[serde(rename = "l", alias = "left")]
    Left,
    #[serde(rename = "r", alias = "right")]
    Right,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Side::Left => "l",
            Side::Right => "r",
        }
    }
}

/// Roughly square figure `lines` text lines tall that body text flows around.
/// `width_factor` widens or narrows the reserved box relative to its height.
pub fn wrap_image(file: &str, lines: u32, side: Side, width_factor: f64) -> String {
    let h = lines as f64;
    let graphic = format!("\\includegraphics[height={}\\baselineskip]{{{}}}", h - 0.5, file);
    format!(
        "\\begin{{wrapfigure}}[{}]{{{}}}{{{}\\baselineskip}}\n\\vspace{{-\\baselineskip}}%\n{}\n\\end{{wrapfigure}} \n",
        lines,
        side.as_str(),
        width_factor * h - 0.7,
        graphic
    )
}

/// Forced line break with extra space, then a new paragraph.
pub fn paragraph_break() -> &'static str {
    "\\\\*[2ex] \n\n"
}

/// `_y_` label used by the layout grid overlay.
pub fn grid_marker(y: f64) -> String {
    format!("\\_{}\\_", y)
}

/// Physical widths are written with a fixed precision so output is stable.
fn inches(v: f64) -> String {
    format!("{:.4}", v)
}
