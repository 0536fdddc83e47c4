/// Composition of layout and content into a scene

use log::{debug, info};

use super::paint::{Anchor, PaintCommand, Stroke};
use super::Scene;
use crate::config::{PosterConfig, PosterDocument};
use crate::content::markup;
use crate::content::{Alignment, Angle, Fragment, Justification, TextBlock, TextStyle};
use crate::layout::{BoundaryPolyline, PosterLayout, Rect};
use crate::palette::Color;
use crate::{Error, Result};

/// Border line width in points.
pub const BORDER_WIDTH: f64 = 0.25;

/// A laid-out region that blocks are placed into.
struct Region {
    name: String,
    rect: Rect,
    /// Share of the poster frame's width; 1 for header and footer.
    width_fraction: f64,
}

struct Composer<'a> {
    config: &'a PosterConfig,
    layout: &'a PosterLayout,
    commands: Vec<PaintCommand>,
}

/// Lay out a poster document and turn its content into paint commands.
///
/// Fails before emitting anything if the configuration or any block is
/// invalid.
pub fn compose(doc: &PosterDocument) -> Result<Scene> {
    let config = &doc.config;
    let content = &doc.content;
    config.validate()?;

    let layout = PosterLayout::compute(config.page, config.layout, content.columns.len())?;
    let blocks = content
        .header
        .iter()
        .chain(content.footer.iter())
        .chain(content.columns.iter().flat_map(|c| c.blocks.iter()));
    for block in blocks {
        validate_block(block)?;
    }

    let page = config.page;
    let inner = page.default_frame().resolve(page.rect());
    let mut composer = Composer {
        config,
        layout: &layout,
        commands: Vec::new(),
    };

    let background = layout.background.resolve(inner);
    composer.fill(&BoundaryPolyline::rectangle(), background, config.palette.page_background);

    let header = Region {
        name: "header".into(),
        rect: layout.header.resolve(inner),
        width_fraction: 1.0,
    };
    composer.bordered(&layout.header_boundary, header.rect);
    composer.place_all(&header, &content.header, config.grid)?;

    let footer = Region {
        name: "footer".into(),
        rect: layout.footer.resolve(inner),
        width_fraction: 1.0,
    };
    composer.bordered(&layout.footer_boundary, footer.rect);
    composer.place_all(&footer, &content.footer, config.grid)?;

    for (i, (col, column)) in layout.columns.iter().zip(&content.columns).enumerate() {
        let region = Region {
            name: format!("column {}", i),
            rect: col.frame.resolve(inner),
            width_fraction: col.width_fraction(),
        };
        composer.bordered(&col.boundary, region.rect);
        composer.place_all(&region, &column.blocks, config.grid || column.grid)?;
    }

    debug!(
        "composed '{}': {} paint commands",
        content.name,
        composer.commands.len()
    );

    Ok(Scene {
        name: content.name.clone(),
        width_pt: page.width_pt(),
        height_pt: page.height_pt(),
        preamble: config.preamble_lines(),
        text_color: config.palette.body_text,
        commands: composer.commands,
    })
}

fn validate_block(block: &TextBlock) -> Result<()> {
    if !block.at.iter().all(|v| v.is_finite()) {
        return Err(Error::ContentError(format!(
            "block position {:?} is not finite",
            block.at
        )));
    }
    if block.style == TextStyle::Body && !(block.width > 0.0 && block.width <= 1.0) {
        return Err(Error::ContentError(format!(
            "body width must be in (0, 1], got {}",
            block.width
        )));
    }
    for fragment in block.all_fragments() {
        match fragment {
            Fragment::Image { file, width } if !(width > 0.0) => {
                return Err(Error::ContentError(format!(
                    "image '{}' needs a positive width, got {}",
                    file, width
                )));
            }
            Fragment::WrapImage { file, lines: 0, .. } => {
                return Err(Error::ContentError(format!(
                    "wrapped image '{}' must span at least one line",
                    file
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

impl Composer<'_> {
    fn fill(&mut self, boundary: &BoundaryPolyline, rect: Rect, fill: Color) {
        self.commands.push(PaintCommand::Polygon {
            points: boundary.resolve(rect),
            fill,
            stroke: None,
        });
    }

    fn bordered(&mut self, boundary: &BoundaryPolyline, rect: Rect) {
        let palette = &self.config.palette;
        self.commands.push(PaintCommand::Polygon {
            points: boundary.resolve(rect),
            fill: palette.column_background,
            stroke: Some(Stroke {
                color: palette.stroke,
                width: BORDER_WIDTH,
            }),
        });
    }

    fn place_all(&mut self, region: &Region, blocks: &[TextBlock], grid: bool) -> Result<()> {
        for block in blocks {
            self.place(region, block)?;
        }
        if grid {
            info!("placement grid drawn over {}", region.name);
            self.grid(region);
        }
        Ok(())
    }

    fn place(&mut self, region: &Region, block: &TextBlock) -> Result<()> {
        let text = self.markup(region, block);
        let color = match &block.color {
            Some(c) => Some(self.config.palette.resolve(c)?),
            None => self.default_color(block.style),
        };
        let angle = match block.angle {
            None => 0.0,
            Some(Angle::Degrees(d)) => d,
            Some(Angle::Named(_)) => self.layout.seam_angle(),
        };
        self.commands.push(PaintCommand::Text {
            at: region.rect.at(block.at[0], block.at[1]),
            text,
            anchor: Anchor::new(block.alignment, block.justification),
            color,
            angle,
        });
        Ok(())
    }

    fn markup(&self, region: &Region, block: &TextBlock) -> String {
        let typo = &self.config.typography;
        let joined = block
            .all_fragments()
            .map(|f| self.fragment(region, f))
            .collect::<String>();
        let spec = match block.style {
            TextStyle::Plain => return joined,
            TextStyle::Body => {
                let width = self.physical_width(region, block.width);
                return markup::minipage(&joined, width, &typo.body);
            }
            TextStyle::Title => &typo.title,
            TextStyle::Subtitle => &typo.subtitle,
            TextStyle::Author => &typo.author,
            TextStyle::Section => &typo.section,
            TextStyle::Caption => &typo.caption,
            TextStyle::Reference => &typo.reference,
            TextStyle::ReferenceHeading => &typo.reference_heading,
        };
        spec.format(&joined)
    }

    fn fragment(&self, region: &Region, fragment: Fragment) -> String {
        match fragment {
            Fragment::Text { text } => text,
            Fragment::WrapImage {
                file,
                lines,
                side,
                width_factor,
            } => markup::wrap_image(&file, lines, side, width_factor),
            Fragment::Image { file, width } => {
                markup::image(&file, self.physical_width(region, width))
            }
            Fragment::Break => markup::paragraph_break().to_string(),
        }
    }

    /// Width in inches of `fraction` of the region.
    fn physical_width(&self, region: &Region, fraction: f64) -> f64 {
        let page = &self.config.page;
        page.width_in * page.inner_width_fraction() * region.width_fraction * fraction
    }

    fn default_color(&self, style: TextStyle) -> Option<Color> {
        let palette = &self.config.palette;
        match style {
            TextStyle::Title | TextStyle::Subtitle | TextStyle::ReferenceHeading => {
                Some(palette.title_text)
            }
            TextStyle::Author | TextStyle::Reference => Some(palette.author_text),
            TextStyle::Section => Some(palette.section_text),
            TextStyle::Caption => Some(palette.caption_text),
            TextStyle::Body | TextStyle::Plain => None,
        }
    }

    fn grid(&mut self, region: &Region) {
        let columns = [
            (0.0, Justification::Left),
            (0.5, Justification::Center),
            (1.0, Justification::Right),
        ];
        for i in 0..=10 {
            let y = i as f64 / 10.0;
            for (x, justification) in columns {
                self.commands.push(PaintCommand::Text {
                    at: region.rect.at(x, y),
                    text: markup::grid_marker(y),
                    anchor: Anchor::new(Alignment::Baseline, justification),
                    color: Some(self.config.palette.grid_marker),
                    angle: 0.0,
                });
            }
        }
    }
}
