use crate::entities::{Sheet, SheetResult};
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util;
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Group, Text};

/// Font size of the piece labels on a page, in mm (8pt)
const LABEL_FONT_SIZE: f32 = 2.8;
/// Estimated advance of a monospace glyph relative to the font size
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Layout of a printable cutting-guide page, all lengths in mm.
/// Defaults to A4 landscape.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Vertical space reserved above the sheet drawing for the header lines
    pub header_height: f32,
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            width: 297.0,
            height: 210.0,
            margin: 10.0,
            header_height: 20.0,
            title: "Cutting guide".to_string(),
        }
    }
}

/// Uniform scale and translation from sheet coordinates to page coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PageTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl PageTransform {
    /// Largest scale at which the sheet fits the page, centred horizontally below the header.
    pub fn fit(sheet: &Sheet, page: &PageOptions) -> Self {
        let max_w = page.width - 2.0 * page.margin;
        let max_h = page.height - 3.0 * page.margin;

        let mut scale = max_w / sheet.width;
        if sheet.height * scale > max_h {
            scale = max_h / sheet.height;
        }

        PageTransform {
            scale,
            offset_x: (page.width - sheet.width * scale) / 2.0,
            offset_y: page.margin + page.header_height,
        }
    }

    pub fn apply(&self, rect: &Rect) -> Rect {
        Rect {
            x: self.offset_x + rect.x * self.scale,
            y: self.offset_y + rect.y * self.scale,
            w: rect.w * self.scale,
            h: rect.h * self.scale,
        }
    }
}

/// Estimated printed width of `text` at the piece label font size
fn label_width(text: &str) -> f32 {
    text.chars().count() as f32 * GLYPH_WIDTH_RATIO * LABEL_FONT_SIZE
}

/// Creates one printable page per sheet, in the order of `sheets`.
pub fn cutting_guide_pages(sheets: &[SheetResult], page: &PageOptions) -> Vec<Document> {
    sheets
        .iter()
        .enumerate()
        .map(|(i, s)| cutting_guide_page(s, i, sheets.len(), page))
        .collect()
}

fn cutting_guide_page(
    sheet: &SheetResult,
    index: usize,
    n_sheets: usize,
    page: &PageOptions,
) -> Document {
    let transform = PageTransform::fit(&sheet.sheet, page);

    let header = Group::new()
        .set("id", "header")
        .add(
            Text::new(format!("{} {}/{}", page.title, index + 1, n_sheets))
                .set("x", page.margin)
                .set("y", page.margin + 0.25 * page.header_height)
                .set("font-size", 5.6)
                .set("font-family", "sans-serif"),
        )
        .add(
            Text::new(format!(
                "Sheet: {}x{} mm | Usage: {:.1}% | Pieces: {}",
                sheet.width(),
                sheet.height(),
                sheet.stats.usage * 100.0,
                sheet.stats.placed_count
            ))
            .set("x", page.margin)
            .set("y", page.margin + 0.6 * page.header_height)
            .set("font-size", 3.5)
            .set("font-family", "sans-serif"),
        );

    let outline = svg_util::rect(
        &transform.apply(&sheet.sheet.rect()),
        &[("fill", "none"), ("stroke", "black"), ("stroke-width", "0.5")],
    );

    let pieces = sheet
        .placements
        .iter()
        .fold(Group::new().set("id", "pieces"), |group, placement| {
            let r = transform.apply(&placement.rect);
            let group = group.add(svg_util::rect(
                &r,
                &[("fill", "none"), ("stroke", "black"), ("stroke-width", "0.2")],
            ));

            let label = svg_util::size_label(&placement.rect);
            match r.w > 10.0 && r.h > 5.0 && label_width(&label) < r.w {
                true => {
                    let (cx, cy) = r.centroid();
                    group.add(
                        Text::new(label)
                            .set("x", cx)
                            .set("y", cy + 1.0)
                            .set("text-anchor", "middle")
                            .set("font-size", LABEL_FONT_SIZE)
                            .set("font-family", "monospace"),
                    )
                }
                false => group,
            }
        });

    Document::new()
        .set("width", format!("{}mm", page.width))
        .set("height", format!("{}mm", page.height))
        .set("viewBox", (0.0_f32, 0.0_f32, page.width, page.height))
        .add(header)
        .add(outline)
        .add(pieces)
}
