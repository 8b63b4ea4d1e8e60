use crate::entities::{Instance, SheetResult};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

pub fn sheet_to_svg(
    sheet: &SheetResult,
    instance: &Instance,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let bbox = sheet.sheet.rect();
    let vbox = bbox.scale(1.10);

    let theme = &options.theme;

    let stroke_width = f32::min(vbox.w, vbox.h) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information on above the left top of the sheet
        let label_content = format!(
            "width: {:.3} | height: {:.3} | usage: {:.3}% | {}",
            bbox.w,
            bbox.h,
            sheet.stats.usage * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x)
            .set("y", bbox.y - 0.5 * 0.025 * f32::min(bbox.w, bbox.h))
            .set("font-size", f32::min(bbox.w, bbox.h) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw sheet
    let sheet_group = {
        let title = Title::new(format!(
            "sheet, {}x{}, {} pieces",
            bbox.w, bbox.h, sheet.stats.placed_count
        ));
        Group::new()
            .set("id", "sheet")
            .add(svg_util::rect(
                &bbox,
                &[
                    ("fill", &*format!("{}", theme.sheet_fill)),
                    (
                        "stroke",
                        &*format!("{}", svg_util::change_brightness(theme.sheet_fill, 0.5)),
                    ),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(title)
    };

    //draw pieces
    let pieces_group = sheet.placements.iter().enumerate().fold(
        Group::new().set("id", "pieces"),
        |group, (i, placement)| {
            let r = &placement.rect;
            let label = instance
                .demand(&placement.piece_id.demand_id)
                .and_then(|d| d.label.as_deref());
            let title = match label {
                Some(label) => format!(
                    "piece {} ({}), {}",
                    placement.piece_id,
                    label,
                    svg_util::size_label(r)
                ),
                None => format!("piece {}, {}", placement.piece_id, svg_util::size_label(r)),
            };

            let mut piece_group = Group::new()
                .set("id", format!("piece_{i}"))
                .add(Title::new(title))
                .add(svg_util::rect(
                    r,
                    &[
                        ("fill", &*format!("{}", theme.piece_fill)),
                        ("stroke", &*format!("{}", theme.piece_stroke)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                ));

            if options.piece_labels {
                let (cx, cy) = r.centroid();
                piece_group = piece_group.add(
                    Text::new(svg_util::size_label(r))
                        .set("x", cx)
                        .set("y", cy)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("font-size", f32::min(r.w, r.h) * 0.2)
                        .set("font-family", "monospace")
                        .set("fill", format!("{}", theme.label_fill)),
                );
            }
            group.add(piece_group)
        },
    );

    let vbox_svg = (vbox.x, vbox.y, vbox.w, vbox.h);

    Document::new()
        .set("viewBox", vbox_svg)
        .add(sheet_group)
        .add(pieces_group)
        .add(label)
}
