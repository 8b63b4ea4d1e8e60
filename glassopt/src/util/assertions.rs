use crate::entities::{Piece, Placement, Sheet, SheetResult};
use crate::geometry::geo_traits::AlmostCollidesWith;
use crate::geometry::primitives::Rect;
use crate::stats::placed_area;
use crate::util::FPA;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every placement lies within the sheet and no two placements overlap.
pub fn placements_are_valid(sheet: &Sheet, placements: &[Placement]) -> bool {
    let sheet_rect = sheet.rect();
    for p in placements {
        if !sheet_rect.almost_contains(&p.rect) {
            error!("placement of {} exceeds the sheet: {:?}", p.piece_id, p.rect);
            return false;
        }
    }
    for (a, b) in placements.iter().tuple_combinations() {
        if a.rect.almost_collides_with(&b.rect) {
            error!(
                "placements of {} and {} overlap: {:?}, {:?}",
                a.piece_id, b.piece_id, a.rect, b.rect
            );
            return false;
        }
    }
    true
}

/// No free region overlaps a placed piece.
pub fn free_regions_are_unoccupied(free_regions: &[Rect], placements: &[Placement]) -> bool {
    free_regions
        .iter()
        .cartesian_product(placements.iter())
        .all(|(fr, p)| !fr.almost_collides_with(&p.rect))
}

/// The sub-regions produced by a guillotine cut, together with the used rectangle,
/// tile the original free region exactly: all contained, pairwise disjoint, areas summing up.
pub fn split_tiles_region(free: &Rect, used: &Rect, sub_regions: &[Option<Rect>; 2]) -> bool {
    let parts = sub_regions.iter().flatten().chain([used]).collect_vec();

    let contained = parts.iter().all(|r| free.almost_contains(r));
    let disjoint = parts
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.almost_collides_with(b));
    let area_sum = parts.iter().map(|r| r.area()).sum::<f32>();

    contained && disjoint && FPA(area_sum) == FPA(free.area())
}

/// The statistics of a sheet agree with its placements.
pub fn sheet_stats_consistent(result: &SheetResult) -> bool {
    let usage = placed_area(&result.placements) / result.sheet.area();
    result.stats.placed_count == result.placements.len()
        && FPA(result.stats.usage) == FPA(usage)
        && FPA(result.stats.usage + result.stats.waste) == FPA(1.0)
}

/// Every input piece is accounted for exactly once: placed on a sheet, oversized or left unplaced.
pub fn pieces_conserved(
    input: &[Piece],
    sheets: &[SheetResult],
    oversized: &[Piece],
    unplaced: &[Piece],
) -> bool {
    let placed_ids = sheets
        .iter()
        .flat_map(|s| s.placements.iter().map(|p| &p.piece_id));
    let other_ids = oversized.iter().chain(unplaced).map(|p| &p.id);

    let accounted = placed_ids.chain(other_ids).sorted().collect_vec();
    let expected = input.iter().map(|p| &p.id).sorted().collect_vec();

    accounted == expected
}
