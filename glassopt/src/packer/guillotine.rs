use std::cmp::Reverse;

use crate::entities::{Piece, Placement, Sheet, SheetResult};
use crate::geometry::primitives::Rect;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;

/// Packs pieces onto a single sheet by recursively guillotine-cutting its free area.
///
/// The free area is kept as a flat list of rectangles which are never merged.
/// Each placed piece consumes one free rectangle, whose leftover is split into at most two new ones.
#[derive(Clone, Debug)]
pub struct GuillotinePacker {
    pub sheet: Sheet,
    free_regions: Vec<Rect>,
    placements: Vec<Placement>,
}

/// A free region able to hold a piece, together with how well it fits
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionFit {
    /// Index of the region in [`GuillotinePacker::free_regions`]
    pub index: usize,
    /// Area left over in the region after placing the piece
    pub area_fit: f64,
    /// Shortest of the two leftover edge lengths
    pub short_side_fit: f64,
}

/// Direction of the first cut through the leftover of a free region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut along the right edge of the piece: the right strip keeps the full height of the region
    Vertical,
    /// Cut along the bottom edge of the piece: the bottom strip keeps the full width of the region
    Horizontal,
}

impl GuillotinePacker {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            free_regions: vec![sheet.rect()],
            placements: vec![],
        }
    }

    /// Places as many `pieces` as possible, largest area first.
    /// Returns the pieces that could not be placed, in the order they were processed.
    pub fn pack(&mut self, pieces: Vec<Piece>) -> Vec<Piece> {
        let mut unplaced = vec![];

        //stable: pieces of equal area keep their input order
        let sorted = pieces
            .into_iter()
            .sorted_by_key(|p| Reverse(OrderedFloat(p.area())));

        for piece in sorted {
            match self.find_free_region(piece.w, piece.h) {
                Some(fit) => self.place(&piece, fit),
                None => {
                    trace!("[GPK] no free region holds piece {} ({}x{})", piece.id, piece.w, piece.h);
                    unplaced.push(piece);
                }
            }
        }

        debug_assert!(assertions::placements_are_valid(&self.sheet, &self.placements));
        debug_assert!(assertions::free_regions_are_unoccupied(
            &self.free_regions,
            &self.placements
        ));

        unplaced
    }

    /// Best Area Fit: among the free regions that can hold a `w` x `h` piece without rotation,
    /// returns the one with the least leftover area, then the shortest leftover side.
    /// On a full tie, the region encountered first wins.
    pub fn find_free_region(&self, w: f32, h: f32) -> Option<RegionFit> {
        self.free_regions
            .iter()
            .enumerate()
            .filter(|(_, region)| region.fits(w, h))
            .map(|(index, region)| RegionFit {
                index,
                area_fit: f64::from(region.w) * f64::from(region.h) - f64::from(w) * f64::from(h),
                short_side_fit: f64::min(
                    f64::from(region.w) - f64::from(w),
                    f64::from(region.h) - f64::from(h),
                ),
            })
            .min_by_key(|fit| (OrderedFloat(fit.area_fit), OrderedFloat(fit.short_side_fit)))
    }

    fn place(&mut self, piece: &Piece, fit: RegionFit) {
        let region = self.free_regions.swap_remove(fit.index);
        let placement = Placement::new(piece, region.x, region.y);

        let sub_regions = split_free_region(region, placement.rect);
        debug_assert!(assertions::split_tiles_region(
            &region,
            &placement.rect,
            &sub_regions
        ));
        self.free_regions.extend(sub_regions.into_iter().flatten());

        debug!(
            "[GPK] placed piece {} ({}x{}) at ({}, {}), {} free regions",
            piece.id,
            piece.w,
            piece.h,
            region.x,
            region.y,
            self.free_regions.len()
        );
        self.placements.push(placement);
    }

    pub fn free_regions(&self) -> &[Rect] {
        &self.free_regions
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Consumes the packer, producing the snapshot of the sheet.
    pub fn into_result(self) -> SheetResult {
        SheetResult::new(self.sheet, self.placements)
    }
}

/// Chooses the axis of the guillotine cut: the larger leftover strip is kept as a single wide rectangle.
pub fn split_axis(free: &Rect, used: &Rect) -> SplitAxis {
    let right_w = free.w - used.w;
    let bottom_h = free.h - used.h;
    match right_w > bottom_h {
        true => SplitAxis::Vertical,
        false => SplitAxis::Horizontal,
    }
}

/// Splits the leftover of `free` after `used` (anchored at the origin of `free`) has been taken out.
/// Returns the new free regions in insertion order; zero-area slivers are `None`.
pub fn split_free_region(free: Rect, used: Rect) -> [Option<Rect>; 2] {
    if free.same_size(&used) {
        return [None, None];
    }

    let right_w = free.w - used.w;
    let bottom_h = free.h - used.h;

    match split_axis(&free, &used) {
        SplitAxis::Vertical => {
            let right = Rect::non_degenerate(free.x + used.w, free.y, right_w, free.h);
            let bottom = Rect::non_degenerate(free.x, free.y + used.h, used.w, bottom_h);
            [right, bottom]
        }
        SplitAxis::Horizontal => {
            let bottom = Rect::non_degenerate(free.x, free.y + used.h, free.w, bottom_h);
            let right = Rect::non_degenerate(free.x + used.w, free.y, right_w, used.h);
            [bottom, right]
        }
    }
}
