use crate::entities::{Instance, Placement, SheetResult};
use crate::io::ext_repr::{
    ExtInstance, ExtPiece, ExtPlacement, ExtSheet, ExtSheetLayout, ExtSheetStats, ExtSolution,
};
use crate::packer::PackSolution;
use itertools::Itertools;
use std::time::Instant;

/// Exports a [`PackSolution`] by composing an [`ExtSolution`] from it.
/// `epoch` is the instant the run was started; the run time is measured up to the solution's time stamp.
pub fn export(instance: &Instance, solution: &PackSolution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        sheets: solution
            .sheets
            .iter()
            .map(|s| export_sheet(s, instance))
            .collect(),
        usage: solution.usage(),
        oversized_pieces: solution.oversized.iter().map(|p| p.id.to_string()).collect(),
        unplaced_pieces: solution.unplaced.iter().map(|p| p.id.to_string()).collect(),
        termination: solution.termination,
        run_time_ms: solution.time_stamp.duration_since(epoch).as_millis() as u64,
    }
}

pub fn export_sheet(sheet: &SheetResult, instance: &Instance) -> ExtSheetLayout {
    ExtSheetLayout {
        width: sheet.width(),
        height: sheet.height(),
        placements: export_placements(&sheet.placements, instance),
        statistics: ExtSheetStats {
            usage: sheet.stats.usage,
            waste: sheet.stats.waste,
            placed_count: sheet.stats.placed_count,
        },
    }
}

/// Exports a set of placements to a vector of [`ExtPlacement`].
/// Labels are looked up in the instance's demands.
pub fn export_placements(placements: &[Placement], instance: &Instance) -> Vec<ExtPlacement> {
    placements
        .iter()
        .map(|p| {
            let demand_id = &p.piece_id.demand_id;
            ExtPlacement {
                piece_id: p.piece_id.to_string(),
                demand_id: demand_id.clone(),
                label: instance.demand(demand_id).and_then(|d| d.label.clone()),
                x: p.rect.x,
                y: p.rect.y,
                width: p.rect.w,
                height: p.rect.h,
            }
        })
        .collect_vec()
}

/// Converts an instance back into its external representation
pub fn export_instance(instance: &Instance) -> ExtInstance {
    ExtInstance {
        name: instance.name.clone(),
        sheet: ExtSheet {
            width: instance.sheet.width,
            height: instance.sheet.height,
        },
        pieces: instance
            .demands
            .iter()
            .map(|d| ExtPiece {
                id: d.id.clone(),
                width: d.w,
                height: d.h,
                quantity: d.quantity as u64,
                label: d.label.clone(),
            })
            .collect_vec(),
    }
}
