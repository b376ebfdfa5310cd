//! Weight-class resolution.
//!
//! Maps a bodyweight to the human-readable class label for a federation's
//! boundary table. Pound labels re-express the same kg thresholds rather than
//! using an independent table, so metric and imperial labels always agree on
//! the bucket for a given bodyweight.

use crate::meet::{Entry, MeetInfo, WeightUnit};

const KG_TO_LB: f64 = 2.204_622_62;

/// Resolve the weight-class label for a bodyweight.
///
/// `boundaries` are ascending kg breakpoints; the smallest boundary at or
/// above the bodyweight wins, and anything heavier than the top boundary
/// falls into the open class (`"120+"` style). A zero bodyweight means
/// weigh-in has not happened yet and resolves to an empty label.
pub fn resolve(boundaries: &[f64], bodyweight_kg: f64, unit: WeightUnit) -> String {
    if bodyweight_kg == 0.0 {
        return String::new();
    }

    let bucket = boundaries.iter().find(|&&b| bodyweight_kg <= b);
    match (bucket, boundaries.last()) {
        (Some(&b), _) => format_boundary(b, unit),
        (None, Some(&top)) => format!("{}+", format_boundary(top, unit)),
        (None, None) => String::new(),
    }
}

/// Resolve the label for an entry using the meet's tables and display unit.
pub fn resolve_for_entry(meet: &MeetInfo, entry: &Entry) -> String {
    resolve(
        meet.classes_for_sex(entry.sex),
        entry.bodyweight_kg,
        meet.weight_unit(),
    )
}

fn format_boundary(boundary_kg: f64, unit: WeightUnit) -> String {
    match unit {
        WeightUnit::Kg => {
            if boundary_kg.fract() == 0.0 {
                format!("{}", boundary_kg as i64)
            } else {
                format!("{:.1}", boundary_kg)
            }
        }
        // Pound labels are whole pounds by convention.
        WeightUnit::Lb => format!("{}", (boundary_kg * KG_TO_LB).round() as i64),
    }
}
