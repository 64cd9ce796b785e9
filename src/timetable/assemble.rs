// Positional projection of a resolved batch onto the mapped courses.

use std::collections::HashMap;

use crate::models::{Batch, CourseSlot, DaySchedule};

/// Walks the batch day by day, period by period, picking the mapped course
/// for each position or leaving it explicitly empty. Output rows align one
/// to one with the template rows.
pub fn assemble_schedule(
    batch: &Batch,
    mapping: &HashMap<String, CourseSlot>,
) -> Vec<DaySchedule> {
    batch
        .rows
        .iter()
        .map(|row| DaySchedule {
            day: row.day,
            table: row
                .slots
                .iter()
                .map(|slot| mapping.get(slot).cloned())
                .collect(),
        })
        .collect()
}
