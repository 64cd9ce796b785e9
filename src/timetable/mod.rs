// Timetable resolution: infer which weekly grid template a student follows
// from their enrolled slot codes and project the course list onto it.
mod assemble;
mod registry;
mod slots;

// Re-export only the API the rest of the crate (and the tests) should use
pub use assemble::assemble_schedule;
pub use registry::candidate_batches;
pub use slots::{batch_is_relevant, expand_slot_field, map_slots_to_courses};

use crate::models::{Batch, Course, TimetableResult};

/// Tries each candidate batch in registry priority order and builds the
/// timetable from the first one whose practical codes overlap the course
/// list. Returns `None` when no batch is relevant: an all-theory enrolment
/// carries no batch signal, so there is nothing to project (absence, not an
/// error).
pub fn resolve_timetable(reg_number: &str, courses: &[Course]) -> Option<TimetableResult> {
    resolve_with_candidates(reg_number, courses, candidate_batches())
}

/// Resolves against an explicit candidate list, first relevant batch wins.
/// Split out so tests can run the resolver against custom templates.
pub fn resolve_with_candidates(
    reg_number: &str,
    courses: &[Course],
    candidates: &[Batch],
) -> Option<TimetableResult> {
    // The mapping only depends on the course list, so one build serves
    // every candidate check.
    let mapping = map_slots_to_courses(courses);

    for batch in candidates {
        if batch_is_relevant(batch, courses) {
            return Some(TimetableResult {
                reg_number: reg_number.to_string(),
                batch: batch.batch.clone(),
                schedule: assemble_schedule(batch, &mapping),
            });
        }
    }

    None
}
