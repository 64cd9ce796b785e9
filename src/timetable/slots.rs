// Slot expansion and the course -> slot mapping.

use std::collections::HashMap;

use crate::models::{Batch, Course, CourseSlot};

/// Splits a raw slot field into its constituent codes. A ranged field joins
/// several codes with '-' ("A-F-G" books the same course into A, F and G);
/// a field without the delimiter is already a single code. Tokens pass
/// through untrimmed and unvalidated: a malformed code simply never matches
/// a template position later on.
pub fn expand_slot_field(slot: &str) -> Vec<String> {
    if slot.contains('-') {
        slot.split('-').map(|s| s.to_string()).collect()
    } else {
        vec![slot.to_string()]
    }
}

/// Builds the slot -> course lookup for a course list. Only depends on the
/// course list, never on which batch is being tested.
///
/// Insertion follows course-list order; when two courses expand to the same
/// code the later one overwrites the earlier (last write wins, by policy).
/// A course held in an "online" room (case-insensitive match on the room
/// text) is labelled "Practical" regardless of its declared slot type.
pub fn map_slots_to_courses(courses: &[Course]) -> HashMap<String, CourseSlot> {
    let mut mapping: HashMap<String, CourseSlot> = HashMap::new();

    for course in courses {
        let online = course.room.to_lowercase().contains("online");
        let course_type = if online {
            "Practical".to_string()
        } else {
            course.slot_type.clone()
        };

        for slot in expand_slot_field(&course.slot) {
            mapping.insert(
                slot.clone(),
                CourseSlot {
                    code: course.code.clone(),
                    name: course.title.clone(),
                    online,
                    course_type: course_type.clone(),
                    room_no: course.room.clone(),
                    slot,
                },
            );
        }
    }

    mapping
}

/// True iff some course books a P-numbered practical code present in this
/// batch's grid. Theory letters appear in every batch, so only practical
/// codes carry a signal about which layout the student follows.
pub fn batch_is_relevant(batch: &Batch, courses: &[Course]) -> bool {
    for course in courses {
        for code in expand_slot_field(&course.slot) {
            if !code.starts_with('P') {
                continue;
            }
            if batch
                .rows
                .iter()
                .any(|row| row.slots.iter().any(|s| *s == code))
            {
                return true;
            }
        }
    }
    false
}
