// Core data structures

use serde::{Deserialize, Serialize};

/// One enrolled course as delivered by the upstream course source.
/// `slot` is the raw slot field: either a single code ("A", "P6") or
/// several codes joined by '-' when one course books multiple periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub slot_type: String,
    pub slot: String,
    pub room: String,
}

/// One day of a batch template: 10 period positions, position significant.
#[derive(Debug, Clone, Serialize)]
pub struct SlotRow {
    pub day: u8,
    pub day_order: String,
    pub slots: Vec<String>,
}

/// One candidate weekly grid template ("batch"). Immutable after startup.
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    pub batch: String,
    pub rows: Vec<SlotRow>,
}

/// A course projected onto one concrete slot code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSlot {
    pub code: String,
    pub name: String,
    pub online: bool,
    pub course_type: String,
    pub room_no: String,
    pub slot: String,
}

/// One resolved day: 10 entries aligned with the template row it came
/// from; unbooked periods serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub day: u8,
    pub table: Vec<Option<CourseSlot>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableResult {
    pub reg_number: String,
    pub batch: String,
    pub schedule: Vec<DaySchedule>,
}
