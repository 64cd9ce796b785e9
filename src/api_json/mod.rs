use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Input for a timetable resolution request
///
/// # Expected JSON shape:
/// ```json
/// {
///   "reg_number": "RA2111003010001",
///   "courses": [
///     {
///       "code": "CSE102",
///       "title": "Computer Networks Lab",
///       "slot_type": "Practical",
///       "slot": "P6-P7",
///       "room": "TP-702"
///     }
///   ]
/// }
/// ```
///
/// # Fields:
/// - `reg_number`: registration number, opaque identifier (required,
///   non-empty)
/// - `courses`: enrolled courses exactly as the course source produced
///   them; order matters because later courses overwrite earlier ones on
///   slot collisions
#[derive(Debug, Serialize, Deserialize)]
pub struct TimetableRequest {
    pub reg_number: String,
    pub courses: Vec<Course>,
}

pub fn parse_json_input(json_str: &str) -> Result<TimetableRequest, serde_json::Error> {
    serde_json::from_str::<TimetableRequest>(json_str)
}

/// Parses and sanity-checks a request body. The course list itself is
/// trusted as produced upstream (malformed slot codes just never match a
/// template position), but an empty registration number is rejected here
/// so the resolver never has to care.
pub fn parse_request(json_str: &str) -> Result<TimetableRequest, Box<dyn std::error::Error>> {
    let request = parse_json_input(json_str)?;
    if request.reg_number.trim().is_empty() {
        return Err("reg_number is required".into());
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_full() {
        let json_data = r#"
        {
            "reg_number": "RA2111003010001",
            "courses": [
                {
                    "code": "CSE102",
                    "title": "Computer Networks Lab",
                    "slot_type": "Practical",
                    "slot": "P6-P7",
                    "room": "TP-702"
                },
                {
                    "code": "CSE101",
                    "title": "Operating Systems",
                    "slot_type": "Theory",
                    "slot": "A",
                    "room": "TP-101"
                }
            ]
        }
        "#;

        let request = parse_request(json_data).expect("must parse a full request");
        assert_eq!(request.reg_number, "RA2111003010001");
        assert_eq!(request.courses.len(), 2);
        assert_eq!(request.courses[0].slot, "P6-P7");
        assert_eq!(request.courses[1].slot_type, "Theory");
    }

    #[test]
    fn test_parse_request_empty_course_list_is_valid() {
        let json_data = r#"{"reg_number": "RA2111003010002", "courses": []}"#;
        let request = parse_request(json_data).expect("empty course list is valid input");
        assert!(request.courses.is_empty());
    }

    #[test]
    fn test_parse_request_rejects_blank_reg_number() {
        let json_data = r#"{"reg_number": "  ", "courses": []}"#;
        assert!(parse_request(json_data).is_err());
    }

    #[test]
    fn test_parse_request_rejects_missing_fields() {
        assert!(parse_request(r#"{"courses": []}"#).is_err());
        assert!(parse_request(r#"{"reg_number": "RA1"}"#).is_err());
    }
}
