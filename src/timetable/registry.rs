// Compiled-in weekly grid templates ("batches").
//
// The portal publishes two fixed layouts but never says which one a student
// follows; that is inferred downstream from the slot codes in their course
// list. Theory letters A..G appear in both layouts at shifted positions, so
// only the P-numbered practical codes (unique to one layout each) can tell
// the two apart.

use std::sync::OnceLock;

use crate::models::{Batch, SlotRow};

fn row(day: u8, slots: [&str; 10]) -> SlotRow {
    SlotRow {
        day,
        day_order: format!("Day {}", day),
        slots: slots.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_batches() -> Vec<Batch> {
    vec![
        Batch {
            batch: "1".to_string(),
            rows: vec![
                row(1, ["A", "A", "F", "F", "G", "P6", "P7", "P8", "P9", "P10"]),
                row(2, ["P11", "P12", "P13", "P14", "P15", "B", "B", "G", "G", "A"]),
                row(3, ["C", "C", "A", "D", "B", "P26", "P27", "P28", "P29", "P30"]),
                row(4, ["P31", "P32", "P33", "P34", "P35", "D", "D", "B", "E", "C"]),
                row(5, ["E", "E", "C", "F", "D", "P46", "P47", "P48", "P49", "P50"]),
            ],
        },
        Batch {
            batch: "2".to_string(),
            rows: vec![
                row(1, ["P1", "P2", "P3", "P4", "P5", "A", "A", "F", "F", "G"]),
                row(2, ["B", "B", "G", "G", "A", "P16", "P17", "P18", "P19", "P20"]),
                row(3, ["P21", "P22", "P23", "P24", "P25", "C", "C", "A", "D", "B"]),
                row(4, ["D", "D", "B", "E", "C", "P36", "P37", "P38", "P39", "P40"]),
                row(5, ["P41", "P42", "P43", "P44", "P45", "E", "E", "C", "F", "D"]),
            ],
        },
    ]
}

/// Candidate templates in priority order: batch "1" is always tried before
/// batch "2". Built once, then shared read-only across concurrent requests.
pub fn candidate_batches() -> &'static [Batch] {
    static BATCHES: OnceLock<Vec<Batch>> = OnceLock::new();
    BATCHES.get_or_init(build_batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_grid_dimensions() {
        let batches = candidate_batches();
        assert_eq!(batches.len(), 2);
        for batch in batches {
            assert_eq!(batch.rows.len(), 5, "batch {} must have 5 day rows", batch.batch);
            for (i, row) in batch.rows.iter().enumerate() {
                assert_eq!(row.day, (i + 1) as u8);
                assert_eq!(row.slots.len(), 10, "day {} must have 10 periods", row.day);
            }
        }
    }

    #[test]
    fn test_priority_order() {
        let batches = candidate_batches();
        assert_eq!(batches[0].batch, "1");
        assert_eq!(batches[1].batch, "2");
    }

    #[test]
    fn test_practical_codes_are_batch_unique() {
        let batches = candidate_batches();
        let practicals = |b: &Batch| -> HashSet<String> {
            b.rows
                .iter()
                .flat_map(|r| r.slots.iter())
                .filter(|s| s.starts_with('P'))
                .cloned()
                .collect()
        };
        let p1 = practicals(&batches[0]);
        let p2 = practicals(&batches[1]);
        assert!(p1.is_disjoint(&p2), "P codes must not repeat across batches");
        // together they cover P1..P50
        let mut all: HashSet<String> = p1.union(&p2).cloned().collect();
        for n in 1..=50 {
            assert!(all.remove(&format!("P{}", n)), "P{} missing from templates", n);
        }
        assert!(all.is_empty());
    }

    #[test]
    fn test_theory_letters_shared_across_batches() {
        let batches = candidate_batches();
        for letter in ["A", "B", "C", "D", "E", "F", "G"] {
            for batch in batches {
                let found = batch
                    .rows
                    .iter()
                    .any(|r| r.slots.iter().any(|s| s == letter));
                assert!(found, "theory slot {} absent from batch {}", letter, batch.batch);
            }
        }
    }
}
