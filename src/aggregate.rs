use crate::types::{ComplaintRecord, CountRow, DateRange};
use std::collections::HashMap;

/// Count complaints per `(Complaint Type, Borough)` within the range.
///
/// Only rows with a successfully parsed timestamp inside the inclusive
/// window contribute; rows whose timestamp failed to parse never appear in
/// any group. Empty complaint types and boroughs are ordinary group keys,
/// not dropped rows. The result is fully sorted: count descending, then
/// complaint type ascending, then borough ascending.
pub fn count_complaints(data: &[ComplaintRecord], range: &DateRange) -> Vec<CountRow> {
    let mut map: HashMap<(String, String), u64> = HashMap::new();
    for r in data {
        let Some(created_at) = r.created_at else {
            continue;
        };
        if !range.contains(created_at) {
            continue;
        }
        let key = (r.complaint_type.clone(), r.borough.clone());
        *map.entry(key).or_default() += 1;
    }

    let mut rows: Vec<CountRow> = map
        .into_iter()
        .map(|((complaint_type, borough), count)| CountRow {
            complaint_type,
            borough,
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.complaint_type.cmp(&b.complaint_type))
            .then_with(|| a.borough.cmp(&b.borough))
    });
    rows
}
