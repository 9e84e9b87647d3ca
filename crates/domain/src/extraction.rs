// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::break_time::truncate_to_minutes;
use crate::types::{BreakInterval, BreakType, ExtractedBreaks};

/// Extracts the first start time of each break kind from an interval list.
///
/// Intervals are scanned in input order. The first `HB1`, `B` and `HB2`
/// interval found wins; later duplicates are ignored here (the full break
/// duration check looks at every `B` interval separately). `IN` intervals are
/// skipped. Start times are truncated to `HH:MM`.
///
/// # Arguments
///
/// * `intervals` - The agent's intervals for one day, in any order
#[must_use]
pub fn extract_break_times(intervals: &[BreakInterval]) -> ExtractedBreaks {
    let mut breaks: ExtractedBreaks = ExtractedBreaks::default();

    for interval in intervals {
        let slot: &mut Option<String> = match interval.break_type {
            BreakType::Hb1 => &mut breaks.hb1,
            BreakType::B => &mut breaks.b,
            BreakType::Hb2 => &mut breaks.hb2,
            BreakType::In => continue,
        };

        if slot.is_none() {
            *slot = Some(truncate_to_minutes(&interval.interval_start).to_string());
        }
    }

    breaks
}
