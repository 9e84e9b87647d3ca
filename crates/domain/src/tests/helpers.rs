// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BreakInterval, BreakType, ExtractedBreaks};

pub fn create_interval(at: &str, break_type: BreakType) -> BreakInterval {
    BreakInterval::new(at, break_type)
}

pub fn create_breaks(hb1: Option<&str>, b: Option<&str>, hb2: Option<&str>) -> ExtractedBreaks {
    ExtractedBreaks {
        hb1: hb1.map(String::from),
        b: b.map(String::from),
        hb2: hb2.map(String::from),
    }
}

/// A well-formed AM shift day: HB1 10:00, B 12:00-12:30, HB2 14:00.
pub fn create_standard_intervals() -> Vec<BreakInterval> {
    vec![
        create_interval("09:45:00", BreakType::In),
        create_interval("10:00:00", BreakType::Hb1),
        create_interval("10:15:00", BreakType::In),
        create_interval("12:00:00", BreakType::B),
        create_interval("12:15:00", BreakType::B),
        create_interval("12:30:00", BreakType::In),
        create_interval("14:00:00", BreakType::Hb2),
    ]
}
