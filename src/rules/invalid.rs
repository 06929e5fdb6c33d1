//! Values that could not be loaded, in any table including the fallback table.

use crate::{issues::InvalidValueIssue, rules::CoverageContext};

pub fn check_invalid_values(ctx: &CoverageContext) -> Vec<InvalidValueIssue> {
    ctx.tables
        .values()
        .flat_map(|table| {
            table
                .invalid_values
                .iter()
                .map(|(value, location)| InvalidValueIssue {
                    location: location.clone(),
                    key: value.key.clone(),
                    problem: value.problem,
                })
        })
        .collect()
}
