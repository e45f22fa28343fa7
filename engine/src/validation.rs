// Soft validation of ownership shares. A bad total is shown to the user, never blocks the calculation.
use shared::models::Owner;
use std::fmt;

const SHARE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareWarning {
    pub total_percent: f64,
    pub difference: f64, // total - 100; negative when part of the property is unassigned
}

impl fmt::Display for ShareWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.difference < 0.0 {
            write!(
                f,
                "Ownership shares add up to {}% ({}% unassigned)",
                self.total_percent, -self.difference
            )
        } else {
            write!(
                f,
                "Ownership shares add up to {}% ({}% over)",
                self.total_percent, self.difference
            )
        }
    }
}

pub fn share_total(owners: &[Owner]) -> f64 {
    owners.iter().map(|o| o.share_percent).sum()
}

pub fn validate_shares(owners: &[Owner]) -> Option<ShareWarning> {
    let total_percent = share_total(owners);
    let difference = total_percent - 100.0;
    if difference.abs() <= SHARE_TOLERANCE {
        return None;
    }
    tracing::warn!(total_percent, "Ownership shares do not add up to 100%");
    Some(ShareWarning {
        total_percent,
        difference,
    })
}
