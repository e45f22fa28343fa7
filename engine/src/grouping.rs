// Display grouping: several owners can be shown as one aggregate row.
// Grouping works on copies of the report rows; the report itself is never touched.
use serde::{Deserialize, Serialize};
use shared::models::{DistributionReport, OwnerExpenseBreakdown, OwnerNetProceeds};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayGroup {
    pub label: String,
    pub members: Vec<String>,
}

// A row that can absorb other rows of the same kind.
pub trait GroupableRow: Clone {
    fn owner_name(&self) -> &str;
    fn relabel(&mut self, label: &str);
    fn absorb(&mut self, other: &Self);
}

impl GroupableRow for OwnerExpenseBreakdown {
    fn owner_name(&self) -> &str {
        &self.name
    }

    fn relabel(&mut self, label: &str) {
        self.name = label.to_string();
    }

    fn absorb(&mut self, other: &Self) {
        self.share_percent += other.share_percent;
        self.commission += other.commission;
        self.capital_gains_tax += other.capital_gains_tax;
        self.withholding += other.withholding;
        self.notarial_fees += other.notarial_fees;
        self.honoraria += other.honoraria;
        self.vat_on_honoraria += other.vat_on_honoraria;
        self.total_expenses += other.total_expenses;
    }
}

impl GroupableRow for OwnerNetProceeds {
    fn owner_name(&self) -> &str {
        &self.name
    }

    fn relabel(&mut self, label: &str) {
        self.name = label.to_string();
    }

    fn absorb(&mut self, other: &Self) {
        self.gross += other.gross;
        self.total_expenses += other.total_expenses;
        self.capital_gains_tax += other.capital_gains_tax;
        self.net_amount += other.net_amount;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow<T> {
    pub members: Vec<String>, // Owners folded into this row, in report order
    pub row: T,
}

impl<T: GroupableRow> DisplayRow<T> {
    pub fn label(&self) -> &str {
        self.row.owner_name()
    }

    pub fn is_group(&self) -> bool {
        self.members.len() > 1
    }
}

// Rows of owners named in a group collapse into one row at the position of the first member found.
// Names that match no row are ignored; an owner listed in two groups joins the first.
pub fn group_rows<T: GroupableRow>(rows: &[T], groups: &[DisplayGroup]) -> Vec<DisplayRow<T>> {
    let mut out: Vec<DisplayRow<T>> = Vec::with_capacity(rows.len());
    let mut slot_of_group: HashMap<usize, usize> = HashMap::new();

    for row in rows {
        let name = row.owner_name();
        let group_idx = groups
            .iter()
            .position(|g| g.members.iter().any(|m| m == name));

        match group_idx {
            Some(idx) => match slot_of_group.get(&idx) {
                Some(&slot) => {
                    out[slot].row.absorb(row);
                    out[slot].members.push(name.to_string());
                }
                None => {
                    let mut grouped = row.clone();
                    grouped.relabel(&groups[idx].label);
                    slot_of_group.insert(idx, out.len());
                    out.push(DisplayRow {
                        members: vec![name.to_string()],
                        row: grouped,
                    });
                }
            },
            None => out.push(DisplayRow {
                members: vec![name.to_string()],
                row: row.clone(),
            }),
        }
    }
    out
}

pub fn group_expense_rows(
    report: &DistributionReport,
    groups: &[DisplayGroup],
) -> Vec<DisplayRow<OwnerExpenseBreakdown>> {
    group_rows(&report.per_owner_expenses, groups)
}

pub fn group_net_rows(
    report: &DistributionReport,
    groups: &[DisplayGroup],
) -> Vec<DisplayRow<OwnerNetProceeds>> {
    group_rows(&report.per_owner_net, groups)
}
