//! Console table rendering using the [`tabled`] crate.

use tabled::{Table, Tabled};

use crate::domain::distribution::{DistributionTable, PresentedPoint};

/// One display row.
#[derive(Debug, Clone, Tabled)]
pub struct DistributionRow {
    #[tabled(rename = "X")]
    pub index: u32,
    #[tabled(rename = "Porcentaje (%)")]
    pub percentage: String,
    #[tabled(rename = "Cajas estimadas")]
    pub allocated_quantity: String,
}

impl From<&PresentedPoint> for DistributionRow {
    fn from(point: &PresentedPoint) -> Self {
        Self {
            index: point.index,
            percentage: format!("{:.2}", point.percentage),
            allocated_quantity: format!("{:.0}", point.allocated_quantity),
        }
    }
}

/// Formats the table followed by the totals line.
///
/// Column headers match the spreadsheet export.
pub fn render_distribution_table(table: &DistributionTable) -> String {
    let rows: Vec<DistributionRow> = table.presented.iter().map(DistributionRow::from).collect();
    format!("{}\n{}", Table::new(rows), table.total_line())
}
