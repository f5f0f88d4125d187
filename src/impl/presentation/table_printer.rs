use iso_currency::Currency;

use crate::{entities::ChartPayload, errors::PnlError};

use super::utils::format_amount;

/// Renders a chart payload as a plain-text table: one row per series, one
/// column per month.
pub struct PnlTablePrinter;

impl Default for PnlTablePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl PnlTablePrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, payload: &ChartPayload) -> Result<String, PnlError> {
        let currency = Currency::from_code(&payload.currency).ok_or_else(|| {
            PnlError::InvalidCurrencyCode {
                code: payload.currency.clone(),
            }
        })?;

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(payload.chart.series.len() + 1);
        rows.push(
            ["Stack".to_string(), "Series".to_string()]
                .into_iter()
                .chain(payload.chart.xaxis.iter().cloned())
                .collect(),
        );
        for series in &payload.chart.series {
            rows.push(
                [series.stack.clone(), series.name.clone()]
                    .into_iter()
                    .chain(series.data.iter().map(|v| format_amount(*v, currency)))
                    .collect(),
            );
        }

        let num_columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..num_columns)
            .map(|c| {
                rows.iter()
                    .filter_map(|r| r.get(c))
                    .map(|s| s.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = format!("Monthly PnL ({})\n\n", currency.code());
        for row in &rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    // Labels left-aligned, amounts right-aligned.
                    if c < 2 {
                        format!("{:<width$}", cell, width = widths[c])
                    } else {
                        format!("{:>width$}", cell, width = widths[c])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            output.push_str(line.trim_end());
            output.push('\n');
        }
        Ok(output)
    }
}
