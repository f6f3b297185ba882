use analytics::CorrelationResult;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use indicators::IndicatorReport;

fn fmt_value(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// The last `tail_rows` dates of the indicator report.
pub fn indicator_table(report: &IndicatorReport, tail_rows: usize) -> Table {
    let mut table = new_table();

    let mut header = vec![Cell::new("Date"), Cell::new("Close")];
    header.extend(
        report
            .smas
            .iter()
            .map(|(window, _)| Cell::new(format!("SMA {window}"))),
    );
    header.extend([
        Cell::new(format!("RSI {}", report.rsi_period)),
        Cell::new("Zone"),
        Cell::new("MACD"),
        Cell::new("Signal"),
        Cell::new("Histogram"),
    ]);
    table.set_header(header);

    let start = report.close.len().saturating_sub(tail_rows);
    for row in report.rows().skip(start) {
        let zone = row
            .zone
            .map(|zone| zone.to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut cells = vec![Cell::new(row.date), numeric(row.close)];
        cells.extend(row.smas.iter().map(|value| numeric(*value)));
        cells.extend([
            numeric(row.rsi),
            Cell::new(zone),
            numeric(row.macd),
            numeric(row.signal),
            numeric(row.histogram),
        ]);
        table.add_row(cells);
    }
    table
}

fn numeric(value: Option<f64>) -> Cell {
    Cell::new(fmt_value(value)).set_alignment(CellAlignment::Right)
}

/// Coefficient, p-value, window, and the plain-language reading.
pub fn correlation_table(result: &CorrelationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Analysis Period".to_string(),
        format!("{} to {}", result.start_date, result.end_date),
    ]);
    table.add_row(vec!["Trading Days".to_string(), result.sample_size.to_string()]);
    table.add_row(vec![
        "Correlation".to_string(),
        format!("{:.4}", result.coefficient),
    ]);
    table.add_row(vec!["P-value".to_string(), format!("{:.4}", result.p_value)]);
    table.add_row(vec!["Interpretation".to_string(), result.interpretation()]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::{Direction, Significance, Strength};
    use chrono::NaiveDate;
    use configuration::IndicatorParams;
    use core_types::TimeSeries;
    use indicators::{IndicatorEngine, MacdSeries};

    #[test]
    fn test_indicator_table_shows_tail() {
        let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let close = TimeSeries::from_sorted(
            (0..40).map(|i| (start + chrono::Duration::days(i), Some(50.0 + i as f64))),
        )
        .unwrap();
        let report = IndicatorEngine::new(IndicatorParams::default())
            .unwrap()
            .compute(&close);

        let mut table = indicator_table(&report, 3);
        table.set_content_arrangement(ContentArrangement::Disabled);
        let rendered = table.to_string();
        assert!(rendered.contains("SMA 200"));
        assert!(rendered.contains("2021-02-09"));
        assert!(!rendered.contains("2021-02-06"));
        assert!(rendered.contains("overbought"));
    }

    #[test]
    fn test_indicator_table_with_short_series() {
        let day = |d| NaiveDate::from_ymd_opt(2021, 3, d).unwrap();
        let close =
            TimeSeries::from_sorted((1..=3).map(|d| (day(d), Some(10.0 * d as f64)))).unwrap();
        let report = IndicatorReport {
            close,
            smas: vec![(50, TimeSeries::default())],
            rsi_period: 14,
            rsi: TimeSeries::from_sorted([(day(3), Some(12.5))]).unwrap(),
            macd: MacdSeries {
                macd: TimeSeries::default(),
                signal: TimeSeries::default(),
                histogram: TimeSeries::default(),
            },
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        };

        let mut table = indicator_table(&report, 10);
        table.set_content_arrangement(ContentArrangement::Disabled);
        let rendered = table.to_string();
        assert!(rendered.contains("2021-03-01"));
        assert!(rendered.contains("30.00"));
        assert!(rendered.contains("oversold"));
    }

    #[test]
    fn test_correlation_table() {
        let result = CorrelationResult {
            coefficient: 0.12345,
            p_value: 0.5,
            sample_size: 42,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap(),
            strength: Strength::Weak,
            significance: Significance::NotSignificant,
            direction: Direction::Positive,
        };
        let mut table = correlation_table(&result);
        table.set_content_arrangement(ContentArrangement::Disabled);
        let rendered = table.to_string();
        assert!(rendered.contains("0.1235") || rendered.contains("0.1234"));
        assert!(rendered.contains("2020-01-02 to 2020-03-02"));
        assert!(rendered.contains("Weak positive correlation (not significant)"));
    }
}
