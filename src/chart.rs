//! Bar chart rendering with plotters.
//!
//! Two chart kinds: count leaderboards (one blue bar per sender, value
//! label above each bar) and the year-over-year change chart (green bars
//! up, red bars down, percent labels).
//!
//! Rendering an empty leaderboard is a [`VostatsError::NoData`] error;
//! callers decide whether that is fatal (the CLI just skips the chart).

use std::path::Path;

use plotters::prelude::*;

use crate::config::ChartStyle;
use crate::error::{Result, VostatsError};
use crate::stats::{SenderChange, SenderCount};

/// Output filename for a count chart: `{year}_correct.png`,
/// `all_time_incorrect.png`, etc.
pub fn count_chart_filename(year: Option<i32>, correct: bool) -> String {
    let scope = year.map_or_else(|| "all_time".to_string(), |y| y.to_string());
    let bucket = if correct { "correct" } else { "incorrect" };
    format!("{scope}_{bucket}.png")
}

/// Output filename for a change chart: `change_{base}_{later}.png`.
pub fn change_chart_filename(base_year: i32, later_year: i32) -> String {
    format!("change_{base_year}_{later_year}.png")
}

/// Renders a per-sender count leaderboard as a bar chart PNG.
///
/// Entries are drawn in the order given; [`crate::stats::tally`] already
/// sorts them non-increasing by count.
pub fn render_counts(
    entries: &[SenderCount],
    title: &str,
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    if entries.is_empty() {
        return Err(VostatsError::no_data(title.to_string()));
    }

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let max = entries.iter().map(|e| e.count).max().unwrap_or(0) as f64;
    let y_max = (max * 1.15).max(1.0);
    let n = entries.len() as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", style.caption_size as i32))
        .margin(20)
        .x_label_area_size(100)
        .y_label_area_size(90)
        .build_cartesian_2d(0i32..n, 0f64..y_max)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&|x| sender_at(entries, *x))
        .x_label_style(("sans-serif", style.label_size as i32))
        .y_label_style(("sans-serif", style.label_size as i32))
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, e)| {
            Rectangle::new(
                [(i as i32, 0.0), (i as i32 + 1, e.count as f64)],
                BLUE.filled(),
            )
        }))
        .map_err(backend_err)?;

    // Value labels above the bars
    chart
        .draw_series(entries.iter().enumerate().map(|(i, e)| {
            Text::new(
                e.count.to_string(),
                (i as i32, e.count as f64 + y_max * 0.02),
                ("sans-serif", style.value_size as i32),
            )
        }))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

/// Renders the year-over-year percent change chart.
///
/// Non-negative bars are green, negative bars red, matching the
/// leaderboard's sense of progress.
pub fn render_change(
    entries: &[SenderChange],
    title: &str,
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    if entries.is_empty() {
        return Err(VostatsError::no_data(title.to_string()));
    }

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let lo = entries
        .iter()
        .map(|e| e.percent)
        .fold(0.0f64, f64::min);
    let hi = entries
        .iter()
        .map(|e| e.percent)
        .fold(0.0f64, f64::max);
    let pad = ((hi - lo) * 0.15).max(1.0);
    let n = entries.len() as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", style.caption_size as i32))
        .margin(20)
        .x_label_area_size(100)
        .y_label_area_size(110)
        .build_cartesian_2d(0i32..n, (lo - pad)..(hi + pad))
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&|x| change_sender_at(entries, *x))
        .x_label_style(("sans-serif", style.label_size as i32))
        .y_label_style(("sans-serif", style.label_size as i32))
        .y_label_formatter(&|y| format!("{y:.0}%"))
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, e)| {
            let colour = if e.percent < 0.0 { RED } else { GREEN };
            Rectangle::new([(i as i32, 0.0), (i as i32 + 1, e.percent)], colour.filled())
        }))
        .map_err(backend_err)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, e)| {
            let y = if e.percent >= 0.0 {
                e.percent + pad * 0.3
            } else {
                e.percent - pad * 0.1
            };
            Text::new(
                format!("{:.2}%", e.percent),
                (i as i32, y),
                ("sans-serif", style.value_size as i32),
            )
        }))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

fn sender_at(entries: &[SenderCount], idx: i32) -> String {
    usize::try_from(idx)
        .ok()
        .and_then(|i| entries.get(i))
        .map(|e| e.sender.clone())
        .unwrap_or_default()
}

fn change_sender_at(entries: &[SenderChange], idx: i32) -> String {
    usize::try_from(idx)
        .ok()
        .and_then(|i| entries.get(i))
        .map(|e| e.sender.clone())
        .unwrap_or_default()
}

fn backend_err(e: impl std::fmt::Display) -> VostatsError {
    VostatsError::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_chart_filename() {
        assert_eq!(count_chart_filename(Some(2019), true), "2019_correct.png");
        assert_eq!(count_chart_filename(Some(2020), false), "2020_incorrect.png");
        assert_eq!(count_chart_filename(None, true), "all_time_correct.png");
        assert_eq!(count_chart_filename(None, false), "all_time_incorrect.png");
    }

    #[test]
    fn test_change_chart_filename() {
        assert_eq!(change_chart_filename(2019, 2020), "change_2019_2020.png");
    }

    #[test]
    fn test_render_counts_empty_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let err =
            render_counts(&[], "nothing", &path, &ChartStyle::default()).unwrap_err();
        assert!(matches!(err, VostatsError::NoData { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_change_empty_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let err =
            render_change(&[], "nothing", &path, &ChartStyle::default()).unwrap_err();
        assert!(matches!(err, VostatsError::NoData { .. }));
    }

    #[test]
    fn test_render_counts_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.png");
        let entries = vec![
            SenderCount {
                sender: "Alice".to_string(),
                count: 120,
            },
            SenderCount {
                sender: "Bob".to_string(),
                count: 87,
            },
        ];
        render_counts(
            &entries,
            "Times 'vo' in 2020",
            &path,
            &ChartStyle::new().with_size(640, 480),
        )
        .unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_render_change_writes_png_with_negatives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("change.png");
        let entries = vec![
            SenderChange {
                sender: "Bob".to_string(),
                percent: 100.0,
            },
            SenderChange {
                sender: "Alice".to_string(),
                percent: -50.0,
            },
        ];
        render_change(
            &entries,
            "Percent change between 2019 and 2020",
            &path,
            &ChartStyle::new().with_size(640, 480),
        )
        .unwrap();
        assert!(path.exists());
    }
}
