//! Plain-text rendering of a velocity analysis.

use std::fmt::Write;
use velocity_facade::prelude::*;

/// Render the full text report.
pub fn render_text(analysis: &VelocityAnalysis) -> String {
    let mut out = String::new();
    write_report(&mut out, analysis).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, analysis: &VelocityAnalysis) -> std::fmt::Result {
    writeln!(
        out,
        "Velocity forecast ({}% confidence)",
        analysis.config.confidence_level * 100.0
    )?;
    writeln!(
        out,
        "Observations: {} ({} valid, {} invalid)",
        analysis.observations.len(),
        analysis.valid_count,
        analysis.invalid_count
    )?;
    writeln!(out, "Mean valid velocity: {}", analysis.mean_velocity)?;
    writeln!(out)?;

    writeln!(
        out,
        "{:>6}  {:>8}  {:>6}  {:>6}  {:>6}  Band",
        "Sprint", "Velocity", "Lower", "Upper", "Mean"
    )?;
    for c in &analysis.timeline {
        let prior = analysis.forecasts.for_sprint(c.sprint);
        writeln!(
            out,
            "{:>6}  {:>8}  {:>6}  {:>6}  {:>6}  {}",
            c.sprint,
            c.value,
            fmt_bound(prior.map(|f| f.lower)),
            fmt_bound(prior.map(|f| f.upper)),
            fmt_bound(prior.map(|f| f.mean)),
            c.band.label()
        )?;
    }
    writeln!(out)?;

    match analysis.next_forecast() {
        Some(f) => writeln!(
            out,
            "Sprint {} forecast: {} - {} (mean {}, from {} valid observations)",
            f.sprint, f.lower, f.upper, f.mean, f.sample_size
        )?,
        None => writeln!(
            out,
            "Not enough valid observations to forecast (need {}, have {})",
            analysis.config.min_history, analysis.valid_count
        )?,
    }
    if let Some(band) = analysis.overlap {
        write!(out, "CI overlap range: {} - {}", band.lower, band.upper)?;
        if band.is_trimmed() {
            write!(
                out,
                " (ignoring {} highest lower and {} lowest upper bounds)",
                band.trimmed_lower, band.trimmed_upper
            )?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(out, "Band counts:")?;
    for band in Band::ALL {
        writeln!(out, "  {:<32}{}", band.label(), analysis.counts.get(band))?;
    }

    if analysis.next_forecast().is_some() {
        writeln!(out)?;
        writeln!(out, "Observations against the latest forecast (ascending):")?;
        for band in [Band::Below, Band::Within, Band::Above, Band::Invalid] {
            let values: Vec<String> = analysis
                .distribution
                .iter()
                .filter(|c| c.band == band)
                .map(|c| c.value.to_string())
                .collect();
            if !values.is_empty() {
                writeln!(out, "  {:<8}{}", band.to_string(), values.join(", "))?;
            }
        }
    }
    Ok(())
}

fn fmt_bound(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(values: &[f64]) -> String {
        let obs = observations_from_signed(values).unwrap();
        render_text(&analyze(&obs, &ForecastConfig::default()).unwrap())
    }

    #[test]
    fn test_report_header_and_next_forecast() {
        let text = render(&[-22.0, -53.0, 28.0, 19.0, 32.0]);

        assert!(text.starts_with("Velocity forecast (90% confidence)"));
        assert!(text.contains("Observations: 5 (3 valid, 2 invalid)"));
        assert!(text.contains("Mean valid velocity: 26"));
        assert!(text.contains("Sprint 6 forecast: 19 - 32 (mean 26, from 3 valid observations)"));
    }

    #[test]
    fn test_report_rows_show_prior_interval() {
        let text = render(&[-22.0, -53.0, 28.0, 19.0, 32.0]);
        let row = text
            .lines()
            .find(|l| l.trim_start().starts_with("5 "))
            .unwrap();
        assert!(row.contains("19"));
        assert!(row.contains("28"));
        assert!(row.ends_with("Above Forecasted CI"));
    }

    #[test]
    fn test_report_without_forecast() {
        let text = render(&[4.0]);
        assert!(text.contains("Not enough valid observations to forecast (need 2, have 1)"));
        assert!(!text.contains("CI overlap range"));
        assert!(!text.contains("against the latest forecast"));
    }

    #[test]
    fn test_report_band_counts() {
        let text = render(&[-1.0, 10.0, 12.0, 30.0]);
        assert!(text.contains("Invalid Observation"));
        assert!(text.contains("Above Forecasted CI"));
        assert!(text.contains("CI overlap range: 10 - 12"));
    }
}
