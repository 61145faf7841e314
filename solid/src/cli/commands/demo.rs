use anyhow::{Result, bail};
use solid_core::{Config, ConsoleSink, OutputSink, Outcome, ScenarioReport};
use tracing::warn;

pub fn execute(config: &Config) -> Result<()> {
    let mut sink = ConsoleSink;
    let reports: Vec<ScenarioReport> = config.scenarios.iter().map(|s| s.run(&mut sink)).collect();

    sink.report("");
    for report in &reports {
        sink.report(&summary_line(report));
    }

    let unmet: Vec<&str> = reports
        .iter()
        .filter(|r| !r.matches_expectation())
        .map(|r| r.name.as_str())
        .collect();

    if !unmet.is_empty() {
        warn!("Scenarios with unexpected outcome: {:?}", unmet);
        bail!("{} scenario(s) did not match expectation: {}", unmet.len(), unmet.join(", "));
    }
    Ok(())
}

fn summary_line(report: &ScenarioReport) -> String {
    let outcome = match report.outcome {
        Outcome::Consistent => "consistent",
        Outcome::Violation => "violation",
    };
    let mark = if report.matches_expectation() { "ok" } else { "UNEXPECTED" };
    format!(
        "[{}] {}: {} (final {}x{})",
        mark, report.name, outcome, report.final_width, report.final_height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_core::{BufferSink, Scenario};

    #[test]
    fn test_summary_line() {
        let report = Scenario::square_resize().run(&mut BufferSink::new());
        assert_eq!(summary_line(&report), "[ok] square-resize: violation (final 20x20)");
    }

    #[test]
    fn test_default_demo_passes() {
        assert!(execute(&Config::default()).is_ok());
    }

    #[test]
    fn test_unmet_expectation_fails() {
        let mut scenario = Scenario::rectangle_resize();
        scenario.expect = Outcome::Violation;
        let config = Config { verbosity: "info".to_string(), scenarios: vec![scenario] };
        let err = execute(&config).unwrap_err();
        assert!(err.to_string().contains("rectangle-resize"));
    }
}
