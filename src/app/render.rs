use crate::domain::model::{LiveliestYearsReport, OutputFormat};
use crate::utils::error::Result;

pub fn render(report: &LiveliestYearsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

/// The classic console layout: the count, then one indented line per year.
pub fn render_text(report: &LiveliestYearsReport) -> String {
    let mut lines = vec![
        format!("Most number of people alive: {}", report.max_count),
        "Year(s) with most people alive:".to_string(),
    ];
    for entry in &report.years {
        lines.push(format!("\t{} - {}", entry.year, entry.names.join(", ")));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

pub fn render_json(report: &LiveliestYearsReport) -> Result<String> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

pub fn render_csv(report: &LiveliestYearsReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["year", "count", "names"])?;
    for entry in &report.years {
        writer.write_record([
            entry.year.to_string(),
            entry.names.len().to_string(),
            entry.names.join(", "),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::YearEntry;

    fn sample_report() -> LiveliestYearsReport {
        LiveliestYearsReport {
            max_count: 2,
            years: vec![
                YearEntry {
                    year: 1955,
                    names: vec!["Alice".to_string(), "Bob".to_string()],
                },
                YearEntry {
                    year: 1956,
                    names: vec!["Alice".to_string(), "Bob".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_render_text_layout() {
        let output = render(&sample_report(), OutputFormat::Text).unwrap();
        assert_eq!(
            output,
            "Most number of people alive: 2\n\
             Year(s) with most people alive:\n\
             \t1955 - Alice, Bob\n\
             \t1956 - Alice, Bob\n"
        );
    }

    #[test]
    fn test_render_json_shape() {
        let output = render(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["maxCount"], 2);
        assert_eq!(value["years"][0]["year"], 1955);
        assert_eq!(value["years"][1]["names"][1], "Bob");
    }

    #[test]
    fn test_render_csv_quotes_name_list() {
        let output = render(&sample_report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "year,count,names");
        assert_eq!(lines[1], "1955,2,\"Alice, Bob\"");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_empty_report() {
        let report = LiveliestYearsReport::default();
        assert_eq!(
            render_text(&report),
            "Most number of people alive: 0\nYear(s) with most people alive:\n"
        );
        assert_eq!(render_csv(&report).unwrap(), "year,count,names\n");
    }
}
