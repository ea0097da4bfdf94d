use crate::{commands::OutputArgs, error::CliError};
use connectors::sql::base::report::CapabilityReport;

fn generate_report_json(report: &CapabilityReport) -> Result<String, CliError> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}

pub async fn write_report(report: &CapabilityReport, path: &str) -> Result<(), CliError> {
    let report_json = generate_report_json(report)?;
    tokio::fs::write(path, report_json).await?;
    Ok(())
}

pub fn print_report(report: &CapabilityReport, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", generate_report_json(report)?);
    } else {
        print!("{}", render_table(report));
    }
    Ok(())
}

pub async fn emit_report(report: &CapabilityReport, args: &OutputArgs) -> Result<(), CliError> {
    match &args.output {
        Some(path) => write_report(report, path).await,
        None => print_report(report, args.json),
    }
}

fn render_table(report: &CapabilityReport) -> String {
    let version = report
        .version
        .map(|v| v.to_string())
        .unwrap_or_else(|| "indeterminate".to_string());
    let probe = report
        .probe_strategy
        .map(|s| s.to_string())
        .unwrap_or_else(|| "n/a".to_string());

    let mut out = String::new();
    out.push_str(&format!("{:<16} {}\n", "Vendor", report.vendor));
    out.push_str(&format!(
        "{:<16} {}\n",
        "Reported",
        report.raw_version.as_deref().unwrap_or("n/a")
    ));
    out.push_str(&format!("{:<16} {}\n", "Probed via", probe));
    out.push_str(&format!("{:<16} {}\n", "Version", version));
    out.push_str(&format!("{:<16} {}\n", "JSON supported", report.json_supported));
    out.push_str(&format!(
        "{:<16} {}\n",
        "JSON column",
        report.json_column_type.mysql_name()
    ));
    out.push_str("-----------------------------\n");
    for hint in &report.index_hints {
        out.push_str(&format!("{:<16} {}\n", "Index", hint.to_sql()));
    }
    out
}
