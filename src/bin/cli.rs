//! Matchboard CLI
//!
//! Command-line client for a running Matchboard server:
//! - Show summary metrics and server status
//! - List and select dashboard pages
//! - Render a page's view model
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matchboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin dashboard for event participant matching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8090", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the summary metrics
    Summary,

    /// Show server status and the per-table load report
    Status,

    /// List the dashboard pages
    Pages,

    /// Select a page by label or slug
    Select {
        /// Page label ("Reports") or slug ("reports")
        page: String,
    },

    /// Render a page (default: the selected one)
    Render {
        /// Page label or slug
        page: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.api_url.trim_end_matches('/').to_string();
    let json = cli.format == "json";

    match cli.command {
        Commands::Summary => {
            let data = get_json(&client, &format!("{}/api/v1/summary", base)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_lines(&summary_lines(&data));
            }
        }

        Commands::Status => {
            let data = get_json(&client, &format!("{}/health", base)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_lines(&status_lines(&data));
            }
        }

        Commands::Pages => {
            let data = get_json(&client, &format!("{}/api/v1/pages", base)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_lines(&page_lines(&data));
            }
        }

        Commands::Select { page } => {
            let response = client
                .post(format!("{}/api/v1/pages/select", base))
                .json(&serde_json::json!({ "page": page }))
                .send()
                .await
                .with_context(|| format!("Cannot connect to Matchboard API at {}", base))?;
            let data = read_json(response).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                let label = data["snapshot"]["page"]["label"].as_str().unwrap_or("-");
                if data["changed"].as_bool().unwrap_or(false) {
                    println!("Selected {}", label);
                } else {
                    println!("Selection unchanged: {}", label);
                }
            }
        }

        Commands::Render { page } => {
            let url = match page {
                Some(page) => format!("{}/api/v1/pages/{}", base, urlencoding::encode(&page)),
                None => format!("{}/api/v1/pages/current", base),
            };
            let data = get_json(&client, &url).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_lines(&view_lines(&data));
            }
        }

        Commands::Config { output } => {
            let config = matchboard::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn get_json(client: &reqwest::Client, url: &str) -> anyhow::Result<Value> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Cannot connect to Matchboard API at {}", url))?;
    read_json(response).await
}

async fn read_json(response: reqwest::Response) -> anyhow::Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        bail!("Request failed ({}): {}", status, text);
    }
    Ok(response.json().await?)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn summary_lines(data: &Value) -> Vec<String> {
    let rows = [
        ("Total Participants", "total_participants"),
        ("Real-Time Identified", "total_identified"),
        ("Total Matches", "total_matches"),
        ("Average Satisfaction", "avg_satisfaction"),
        ("Total Meetings", "total_meetings"),
        ("Peak", "peak"),
    ];

    rows.iter()
        .map(|(label, key)| format!("{:<22} {}", label, display(&data[*key])))
        .collect()
}

fn status_lines(data: &Value) -> Vec<String> {
    let mut lines = vec![
        format!("Matchboard v{}", data["version"].as_str().unwrap_or("?")),
        String::new(),
        format!("Status: {}", data["status"].as_str().unwrap_or("unknown")),
        format!("Source: {}", data["source"].as_str().unwrap_or("-")),
    ];

    if let Some(tables) = data["load"]["tables"].as_array() {
        lines.push(String::new());
        lines.push(format!("{:<14} {:<8} {}", "Table", "Status", "Detail"));
        lines.push("-".repeat(40));
        for table in tables {
            let detail = match table["status"].as_str() {
                Some("loaded") => format!("{} rows", display(&table["rows"])),
                Some("failed") => table["reason"].as_str().unwrap_or("-").to_string(),
                _ => String::new(),
            };
            lines.push(format!(
                "{:<14} {:<8} {}",
                table["table"].as_str().unwrap_or("-"),
                table["status"].as_str().unwrap_or("-"),
                detail
            ));
        }
    }

    if let Some(uptime) = data["uptime_seconds"].as_u64() {
        lines.push(String::new());
        lines.push(format!("Uptime: {}", format_duration(uptime)));
    }

    lines
}

fn page_lines(data: &Value) -> Vec<String> {
    let mut lines = vec![
        format!("  {:<24} {}", "Page", "Slug"),
        "-".repeat(50),
    ];

    for page in data["pages"].as_array().into_iter().flatten() {
        let marker = if page["active"].as_bool().unwrap_or(false) {
            '*'
        } else {
            ' '
        };
        lines.push(format!(
            "{} {:<24} {}",
            marker,
            page["label"].as_str().unwrap_or("-"),
            page["slug"].as_str().unwrap_or("-")
        ));
    }

    lines
}

fn view_lines(view: &Value) -> Vec<String> {
    let mut lines = vec![view["title"].as_str().unwrap_or("-").to_string()];
    let body = &view["body"];

    match body["kind"].as_str() {
        Some("dashboard") => {
            let content = &body["content"];
            if content.is_null() {
                lines.push("Loading...".to_string());
                return lines;
            }

            lines.push(String::new());
            for card in content["summary_cards"].as_array().into_iter().flatten() {
                lines.push(format!(
                    "{:<22} {}",
                    card["label"].as_str().unwrap_or("-"),
                    card["value"].as_str().unwrap_or("-")
                ));
            }

            for card in content["insight_cards"].as_array().into_iter().flatten() {
                lines.push(String::new());
                lines.push(format!("[{}]", card["title"].as_str().unwrap_or("-")));
                lines.push(format!("  {}", card["description"].as_str().unwrap_or("")));
            }

            for list in content["rankings"].as_array().into_iter().flatten() {
                lines.push(String::new());
                lines.push(list["title"].as_str().unwrap_or("-").to_string());
                for entry in list["entries"].as_array().into_iter().flatten() {
                    lines.push(format!(
                        "  {}. {}",
                        display(&entry["rank"]),
                        entry["name"].as_str().unwrap_or("-")
                    ));
                }
            }
        }
        _ => {
            for panel in body["panels"].as_array().into_iter().flatten() {
                lines.push(String::new());
                lines.extend(panel_lines(panel));
            }
        }
    }

    lines
}

fn panel_lines(panel: &Value) -> Vec<String> {
    let mut lines = vec![panel["title"].as_str().unwrap_or("-").to_string()];
    let strings = |v: &Value| -> Vec<String> {
        v.as_array()
            .into_iter()
            .flatten()
            .map(|s| s.as_str().unwrap_or("").to_string())
            .collect()
    };

    match panel["type"].as_str() {
        Some("list") => {
            let ordered = panel["ordered"].as_bool().unwrap_or(false);
            for (i, item) in strings(&panel["items"]).iter().enumerate() {
                if ordered {
                    lines.push(format!("  {}. {}", i + 1, item));
                } else {
                    lines.push(format!("  - {}", item));
                }
            }
        }
        Some("table") => {
            lines.push(format!("  {}", strings(&panel["headers"]).join(" | ")));
            for row in panel["rows"].as_array().into_iter().flatten() {
                lines.push(format!("  {}", strings(row).join(" | ")));
            }
        }
        Some("columns") => {
            for column in panel["columns"].as_array().into_iter().flatten() {
                lines.push(format!("  {}", column["heading"].as_str().unwrap_or("-")));
                for item in strings(&column["items"]) {
                    lines.push(format!("    - {}", item));
                }
            }
        }
        _ => {}
    }

    lines
}

fn display(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(7260), "2h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&json!({
            "total_participants": 150,
            "total_identified": 29,
            "total_matches": 160,
            "avg_satisfaction": 78,
            "total_meetings": 18,
            "peak": 4.3
        }));

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Total Participants"));
        assert!(lines[0].ends_with("150"));
        assert!(lines[5].ends_with("4.3"));
    }

    #[test]
    fn test_page_lines_mark_active() {
        let lines = page_lines(&json!({"pages": [
            {"slug": "event-management", "label": "Event Management", "active": false},
            {"slug": "reports", "label": "Reports", "active": true}
        ]}));

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("  Event Management"));
        assert!(lines[3].starts_with("* Reports"));
    }

    #[test]
    fn test_view_lines_while_loading() {
        let lines = view_lines(&json!({
            "title": "REAL-TIME KPI DASHBOARD",
            "body": {"kind": "dashboard", "loading": true}
        }));
        assert_eq!(lines, vec!["REAL-TIME KPI DASHBOARD", "Loading..."]);
    }

    #[test]
    fn test_panel_lines() {
        let lines = panel_lines(&json!({
            "title": "Steps",
            "type": "list",
            "ordered": true,
            "items": ["Create event", "Invite"]
        }));
        assert_eq!(lines, vec!["Steps", "  1. Create event", "  2. Invite"]);

        let lines = panel_lines(&json!({
            "title": "Export",
            "type": "table",
            "headers": ["Report", "Format"],
            "rows": [["Matches", "CSV"]]
        }));
        assert_eq!(lines, vec!["Export", "  Report | Format", "  Matches | CSV"]);
    }

    #[test]
    fn test_status_lines() {
        let lines = status_lines(&json!({
            "status": "degraded",
            "source": "rest",
            "version": "0.1.0",
            "load": {"tables": [
                {"table": "participants", "status": "loaded", "rows": 3},
                {"table": "matches", "status": "failed", "reason": "timeout"}
            ]},
            "uptime_seconds": 5
        }));

        assert!(lines.contains(&"Status: degraded".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("participants") && l.ends_with("3 rows")));
        assert!(lines.iter().any(|l| l.starts_with("matches") && l.ends_with("timeout")));
        assert_eq!(lines.last().unwrap(), "Uptime: 5s");
    }
}
