// goal.rs — Goal subcommands: list, add.

use clap::Subcommand;

use gt_goal::Goal;
use gt_server::GoalsResponse;

use super::DEFAULT_SERVER_URL;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// List goals from the running server.
    List {
        /// Base URL of the running server.
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },
    /// Add a goal via the running server.
    Add {
        /// Goal text (e.g., "Run 5k").
        text: String,
        /// Status: pending, inprogress, or completed.
        #[arg(long)]
        status: Option<String>,
        /// Base URL of the running server.
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },
}

pub fn execute(cmd: &GoalCommands) -> anyhow::Result<()> {
    match cmd {
        GoalCommands::List { server_url } => list_goals(server_url),
        GoalCommands::Add {
            text,
            status,
            server_url,
        } => add_goal(server_url, text, status.as_deref()),
    }
}

fn list_goals(server_url: &str) -> anyhow::Result<()> {
    let listed: GoalsResponse =
        reqwest::blocking::get(format!("{server_url}/api/goals"))?.json()?;
    print_goals(&listed.goals);
    Ok(())
}

fn add_goal(server_url: &str, text: &str, status: Option<&str>) -> anyhow::Result<()> {
    let mut body = serde_json::json!({ "text": text });
    if let Some(status) = status {
        body["status"] = serde_json::Value::String(status.to_string());
    }

    let client = reqwest::blocking::Client::new();
    let added: GoalsResponse = client
        .post(format!("{server_url}/api/goals"))
        .json(&body)
        .send()?
        .json()?;

    match added.goals.first() {
        Some(first) if first.text == text.trim() => {
            println!("Goal added: {} [{}]", first.text, first.status.label());
        }
        _ => println!("Goal not added (blank text is ignored)."),
    }
    println!("{} goal(s) total.", added.goals.len());
    Ok(())
}

fn print_goals(goals: &[Goal]) {
    if goals.is_empty() {
        println!("No goals yet.");
        return;
    }

    println!("{:<4} {:<40} {:<12}", "#", "TEXT", "STATUS");
    println!("{}", "-".repeat(58));

    for (idx, g) in goals.iter().enumerate() {
        println!(
            "{:<4} {:<40} {:<12}",
            idx,
            truncate(&g.text, 38),
            g.status.label()
        );
    }
    println!("\n{} goal(s) total.", goals.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() > max {
        format!("{}...", &s[..max - 3])
    } else {
        s.to_string()
    }
}
