// dashboard.rs — Status counts and the goals overview.

use gt_board::DashboardView;
use gt_profile::profile::WORDMARK;
use gt_server::GoalsResponse;

pub fn execute(server_url: &str) -> anyhow::Result<()> {
    let listed: GoalsResponse =
        reqwest::blocking::get(format!("{server_url}/api/goals"))?.json()?;
    let view = DashboardView::new(listed.goals);

    println!("{}{}", WORDMARK.0, WORDMARK.1);
    println!();
    println!("Pending:     {}", view.pending_count());
    println!("In Progress: {}", view.in_progress_count());
    println!("Completed:   {}", view.completed_count());
    println!();

    if view.is_empty() {
        println!("No goals yet. Start by adding your first goal!");
        return Ok(());
    }

    println!("Goals Overview");
    println!("{}", "-".repeat(40));
    for g in view.overview() {
        println!("• {} [{}]", g.text, g.status.label());
    }
    Ok(())
}
