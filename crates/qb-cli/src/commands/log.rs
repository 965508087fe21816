use std::path::Path;

use qb_store::DecisionLog;

pub fn run(data: &Path, count: usize) -> Result<(), String> {
    let path = super::decision_log_path(data);
    let records =
        DecisionLog::read_all(&path).map_err(|e| format!("failed to read decision log: {e}"))?;

    if records.is_empty() {
        println!("  No decisions recorded.");
        return Ok(());
    }

    let start = records.len().saturating_sub(count);
    for record in &records[start..] {
        println!(
            "  #{} {} {} chose: {}",
            record.id,
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.user,
            record.choice
        );
    }
    println!();
    println!(
        "  {} of {} decisions",
        records.len() - start,
        records.len()
    );
    Ok(())
}
