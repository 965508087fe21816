use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use qb_mechanics::Skill;
use qb_store::PlayerProfile;

pub fn run(data: &Path) -> Result<(), String> {
    let store = super::open_store(data)?;

    let profiles: Vec<&PlayerProfile> = store.active().collect();
    if profiles.is_empty() {
        println!("  No registered players.");
        return Ok(());
    }

    println!("{}", profile_table(&profiles));
    println!();
    println!("  {} active players", profiles.len());
    Ok(())
}

/// Render profiles as a table; shared with the archive listing.
pub fn profile_table(profiles: &[&PlayerProfile]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["User", "Name", "Race", "Class", "HP", "Skills", "Actions"]);

    for profile in profiles {
        let skills: Vec<&str> = profile.proficiencies.iter().map(Skill::name).collect();
        table.add_row(vec![
            profile.user.clone(),
            profile.name.clone(),
            profile.race.clone(),
            profile.class.clone(),
            profile.hit_points.to_string(),
            skills.join(", "),
            profile.history.len().to_string(),
        ]);
    }
    table
}
