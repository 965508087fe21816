use std::path::Path;

use qb_store::PlayerProfile;

pub fn run(data: &Path) -> Result<(), String> {
    let store = super::open_store(data)?;

    let profiles: Vec<&PlayerProfile> = store.archived().collect();
    if profiles.is_empty() {
        println!("  No archived players.");
        return Ok(());
    }

    println!("{}", super::roster::profile_table(&profiles));
    println!();
    println!("  {} archived players", profiles.len());
    Ok(())
}
