use anyhow::Result;
use design_playgrounds::core::solid::single_responsibility::{Journal, Persistence};
use design_playgrounds::LocalStorage;
use tempfile::TempDir;

#[test]
fn test_multi_line_entry_reloads_from_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    let persistence = Persistence::new(LocalStorage::new(base));

    let mut journal = Journal::new();
    journal.add_entry("line one\nline two");
    journal.add_entry("I ate a bug");

    persistence.save(&journal, "nested/journal.txt")?;
    let mut loaded = persistence.load("nested/journal.txt")?;

    assert_eq!(loaded, journal);
    assert_eq!(loaded.entries()[0], "1: line one\nline two");
    assert_eq!(loaded.add_entry("next"), 3);

    let on_disk = std::fs::read_to_string(temp_dir.path().join("nested/journal.txt"))?;
    assert_eq!(on_disk.lines().count(), 2);
    Ok(())
}
