mod helpers;

use anyhow::Result;
use helpers::TestNotesDir;
use plainnotes::application::NoteRepository;
use plainnotes::domain::DomainError;

#[test]
fn given_valid_note_when_creating_then_read_returns_exact_content() -> Result<()> {
    // Arrange
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();
    let cases = [
        ("a", "x"),
        ("daily log", "first line\nsecond line\n"),
        ("unicode", "Catatan baru 注意 🎉\r\n\ttabbed"),
        ("padded", "   content with surrounding whitespace   "),
    ];

    for (title, content) in cases {
        // Act
        repo.create_note(title, content)?;

        // Assert
        assert_eq!(repo.read_note(title)?.content, content);
    }
    Ok(())
}

#[test]
fn given_created_then_deleted_note_when_listing_then_reflects_storage() -> Result<()> {
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();

    repo.create_note("a", "x")?;
    assert!(repo.list_titles()?.contains(&"a".to_string()));

    repo.delete_note("a")?;
    assert!(!repo.list_titles()?.contains(&"a".to_string()));
    assert!(!fixture.note_path("a").exists());
    Ok(())
}

#[test]
fn given_existing_note_when_creating_without_overwrite_then_returns_conflict() -> Result<()> {
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();
    repo.create_note("a", "x")?;

    let result = repo.save_note("a", "y", false);

    assert!(matches!(result, Err(DomainError::Conflict(ref t)) if t == "a"));
    assert_eq!(repo.read_note("a")?.content, "x");
    Ok(())
}

#[test]
fn given_existing_note_when_creating_with_overwrite_then_replaces_content() -> Result<()> {
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();
    repo.create_note("a", "x")?;

    repo.save_note("a", "y", true)?;

    assert_eq!(repo.read_note("a")?.content, "y");
    assert_eq!(repo.list_titles()?, vec!["a"]);
    Ok(())
}

#[test]
fn given_missing_note_when_updating_then_returns_not_found_and_creates_no_file() -> Result<()> {
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();

    let result = repo.update_note("missing", "z");

    assert!(matches!(result, Err(DomainError::NotFound(ref t)) if t == "missing"));
    assert!(!fixture.note_path("missing").exists());
    assert!(repo.list_titles()?.is_empty());
    Ok(())
}

#[test]
fn given_existing_note_when_updating_then_overwrites_in_place() -> Result<()> {
    let fixture = TestNotesDir::with_notes(&[("a", "x")]);
    let mut repo = fixture.open_repository();

    repo.update_note("a", "updated")?;

    assert_eq!(repo.read_note("a")?.content, "updated");
    Ok(())
}

#[test]
fn given_blank_content_when_creating_or_updating_then_returns_empty_content() -> Result<()> {
    let fixture = TestNotesDir::with_notes(&[("a", "x")]);
    let mut repo = fixture.open_repository();

    assert!(matches!(
        repo.create_note("b", "   "),
        Err(DomainError::EmptyContent)
    ));
    assert!(matches!(
        repo.create_note("a", "   "),
        Err(DomainError::EmptyContent)
    ));
    assert!(matches!(repo.update_note("a", ""), Err(DomainError::EmptyContent)));

    assert_eq!(repo.list_titles()?, vec!["a"]);
    assert_eq!(repo.read_note("a")?.content, "x");
    Ok(())
}

#[test]
fn given_missing_note_when_deleting_then_returns_not_found_and_state_unchanged() -> Result<()> {
    let fixture = TestNotesDir::with_notes(&[("keep", "x")]);
    let mut repo = fixture.open_repository();

    let result = repo.delete_note("missing");

    assert!(matches!(result, Err(DomainError::NotFound(ref t)) if t == "missing"));
    assert_eq!(repo.list_titles()?, vec!["keep"]);
    Ok(())
}

#[test]
fn given_path_traversal_title_when_creating_then_returns_invalid_title_and_writes_nothing()
-> Result<()> {
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();

    for title in ["../evil", "nested/evil", "..\\evil", "/tmp/evil", "", "   "] {
        let result = repo.create_note(title, "x");
        assert!(
            matches!(result, Err(DomainError::InvalidTitle { .. })),
            "{title:?} should be rejected"
        );
    }

    assert!(fixture.all_files().is_empty(), "{:?}", fixture.all_files());
    Ok(())
}

#[test]
fn given_unrelated_files_when_listing_then_only_note_titles_are_returned() -> Result<()> {
    let fixture = TestNotesDir::with_notes(&[("b", "2"), ("a", "1"), ("c", "3")]);
    std::fs::write(fixture.notes_dir.join("image.png"), [0u8, 1, 2])?;
    std::fs::write(fixture.notes_dir.join("readme"), "no extension")?;
    let mut repo = fixture.open_repository();

    let first = repo.list_titles()?;
    let second = repo.list_titles()?;

    assert_eq!(first, vec!["a", "b", "c"]);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn given_note_removed_externally_when_reading_then_returns_not_found() -> Result<()> {
    let fixture = TestNotesDir::with_notes(&[("gone", "x")]);
    let mut repo = fixture.open_repository();
    assert_eq!(repo.list_titles()?, vec!["gone"]);

    std::fs::remove_file(fixture.note_path("gone"))?;
    let result = repo.read_note("gone");

    assert!(matches!(result, Err(DomainError::NotFound(_))));
    Ok(())
}

#[test]
fn given_failed_operation_when_continuing_then_repository_stays_usable() -> Result<()> {
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();

    assert!(repo.delete_note("missing").is_err());
    assert!(repo.create_note("../bad", "x").is_err());
    repo.create_note("good", "x")?;

    assert_eq!(repo.read_note("good")?.content, "x");
    Ok(())
}

#[test]
fn given_overlong_title_when_creating_or_reading_then_returns_invalid_title() -> Result<()> {
    let fixture = TestNotesDir::new();
    let mut repo = fixture.open_repository();
    let title = "n".repeat(300);

    assert!(matches!(
        repo.create_note(&title, "x"),
        Err(DomainError::InvalidTitle { .. })
    ));
    assert!(matches!(
        repo.read_note(&title),
        Err(DomainError::InvalidTitle { .. })
    ));
    assert!(matches!(
        repo.delete_note(&title),
        Err(DomainError::InvalidTitle { .. })
    ));
    assert!(fixture.all_files().is_empty());
    Ok(())
}
