use anyhow::Result;

use crate::{CliTest, STORE_PATH, stderr, stdout};

#[test]
fn test_language_shows_default() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["language"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "mn\n");

    Ok(())
}

#[test]
fn test_language_list_marks_active_and_fallback() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["lang", "--list"])?;

    assert_eq!(stdout(&output), "  en (fallback)\n* mn\n");

    Ok(())
}

#[test]
fn test_use_persists_choice() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["use", "en"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Switched language: mn -> en"));
    assert_eq!(test.saved_language()?, Some("en".to_string()));

    let output = test.run(&["resolve", "nav.faq"])?;
    assert_eq!(stdout(&output), "FAQ\n");

    Ok(())
}

#[test]
fn test_use_normalizes_code() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["use", "EN"])?;

    assert!(output.status.success());
    assert_eq!(test.saved_language()?, Some("en".to_string()));

    Ok(())
}

#[test]
fn test_use_unsupported_language() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(STORE_PATH, r#"{"language": "en"}"#)?;

    let output = test.run(&["use", "fr"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("unsupported language `fr` (available: en, mn)"));
    // The previous choice is untouched
    assert_eq!(test.saved_language()?, Some("en".to_string()));

    Ok(())
}

#[test]
fn test_toggle_cycles_languages() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["toggle"])?;
    assert!(stdout(&output).contains("Switched language: mn -> en"));
    assert_eq!(test.saved_language()?, Some("en".to_string()));

    let output = test.run(&["toggle"])?;
    assert!(stdout(&output).contains("Switched language: en -> mn"));
    assert_eq!(test.saved_language()?, Some("mn".to_string()));

    Ok(())
}

#[test]
fn test_use_keeps_other_preferences() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(STORE_PATH, r#"{"theme": "dark"}"#)?;

    test.run(&["use", "en"])?;

    let content = test.read_file(STORE_PATH)?;
    assert!(content.contains("\"theme\": \"dark\""));
    assert!(content.contains("\"language\": \"en\""));

    Ok(())
}

#[test]
fn test_use_keeps_non_string_preferences() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(STORE_PATH, r#"{"fontSize": 14, "language": "en"}"#)?;

    let output = test.run(&["resolve", "nav.faq"])?;
    assert_eq!(stdout(&output), "FAQ\n");

    test.run(&["use", "mn"])?;

    let saved: serde_json::Value = serde_json::from_str(&test.read_file(STORE_PATH)?)?;
    assert_eq!(
        saved,
        serde_json::json!({"fontSize": 14, "language": "mn"})
    );

    Ok(())
}

#[test]
fn test_unwritable_store_still_switches() -> Result<()> {
    let test = CliTest::with_locales()?;
    // A directory where the preference file should be
    std::fs::create_dir_all(test.root().join(STORE_PATH))?;

    let output = test.run(&["use", "en"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Switched language: mn -> en"));
    assert!(stderr(&output).contains("could not save language"));

    Ok(())
}
