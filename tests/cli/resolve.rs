use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, STORE_PATH, stderr, stdout};

#[test]
fn test_resolve_uses_default_language() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["resolve", "nav.faq"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output).trim_end(), @"Түгээмэл асуулт");
    // Resolving never writes the preference
    assert_eq!(test.saved_language()?, None);

    Ok(())
}

#[test]
fn test_resolve_falls_back_to_english() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["resolve", "nav.contact"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Contact\n");

    Ok(())
}

#[test]
fn test_resolve_unknown_key_prints_key() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["resolve", "pricing.cards.website.bullets.2"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "pricing.cards.website.bullets.2\n");

    Ok(())
}

#[test]
fn test_resolve_section_prints_key() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["resolve", "nav"])?;

    assert_eq!(stdout(&output), "nav\n");

    Ok(())
}

#[test]
fn test_resolve_with_variables() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&[
        "resolve",
        "footer.copyright",
        "--var",
        "year=2025",
        "--var",
        "brand=Sedu AI",
    ])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "© 2025 Sedu AI. Бүх эрх хамгаалагдсан.\n");

    Ok(())
}

#[test]
fn test_resolve_keeps_unfilled_placeholder() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["resolve", "footer.copyright", "--lang", "en", "--var", "year=2025"])?;

    assert_eq!(stdout(&output), "© 2025 {{brand}}\n");

    Ok(())
}

#[test]
fn test_resolve_lang_override_is_not_saved() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["resolve", "nav.faq", "--lang", "en"])?;

    assert_eq!(stdout(&output), "FAQ\n");
    assert_eq!(test.saved_language()?, None);

    Ok(())
}

#[test]
fn test_resolve_uses_saved_language() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(STORE_PATH, r#"{"language": "en"}"#)?;

    let output = test.run(&["resolve", "nav.pricing"])?;

    assert_eq!(stdout(&output), "Pricing\n");

    Ok(())
}

#[test]
fn test_resolve_ignores_unknown_saved_language() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(STORE_PATH, r#"{"language": "fr"}"#)?;

    let output = test.run(&["resolve", "nav.pricing"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Үнэ\n");

    Ok(())
}

#[test]
fn test_resolve_survives_corrupt_preference_file() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(STORE_PATH, "not json")?;

    let output = test.run(&["resolve", "nav.pricing"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Үнэ\n");
    assert!(stderr(&output).contains("could not read saved language"));

    Ok(())
}

#[test]
fn test_resolve_rejects_bad_variable() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["resolve", "nav.faq", "--var", "year"])?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected NAME=VALUE"));

    Ok(())
}

#[test]
fn test_resolve_without_fallback_table() -> Result<()> {
    let test = CliTest::with_file("locales/mn.json", r#"{"nav": {"faq": "Асуулт"}}"#)?;

    let output = test.run(&["resolve", "nav.faq"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No translation file for fallback language 'en'"));

    Ok(())
}

#[test]
fn test_keys_lists_resolved_text() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["keys"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "footer.copyright = © {{year}} {{brand}}. Бүх эрх хамгаалагдсан.\n\
         nav.contact = Contact\n\
         nav.faq = Түгээмэл асуулт\n\
         nav.pricing = Үнэ\n"
    );

    Ok(())
}

#[test]
fn test_keys_in_english() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["keys", "--lang", "en"])?;

    assert!(stdout(&output).contains("nav.faq = FAQ\n"));

    Ok(())
}
