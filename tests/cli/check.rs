use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn two_tables(en: &str, mn: &str) -> Result<CliTest> {
    let test = CliTest::with_file("locales/en.json", en)?;
    test.write_file("locales/mn.json", mn)?;
    Ok(test)
}

#[test]
fn test_check_clean_tables() -> Result<()> {
    let test = two_tables(
        r#"{"nav": {"faq": "FAQ", "pricing": "Pricing"}}"#,
        r#"{"nav": {"faq": "Түгээмэл асуулт", "pricing": "Үнэ"}}"#,
    )?;

    let output = test.run(&["check"])?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert_eq!(
        stdout(&output),
        "✓ Checked 2 locale files - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_missing_translation_fails() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["check"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"nav.contact\"  missing-translation"));
    assert!(out.contains("locales/en.json:5:"));
    assert!(out.contains("= note: (\"Contact\") missing in: mn"));
    assert!(out.contains("= hint: mn users will see the en text"));
    assert!(out.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_check_warnings_do_not_fail() -> Result<()> {
    let test = two_tables(
        r#"{"nav": {"faq": "FAQ"}}"#,
        r#"{"nav": {"faq": "FAQ", "blog": "Блог"}}"#,
    )?;

    let output = test.run(&["check"])?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("warning: \"nav.faq\"  untranslated"));
    assert!(out.contains("warning: \"nav.blog\"  orphan-key"));
    assert!(out.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_check_respects_ignore_untranslated() -> Result<()> {
    let test = two_tables(
        r#"{"nav": {"brand": "Sedu AI"}}"#,
        r#"{"nav": {"brand": "Sedu AI"}}"#,
    )?;
    test.write_file(".lokalrc.json", r#"{"ignoreUntranslated": ["nav.brand"]}"#)?;

    let output = test.run(&["check"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_selected_rule_only() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["check", "orphan-key"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_placeholder_mismatch() -> Result<()> {
    let test = two_tables(
        r#"{"contact": {"thanks": "Thanks {{name}}!"}}"#,
        r#"{"contact": {"thanks": "Баярлалаа!"}}"#,
    )?;

    let output = test.run(&["check"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"contact.thanks\"  placeholder-mismatch"));
    assert!(out.contains("in mn: expected [name], found []"));

    Ok(())
}

#[test]
fn test_check_invalid_value() -> Result<()> {
    let test = two_tables(
        r#"{"stats": {"setupTime": "2 weeks"}}"#,
        r#"{"stats": {"setupTime": 2}}"#,
    )?;

    let output = test.run(&["check", "invalid-value"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"stats.setupTime\"  invalid-value"));
    assert!(out.contains("expected a string, found number"));

    Ok(())
}

#[test]
fn test_check_dotted_key_is_invalid_value() -> Result<()> {
    let test = two_tables(
        r#"{"nav": {"faq": "FAQ"}, "hero.title": "Welcome"}"#,
        r#"{"nav": {"faq": "Асуулт"}}"#,
    )?;

    let output = test.run(&["check", "invalid-value"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"hero.title\"  invalid-value"));
    assert!(out.contains("key contains `.` and cannot be reached by a dotted path"));

    let output = test.run(&["keys"])?;
    assert_eq!(stdout(&output), "nav.faq = Асуулт\n");

    Ok(())
}

#[test]
fn test_check_non_object_root_is_parse_error() -> Result<()> {
    let test = two_tables(r#"{"nav": {"faq": "FAQ"}}"#, r#""Сайн байна уу""#)?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("parse-error"));
    assert!(stdout(&output).contains("must contain a JSON object"));

    Ok(())
}

#[test]
fn test_check_parse_error() -> Result<()> {
    let test = two_tables(r#"{"nav": {"faq": "FAQ"}}"#, "{ broken")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("parse-error"));
    assert!(stderr(&output).contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_check_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Messages directory './locales' does not exist."));

    Ok(())
}

#[test]
fn test_check_messages_root_override() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"nav": {"faq": "FAQ"}}"#)?;

    let output = test.run(&["check", "--messages-root", "i18n"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Checked 1 locale file - no issues found"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;
    let out = stdout(&output);

    assert!(output.status.success());
    for command in ["resolve", "language", "use", "toggle", "keys", "check", "init"] {
        assert!(out.contains(command), "missing {command} in help");
    }

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));

    Ok(())
}
