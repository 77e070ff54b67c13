use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, rules_and_keys};

const PRICING_PAGE: &str = r#"
import { useTranslations } from "next-intl";

export default function Pricing({ plan, code }) {
  const t = useTranslations("pricing");
  return (
    <section>
      <h1>{t("title")}</h1>
      <p>{t(`plans.${plan}.name`)}</p>
      <p>{t(`errors.${code}`)}</p>
    </section>
  );
}
"#;

fn pricing_project() -> Result<CliTest> {
    let test = CliTest::with_file("src/app/pricing/page.tsx", PRICING_PAGE)?;
    test.write_file(
        "messages/en.json",
        r#"{ "pricing": { "title": "Pricing", "plans": { "pro": { "name": "Pro" } } } }"#,
    )?;
    test.write_file(
        "messages/de.json",
        r#"{ "pricing": { "plans": { "pro": { "name": "Pro" } } } }"#,
    )?;
    Ok(test)
}

#[test]
fn test_hardcoded_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/[locale]/app.tsx",
        r#"
  export function Button() {
      return <button>Submit order</button>;
  }
  "#,
    )?;
    test.write_file("messages/en.json", "{}")?;

    assert_cmd_snapshot!(&mut test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: Hardcoded text "Submit order" in markup  hardcoded-text
      --> src/app/[locale]/app.tsx:3:22
      |
    3 |       return <button>Submit order</button>;
      |                      ^
      = help: move the text into the locale files and render it with a translation call

    ✘ 1 problems (0 errors, 1 warning) in 1 source file

    Health score
      coverage     100
      quality      100
      structure    100
      code         100
      performance  100
      overall      100
    ✓ passed (threshold 70)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "app/app.tsx",
        r#"
  export function Button() {
      const t = useTranslations("common");
      return <button>{t("submit")}</button>;
  }
  "#,
    )?;
    test.write_file("messages/en.json", r#"{ "common": { "submit": "Submit" } }"#)?;

    assert_cmd_snapshot!(&mut test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no problems found
      1 info diagnostic

    Health score
      coverage     100
      quality      100
      structure    100
      code         100
      performance  100
      overall      100
    ✓ passed (threshold 70)

    ----- stderr -----
    ");

    // Keep debug logs out of the snapshot; -v still shows info diagnostics.
    assert_cmd_snapshot!(test.check_command().arg("-v").env("RUST_LOG", "warn"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    info: Translation key "common.submit"  translation-key
      --> app/app.tsx:4:23
      |
    4 |       return <button>{t("submit")}</button>;
      |                       ^
      = help: informational: a translation key referenced from code

    ✓ Checked 1 source file - no problems found
      1 info diagnostic

    Health score
      coverage     100
      quality      100
      structure    100
      code         100
      performance  100
      overall      100
    ✓ passed (threshold 70)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let test = pricing_project()?;
    let (output, report) = test.check_json(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report["filesScanned"], 1);
    assert_eq!(report["filesFailed"], 0);
    assert_eq!(report["stats"]["dynamicKeys"], 2);
    assert_eq!(report["score"]["threshold"], 70);
    assert_eq!(report["score"]["passed"], true);

    let found = rules_and_keys(&report);
    assert!(found.contains(&(
        "missing-translation".to_string(),
        Some("pricing.title".to_string())
    )));
    assert!(
        found
            .iter()
            .any(|(rule, key)| rule == "dynamic-key-unmatched"
                && key.as_deref().is_some_and(|k| k.contains("errors.${code}")))
    );
    // The plans pattern matched an existing key.
    assert!(!found.iter().any(|(rule, key)| rule == "dynamic-key-unmatched"
        && key.as_deref().is_some_and(|k| k.contains("plans."))));
    assert!(!found.iter().any(|(rule, _)| rule == "orphan-key"));

    let missing = report["diagnostics"]
        .as_array()
        .into_iter()
        .flatten()
        .find(|d| d["rule"] == "missing-translation")
        .cloned()
        .unwrap_or_default();
    assert_eq!(missing["severity"], "error");
    assert_eq!(missing["category"], "coverage");
    assert_eq!(missing["language"], "de");
    assert_eq!(missing["filePath"], "messages/de.json");

    Ok(())
}

#[test]
fn test_threshold_fails_run() -> Result<()> {
    let test = pricing_project()?;

    let (output, report) = test.check_json(&["--threshold", "100"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(report["score"]["passed"], false);
    assert_eq!(report["score"]["threshold"], 100);

    let text = test.check_command().args(["--threshold", "100"]).output()?;
    assert_eq!(text.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&text.stdout).contains("failed (threshold 100)"));

    Ok(())
}

#[test]
fn test_severity_override_from_config() -> Result<()> {
    let test = pricing_project()?;
    test.write_file(
        ".intlcheckrc.json",
        r#"{ "severityOverrides": { "missing-translation": "off", "dynamic-key-unmatched": "info" } }"#,
    )?;

    let (output, report) = test.check_json(&[])?;
    assert_eq!(output.status.code(), Some(0));
    let found = rules_and_keys(&report);
    assert!(!found.iter().any(|(rule, _)| rule == "missing-translation"));
    assert_eq!(report["score"]["overall"], 100);

    Ok(())
}

#[test]
fn test_source_locale_override() -> Result<()> {
    let test = pricing_project()?;
    let (_, report) = test.check_json(&["--source-locale", "de"])?;

    // "de" is now the reference, so "pricing.title" exists only as an extra key in "en".
    let found = rules_and_keys(&report);
    assert!(found.contains(&("extra-key".to_string(), Some("pricing.title".to_string()))));
    assert!(!found.iter().any(|(rule, _)| rule == "missing-translation"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".intlcheckrc.json",
        r#"{
         "ignores": ["**/generated/**"],
         "includes": []
     }"#,
    )?;
    test.write_file("src/generated/app.tsx", r#"const A = () => <div>Hello world</div>;"#)?;
    test.write_file("src/app.tsx", r#"const B = () => <div>{"x"}</div>;"#)?;

    let (output, report) = test.check_json(&[])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report["filesScanned"], 1);
    assert!(rules_and_keys(&report).is_empty());

    Ok(())
}

#[test]
fn test_parse_error_is_not_fatal() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "export const = ;")?;
    test.write_file("src/ok.tsx", "export const Ok = () => <p>Good morning</p>;")?;
    test.write_file("messages/en.json", "{}")?;

    let (output, report) = test.check_json(&[])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report["filesScanned"], 1);
    assert_eq!(report["filesFailed"], 1);

    // The parser's log line carries compiler-specific wording.
    insta::with_settings!({ filters => vec![(r"(?m)^.*WARN.*\n", "")] }, {
        assert_cmd_snapshot!(&mut test.check_command(), @r#"
        success: true
        exit_code: 0
        ----- stdout -----
        warning: Hardcoded text "Good morning" in markup  hardcoded-text
          --> src/ok.tsx:1:28
          |
        1 | export const Ok = () => <p>Good morning</p>;
          |                            ^
          = help: move the text into the locale files and render it with a translation call

        ✘ 1 problems (0 errors, 1 warning) in 1 source file

        Health score
          coverage     100
          quality      100
          structure    100
          code         100
          performance  100
          overall      100
        ✓ passed (threshold 70)

        ----- stderr -----
        warning: 1 file(s) could not be parsed
        "#);
    });

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".intlcheckrc.json", "{ not json")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));

    let test = CliTest::with_file(
        ".intlcheckrc.json",
        r#"{ "severityOverrides": { "no-such-rule": "off" } }"#,
    )?;
    assert_eq!(test.check_command().output()?.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/src/page.tsx", "export const P = () => <p>Welcome back</p>;")?;
    test.write_file("web/messages/en.json", "{}")?;

    let root = test.root().join("web").to_string_lossy().to_string();
    let (output, report) = test.check_json(&["--source-root", root.as_str()])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report["filesScanned"], 1);
    assert_eq!(report["diagnostics"][0]["filePath"], "src/page.tsx");

    Ok(())
}
