use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const EN: &str = "App/en.lproj/Localizable.strings";
const FR: &str = "App/fr.lproj/Localizable.strings";

#[test]
fn test_missing_project_dir() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "PROJECT DIR argument not found\n");

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(EN, "/* Title */\n\"HELLO\" = \"Hello\";\n")?;
    test.write_file(FR, "\"HELLO\" = \"Bonjour\";\n")?;
    test.write_file(
        "App/View.swift",
        "title = NSLocalizedString(\"HELLO\", comment: \"\")\n",
    )?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "Found 1 defined string keys in 2 files\n\
         Found 1 used string keys in 1 files\n\
         \n\
         \u{2713} No localization issues found\n"
    );

    Ok(())
}

#[test]
fn test_mismatched_parameters() -> Result<()> {
    let test = CliTest::with_file(EN, "\"GREETING\" = \"Hello %@\";\n")?;
    test.write_file(FR, "\"GREETING\" = \"Bonjour\";\n")?;
    test.write_file(
        "App/View.swift",
        "label.text = NSLocalizedString(\"GREETING\", comment: \"\")\n",
    )?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "Found 1 defined string keys in 2 files\n\
         Found 1 used string keys in 1 files\n\
         \n\
         --------- Mismatched parameters ---------\n\
         ./App/en.lproj/Localizable.strings:1: warning: Parameter mismatch between languages for key GREETING (en: %@; fr: none)\n\
         ./App/fr.lproj/Localizable.strings:1: warning: Parameter mismatch between languages for key GREETING (en: %@; fr: none)\n\
         \n\
         \u{2718} 1 problem (0 errors, 1 warning)\n"
    );

    Ok(())
}

#[test]
fn test_missing_everywhere() -> Result<()> {
    let test = CliTest::with_file(EN, "\"HELLO\" = \"Hello\";\n")?;
    test.write_file(FR, "\"HELLO\" = \"Bonjour\";\n")?;
    test.write_file(
        "App/View.swift",
        "title = NSLocalizedString(\"HELLO\", comment: \"\")\n\
         subtitle = NSLocalizedString(\"WELCOME\", comment: \"\")\n",
    )?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "Found 1 defined string keys in 2 files\n\
         Found 2 used string keys in 1 files\n\
         \n\
         --------- Missing strings ---------\n\
         ./App/View.swift:2: warning: Missing localized string WELCOME for languages (en, fr)\n\
         \n\
         \u{2718} 1 problem (0 errors, 1 warning)\n"
    );

    let result = run(test.check_command().arg("--grouped"))?;
    assert!(
        result
            .stdout
            .contains(":: warning: Missing localized string WELCOME for languages (en, fr)\n")
    );

    Ok(())
}

#[test]
fn test_unused_key() -> Result<()> {
    let test = CliTest::with_file(
        "en.lproj/Localizable.strings",
        "/* Never shown */\n\"UNUSED_KEY\" = \"Unused\";\n",
    )?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "Found 1 defined string keys in 1 files\n\
         Found 0 used string keys in 0 files\n\
         \n\
         --------- Unused strings ---------\n\
         ./en.lproj/Localizable.strings:2: warning: Unused localized string UNUSED_KEY in en\n\
         \n\
         \u{2718} 1 problem (0 errors, 1 warning)\n"
    );

    Ok(())
}

#[test]
fn test_redefined_key() -> Result<()> {
    let test = CliTest::with_file(
        "en.lproj/Localizable.strings",
        "\"A\" = \"First\";\n\"B\" = \"Other\";\n\"A\" = \"Second\";\n",
    )?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stdout,
        "./en.lproj/Localizable.strings:3: error: Redefined key A in file: en\n\
         \n\
         \u{2718} 1 problem (1 error, 0 warnings)\n"
    );

    Ok(())
}

#[test]
fn test_ignored_files_argument() -> Result<()> {
    let test = CliTest::with_file(EN, "\"HELLO\" = \"Hello\";\n")?;
    test.write_file(
        "App/Generated.swift",
        "x = NSLocalizedString(\"GENERATED\", comment: \"\")\n",
    )?;
    test.write_file(
        "App/main.swift",
        "x = NSLocalizedString(\"FROM_MAIN\", comment: \"\")\n",
    )?;
    test.write_file(
        "App/View.swift",
        "x = NSLocalizedString(\"HELLO\", comment: \"\")\n",
    )?;

    let result = run(test.check_command().args(["NSLocalizedString", "", "Generated.swift"]))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Found 1 used string keys in 1 files\n"));
    assert!(!result.stdout.contains("GENERATED"));
    assert!(!result.stdout.contains("FROM_MAIN"));

    Ok(())
}

#[test]
fn test_custom_function_and_variables() -> Result<()> {
    let test = CliTest::with_file(EN, "\"TITLE\" = \"Title\";\n\"BUTTON\" = \"Tap\";\n")?;
    test.write_file(
        "App/View.swift",
        "label.text = L10n(\"TITLE\")\nbutton.localizedKey = \"BUTTON\"\n",
    )?;

    let result = run(test.check_command().args(["L10n", "localizedKey"]))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Found 2 used string keys in 1 files\n"));
    assert!(result.stdout.contains("No localization issues found"));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locstringsrc.json",
        r#"{
         "variables": ["localizedString"],
         "excludedDirectories": ["Vendor"]
     }"#,
    )?;
    test.write_file(EN, "\"TITLE\" = \"Title\";\n")?;
    test.write_file(
        "App/Base.lproj/Main.storyboard",
        "<userDefinedRuntimeAttribute type=\"string\" keyPath=\"localizedString\" value=\"TITLE\"/>\n",
    )?;
    test.write_file(
        "Vendor/Lib.swift",
        "x = NSLocalizedString(\"VENDOR\", comment: \"\")\n",
    )?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Found 1 used string keys in 1 files\n"));
    assert!(!result.stdout.contains("VENDOR"));

    Ok(())
}

#[test]
fn test_unreadable_file_is_skipped() -> Result<()> {
    let test = CliTest::with_file(EN, "\"HELLO\" = \"Hello\";\n")?;
    test.write_file(
        "App/View.swift",
        "x = NSLocalizedString(\"HELLO\", comment: \"\")\n",
    )?;
    std::fs::write(test.root().join("App/Broken.swift"), [0xff, 0xfe, 0x00])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("No localization issues found"));
    assert!(
        result
            .stderr
            .contains("warning: 1 file(s) could not be read (use -v for details)")
    );

    Ok(())
}

#[test]
fn test_missing_project_root_is_warning() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("does-not-exist"))?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stderr
            .contains("warning: Project directory not found: does-not-exist")
    );
    assert!(
        result
            .stdout
            .contains("Found 0 defined string keys in 0 files\n")
    );

    Ok(())
}
