use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::Command;

#[test]
fn transform_two_disjunctions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnformula")?;
    cmd.arg("--sample").arg("two-ors").arg("--no-identity");

    let output = cmd.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let expected = "
two-ors: AND(OR(two_1, two_2), OR(three_1, three_2))
Original ===========================
and:
-or:
--literal:two_1
--literal:two_2
-or:
--literal:three_1
--literal:three_2
Distributed ===========================
or:
-or:
--and:
---literal:two_1
---literal:three_1
--and:
---literal:two_1
---literal:three_2
-or:
--and:
---literal:two_2
---literal:three_1
--and:
---literal:two_2
---literal:three_2
Normalized ===========================
or:
-and:
--literal:two_1
--literal:three_1
-and:
--literal:two_1
--literal:three_2
-and:
--literal:two_2
--literal:three_1
-and:
--literal:two_2
--literal:three_2
";
    assert_eq!(expected, stdout);

    Ok(())
}

#[test]
fn run_all_samples_with_identity() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnformula")?;

    let output = cmd.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(9, stdout.matches("Original ===").count());
    assert_eq!(9, stdout.matches("Distributed ===").count());
    assert_eq!(9, stdout.matches("Normalized ===").count());
    assert!(stdout.contains("literal:two_1, 0x"));
    assert!(stdout.contains("deep-and: AND(a, AND(b, OR(c, d)))"));
    assert!(stdout.contains("and:one, 0x"));

    Ok(())
}

#[test]
fn list_samples() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnformula")?;
    cmd.arg("--list");

    let output = cmd.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split('\t').next())
        .collect();
    assert_eq!(
        vec![
            "or-of-ands",
            "labeled-and",
            "or-and-literal",
            "or-and-literals",
            "two-ors",
            "nested-and",
            "nested-or",
            "deep-and",
            "three-ors",
        ],
        names
    );
    assert!(stdout.contains("nested-or\tOR(OR(p, q), r)"));

    Ok(())
}

#[test]
fn unknown_sample_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnformula")?;
    cmd.arg("--sample").arg("does-not-exist");

    let output = cmd.output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unknown sample does-not-exist"));

    Ok(())
}

#[test]
fn normalize_first() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnformula")?;
    cmd.arg("-s")
        .arg("nested-and")
        .arg("--normalize-first")
        .arg("--no-identity");

    let output = cmd.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let banners: Vec<&str> = stdout.lines().filter(|l| l.ends_with("===")).collect();
    assert_eq!(
        vec![
            "Original ===========================",
            "Normalized ===========================",
            "Distributed ===========================",
            "Normalized ===========================",
        ],
        banners
    );
    assert!(stdout.ends_with("and:\n-literal:a\n-literal:b\n-literal:c\n"));

    Ok(())
}

#[test]
fn settings_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut config_file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        config_file,
        "[pipeline]\nnormalize_before = true\nnormalize_after = false\n\n[output]\nidentity = false"
    )?;
    config_file.flush()?;

    let mut cmd = Command::cargo_bin("dnformula")?;
    cmd.arg("--config")
        .arg(config_file.path())
        .arg("--sample")
        .arg("nested-or");

    let output = cmd.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    assert!(!stdout.contains("0x"));
    let banners: Vec<&str> = stdout.lines().filter(|l| l.ends_with("===")).collect();
    assert_eq!(
        vec![
            "Original ===========================",
            "Normalized ===========================",
            "Distributed ===========================",
        ],
        banners
    );
    assert!(stdout.ends_with("or:\n-literal:p\n-literal:q\n-literal:r\n"));

    Ok(())
}
