use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::{
    prelude::{predicate, PredicateBooleanExt},
    BoxPredicate,
};

const REINSTATEMENT: &str = "a\nb\nc\n#\na b\nb c\n";

const EVEN_CYCLE: &str = "a\nb\n#\na b\nb a\n";

const ODD_CYCLE: &str = "a\nb\nc\n#\na b\nb c\nc a\n";

fn run_dung(
    instance: &str,
    args: &[&str],
) -> Result<(NamedTempFile, Command), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.tgf")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("carneades")?;
    cmd.arg("dung").arg(file.path()).args(args);
    Ok((file, cmd))
}

fn assert_lines(
    instance: &str,
    args: &[&str],
    expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut pred: BoxPredicate<str> = BoxPredicate::new(predicate::always());
    for line in expected {
        pred = BoxPredicate::new(pred.and(predicate::str::contains(format!("{}\n", line))));
    }
    let n_lines = expected.len();
    pred = BoxPredicate::new(pred.and(predicate::function(move |s: &str| {
        s.lines().count() == n_lines
    })));
    let (file, mut cmd) = run_dung(instance, args)?;
    cmd.assert().success().stdout(pred);
    file.close()?;
    Ok(())
}

#[test]
fn test_grounded_is_default() -> Result<(), Box<dyn std::error::Error>> {
    assert_lines(REINSTATEMENT, &[], &["[a,c]"])
}

#[test]
fn test_reinstatement_preferred() -> Result<(), Box<dyn std::error::Error>> {
    assert_lines(REINSTATEMENT, &["-s", "preferred"], &["[a,c]"])
}

#[test]
fn test_even_cycle_complete() -> Result<(), Box<dyn std::error::Error>> {
    assert_lines(EVEN_CYCLE, &["-s", "CO"], &["[]", "[a]", "[b]"])
}

#[test]
fn test_even_cycle_stable() -> Result<(), Box<dyn std::error::Error>> {
    assert_lines(EVEN_CYCLE, &["-s", "stable"], &["[a]", "[b]"])
}

#[test]
fn test_odd_cycle_has_no_stable_extension() -> Result<(), Box<dyn std::error::Error>> {
    assert_lines(ODD_CYCLE, &["-s", "stable"], &[])
}

#[test]
fn test_credulous_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    assert_lines(EVEN_CYCLE, &["-s", "preferred", "-a", "a"], &["YES"])
}

#[test]
fn test_skeptical_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    assert_lines(
        EVEN_CYCLE,
        &["-s", "preferred", "-a", "a", "--skeptical"],
        &["NO"],
    )
}

#[test]
fn test_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let output = NamedTempFile::new("output.txt")?;
    let (file, mut cmd) = run_dung(REINSTATEMENT, &["-o", output.path().to_str().unwrap()])?;
    cmd.assert().success().stdout(predicate::str::is_empty());
    file.close()?;
    assert_eq!("[a,c]\n", std::fs::read_to_string(output.path())?);
    Ok(())
}

#[test]
fn test_unknown_semantics() -> Result<(), Box<dyn std::error::Error>> {
    let (_file, mut cmd) = run_dung(REINSTATEMENT, &["-s", "ideal"])?;
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(r#"undefined semantics "ideal""#));
    Ok(())
}

#[test]
fn test_unknown_argument() -> Result<(), Box<dyn std::error::Error>> {
    let (_file, mut cmd) = run_dung(REINSTATEMENT, &["-a", "z"])?;
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no such argument: z"));
    Ok(())
}

#[test]
fn test_dangling_attack() -> Result<(), Box<dyn std::error::Error>> {
    let (_file, mut cmd) = run_dung("a\n#\na b\n", &[])?;
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("while reading line with index"));
    Ok(())
}

#[test]
fn test_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("carneades")?;
    cmd.arg("dung").arg("/no/such/file.tgf");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(r#"while opening file "/no/such/file.tgf""#));
    Ok(())
}
