use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::{
    prelude::{predicate, PredicateBooleanExt},
    BoxPredicate,
};

const INSTANCE: &str = "1\n2\n3\n4\n#\n1 2\n1 3\n2 1\n2 3\n3 4\n4 3\n";

const ODD_CYCLE: &str = "a\nb\nc\n#\na b\nb c\nc a\n";

fn test_answer_for_track(
    track: &str,
    possible_answers: &[&'static str],
    additional_arg: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track_and_instance(INSTANCE, track, possible_answers, additional_arg)
}

fn test_answer_for_track_and_instance(
    instance: &str,
    track: &str,
    possible_answers: &[&'static str],
    additional_arg: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.tgf")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("carneades")?;
    cmd.arg("iccma")
        .arg("-f")
        .arg(file.path())
        .arg("--fo")
        .arg("tgf")
        .arg("-p")
        .arg(track);
    if let Some(a) = additional_arg {
        cmd.arg("-a").arg(a);
    }
    let mut pred: BoxPredicate<str> = BoxPredicate::new(predicate::never());
    for a in possible_answers {
        pred = BoxPredicate::new(pred.or(predicate::eq(*a)));
    }
    cmd.assert()
        .success()
        .stdout(pred)
        .stderr(predicate::str::is_empty());
    file.close()?;
    Ok(())
}

#[test]
fn test_grounded_se() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track("SE-GR", &["[]\n"], None)
}

#[test]
fn test_complete_se() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track(
        "SE-CO",
        &["[]\n", "[4]\n", "[1,4]\n", "[4,1]\n", "[2,4]\n", "[4,2]\n"],
        None,
    )
}

#[test]
fn test_complete_dc() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track("DC-CO", &["YES\n"], Some("1"))
}

#[test]
fn test_complete_ds() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track("DS-CO", &["NO\n"], Some("4"))
}

#[test]
fn test_preferred_ds() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track("DS-PR", &["YES\n"], Some("4"))
}

#[test]
fn test_stable_ee() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track(
        "EE-ST",
        &["[[1,4],[2,4]]\n", "[[2,4],[1,4]]\n", "[[4,1],[4,2]]\n", "[[4,2],[4,1]]\n"],
        None,
    )
}

#[test]
fn test_stable_se_no_extension() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track_and_instance(ODD_CYCLE, "SE-ST", &["NO\n"], None)
}

#[test]
fn test_stable_ee_no_extension() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_track_and_instance(ODD_CYCLE, "EE-ST", &["[]\n"], None)
}

#[test]
fn test_missing_argument() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.tgf")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("carneades")?;
    cmd.arg("iccma").arg("-f").arg(file.path()).arg("-p").arg("DC-PR");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing argument"));
    file.close()?;
    Ok(())
}

#[test]
fn test_unknown_problem() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.tgf")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("carneades")?;
    cmd.arg("iccma").arg("-f").arg(file.path()).arg("-p").arg("SE-ID");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(r#"undefined semantics "ID""#));
    file.close()?;
    Ok(())
}

#[test]
fn test_formats() {
    let mut cmd = Command::cargo_bin("carneades").unwrap();
    cmd.arg("iccma").arg("--formats");
    cmd.assert().success().stdout(predicate::eq("[tgf]\n"));
}
