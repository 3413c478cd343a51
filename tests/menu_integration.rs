use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn stockroom(data_dir: &Path, script: &[&str]) -> assert_cmd::assert::Assert {
    let input: String = script.iter().map(|line| format!("{}\n", line)).collect();
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.env_remove("STOCKROOM_LOG")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--seed")
        .arg("7")
        .write_stdin(input)
        .assert()
}

#[test]
fn test_loot_and_display() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path(), &["8", "1", "9"])
        .success()
        .stdout(predicate::str::contains("[+] Product added (id 1)"))
        .stdout(predicate::str::contains("Quantity:"))
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn test_save_then_load_in_new_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(
        temp_dir.path(),
        &["2", "Duct tape", "Grey", "Tool", "5", "4.5", "0.5", "", "6", "9"],
    )
    .success()
    .stdout(predicate::str::contains("Save complete: 1 products"));

    let saved = std::fs::read_to_string(temp_dir.path().join("inventory.txt")).unwrap();
    assert_eq!(saved, "1|Duct tape|Grey|Tool|5|4.5|0.5|\n");

    stockroom(temp_dir.path(), &["7", "1", "9"])
        .success()
        .stdout(predicate::str::contains("Load complete: 1 products"))
        .stdout(predicate::str::contains("Duct tape"));
}

#[test]
fn test_input_sanitization() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(
        temp_dir.path(),
        &["2", "BadItem", "Desc", "Cat", "-10", "badtext", "-5.5", "None", "1", "9"],
    )
    .success()
    .stdout(predicate::str::contains("BadItem"))
    .stdout(predicate::str::contains("Quantity: 0"))
    .stdout(predicate::str::contains("Unit price: 0.00"))
    .stdout(predicate::str::contains("Discount: 0.00"));
}

#[test]
fn test_oversized_description_survives() {
    let temp_dir = tempfile::tempdir().unwrap();
    let long = "A".repeat(1020);

    stockroom(
        temp_dir.path(),
        &["2", "LongItem", &long, "Cat", "1", "1", "0", "Note", "6", "1", "9"],
    )
    .success()
    .stdout(predicate::str::contains("LongItem"));

    let saved = std::fs::read_to_string(temp_dir.path().join("inventory.txt")).unwrap();
    assert!(saved.contains(&long));
}

#[test]
fn test_corrupt_line_is_skipped_with_warning() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("inventory.txt"),
        "1|ItemCorrompu|Desc|Cat|10|5.5|0|Note\n2|ItemCasseDesc|Cat|10|5.5|0|Note\n",
    )
    .unwrap();

    stockroom(temp_dir.path(), &["7", "1", "9"])
        .success()
        .stdout(predicate::str::contains("Warning: line 2 is corrupt"))
        .stdout(predicate::str::contains("ItemCorrompu"))
        .stdout(predicate::str::contains("ItemCasseDesc").not());
}

#[test]
fn test_empty_inventory_operations() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path(), &["1", "3", "1", "9"])
        .success()
        .stdout(predicate::str::contains("Inventory is empty."))
        .stdout(predicate::str::contains("Product not found: 1"));
}

#[test]
fn test_deletion() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path(), &["8", "8", "3", "1", "3", "4", "5", "1", "5", "2", "9"])
        .success()
        .stdout(predicate::str::contains("[-] Product deleted (id 1)"))
        .stdout(predicate::str::contains("Product not found: 4"))
        .stdout(predicate::str::contains("Product not found: 1"))
        .stdout(predicate::str::contains("#2"));
}

#[test]
fn test_modify_with_blank_answers() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(
        temp_dir.path(),
        &["8", "4", "1", "", "", "", "", "", "", "", "1", "9"],
    )
    .success()
    .stdout(predicate::str::contains("[~] Modification successful (id 1)"))
    .stdout(predicate::str::contains("Quantity:"));
}

#[test]
fn test_modify_unknown_id() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path(), &["8", "4", "999", "9"])
        .success()
        .stdout(predicate::str::contains("Product not found: 999"));
}

#[test]
fn test_journal_records_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path(), &["8", "3", "1", "6", "9"]).success();

    let log = std::fs::read_to_string(temp_dir.path().join("history.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("[+] Added product 1"));
    assert!(lines[1].contains("[-] Deleted product 1"));
    assert!(lines[2].contains("[s] Saved 0 products"));
}

#[test]
fn test_no_journal_flag() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--no-journal")
        .write_stdin("8\n6\n9\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("inventory.txt").exists());
    assert!(!temp_dir.path().join("history.log").exists());
}

#[test]
fn test_invalid_config_fails_at_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "max_line_len": 4 }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error"));
}
