mod common;

use common::{stdout, TestEnv};

#[test]
fn test_describe_carnivore() {
    let env = TestEnv::new();

    let output = env.run(&[
        "describe",
        "--genus",
        "Tyrannosaurus",
        "--carnivorous",
        "--length",
        "12",
    ]);

    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output).trim_end(), @"The Tyrannosaurus carnivorous dinosaur is 12 meters long");
}

#[test]
fn test_describe_defaults() {
    let env = TestEnv::new();

    let output = env.run(&["describe"]);

    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output).trim_end(), @"The Unknown non-carnivorous dinosaur is 0 meters long");
}

#[test]
fn test_describe_json() {
    let env = TestEnv::new();

    let output = env.run(&["--json", "describe", "--genus", "Triceratops", "--length", "9"]);

    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["genus"], "Triceratops");
    assert_eq!(value["diet"], "herbivorous");
    assert_eq!(value["length"], 9);
}
