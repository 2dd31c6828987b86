use snapbox::cargo_bin;
use snapbox::cmd::Command;

fn trit() -> Command {
    Command::new(cargo_bin!("trit"))
}

#[test]
fn eval_binary() {
    trit()
        .args(["eval", "and", "true", "unknown"])
        .assert()
        .success()
        .stdout_eq("Unknown\n");
}

#[test]
fn eval_unary() {
    trit()
        .args(["eval", "not", "false"])
        .assert()
        .success()
        .stdout_eq("True\n");
}

#[test]
fn eval_operator_any_case() {
    trit()
        .args(["eval", "AND", "true", "true"])
        .assert()
        .success()
        .stdout_eq("True\n");
    trit()
        .args(["eval", "Nxor", "true", "false"])
        .assert()
        .success()
        .stdout_eq("False\n");
}

#[test]
fn table_operator_any_case() {
    trit()
        .args(["table", "NOT"])
        .assert()
        .success()
        .stdout_eq("A | NOT\n--+----\nF | T\nU | U\nT | F\n");
}

#[test]
fn eval_wrong_arity() {
    trit().args(["eval", "and", "true"]).assert().failure();
}

#[test]
fn eval_bad_literal() {
    trit().args(["eval", "not", "maybe"]).assert().failure();
}

#[test]
fn eval_json() {
    trit()
        .args(["--output", "json", "eval", "xor", "true", "unknown"])
        .assert()
        .success()
        .stdout_eq("null\n");
}

#[test]
fn table_text() {
    trit()
        .args(["table", "nor"])
        .assert()
        .success()
        .stdout_eq(
            "A | B | NOR
--+---+----
F | F | T
F | U | U
F | T | F
U | F | U
U | U | U
U | T | F
T | F | F
T | U | F
T | T | F
",
        );
}

#[test]
fn table_yaml() {
    trit()
        .args(["-o", "yaml", "table", "ia"])
        .assert()
        .success()
        .stdout_eq(
            "- inputs:
  - false
  output: false
- inputs:
  - null
  output: true
- inputs:
  - true
  output: false
",
        );
}

#[test]
fn reductions() {
    trit()
        .args(["all", "true", "true", "false"])
        .assert()
        .success()
        .stdout_eq("False\n");
    trit()
        .args(["any", "false", "unknown", "true"])
        .assert()
        .success()
        .stdout_eq("True\n");
    trit()
        .args(["none", "false", "unknown"])
        .assert()
        .success()
        .stdout_eq("True\n");
    trit()
        .args(["known", "--tasks", "4", "true", "unknown"])
        .assert()
        .success()
        .stdout_eq("False\n");
}

#[test]
fn reduction_of_nothing() {
    trit().args(["all"]).assert().success().stdout_eq("False\n");
}

#[test]
fn random_weighted() {
    trit()
        .args(["-o", "json", "random", "--weight", "60", "--weight", "40", "--count", "2"])
        .assert()
        .success()
        .stdout_eq("[\n  null,\n  null\n]\n");
}
