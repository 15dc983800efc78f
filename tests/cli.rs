use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{self, Command, Output, Stdio},
};

fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("life_the_game-cli-{}-{name}", process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn life(dir: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_life_the_game"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The process may exit before reading anything.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

#[test]
fn missing_input_file_exits_with_failure() {
    let dir = workdir("missing");
    let out = life(&dir, "");
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("file not found: src/1.txt"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn empty_input_file_exits_with_failure() {
    let dir = workdir("empty");
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(dir.join("src/1.txt"), "\n").unwrap();
    let out = life(&dir, "1\n");
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid input"), "{stderr}");
}

#[test]
fn reprompts_then_runs_to_completion() {
    let dir = workdir("blinker");
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(dir.join("src/1.txt"), "0 1 0\n0 1 0\n0 1 0\n").unwrap();
    let out = life(&dir, "-5\nabc\n1\n");
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(out.status.code(), Some(0));

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr.matches("Invalid input.").count(), 2, "{stderr}");

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.matches("Enter number of generations: ").count(), 3);
    assert!(stdout.contains("Generation 1:\n0 1 0\n0 1 0\n0 1 0\n"), "{stdout}");
    assert!(!stdout.contains("Generation 2:"));
}
