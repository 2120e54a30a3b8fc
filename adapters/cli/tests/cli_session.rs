use std::{
    io::Write,
    process::{Command, Stdio},
};

fn run(args: &[&str], stdin: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fountain"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to launch fountain binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write commands");

    let output = child.wait_with_output().expect("binary runs to completion");
    assert!(output.status.success(), "fountain exited with {}", output.status);
    String::from_utf8(output.stdout).expect("stdout is utf8")
}

#[test]
fn small_map_can_be_won_from_piped_input() {
    let stdout = run(
        &["--size", "small", "--no-color"],
        "move east\nmove east\nenable fountain\nmove west\nmove west\n",
    );

    assert!(stdout.contains("Cavern of Objects"));
    assert!(stdout.contains("You activated the Fountain of Objects!"));
    assert!(stdout.contains("You win!"));
    assert!(stdout.contains("You spent 5 turns in the caverns."));
}

#[test]
fn size_is_prompted_until_recognised() {
    let stdout = run(&["--no-color"], "tiny\nLarge\nhelp\n");

    assert!(stdout.contains("unknown map size \"tiny\""));
    assert!(stdout.contains("shoot north"));
    assert!(stdout.contains("You leave the caverns behind."));
}

#[test]
fn custom_layout_file_is_loaded() {
    let layout = concat!(env!("CARGO_MANIFEST_DIR"), "/maps/flooded_gallery.toml");
    let stdout = run(&["--layout", layout, "--no-color"], "move west\n");

    assert!(stdout.contains("You are in the room at (Row=1, Column=0). You have 3 arrows left."));
    assert!(stdout.contains("There is a wall to the west."));
}

#[test]
fn end_of_input_before_choosing_a_size_exits_cleanly() {
    let stdout = run(&["--no-color"], "");
    assert!(stdout.contains("What size map"));
    assert!(!stdout.contains("You are in the room"));
}
