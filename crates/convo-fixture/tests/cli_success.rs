#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

const FAKE_TTS: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    --text) text="$2"; shift 2 ;;
    --write-media) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
printf '%s\n' "$text" > "$out"
"#;

const FAKE_FFMPEG: &str = r#"#!/bin/sh
for last; do :; done
while [ $# -gt 0 ]; do
  case "$1" in
    -i) manifest="$2"; shift 2 ;;
    *) shift ;;
  esac
done
dir=$(dirname "$manifest")
sed -n "s/^file '\(.*\)'$/\1/p" "$manifest" | while read -r seg; do
  cat "$dir/$seg"
done > "$last"
"#;

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
}

#[test]
fn generates_fixture_with_configured_tools() {
    let dir = tempfile::tempdir().expect("tempdir");
    let tts = dir.path().join("fake-edge-tts");
    let ffmpeg = dir.path().join("fake-ffmpeg");
    write_script(&tts, FAKE_TTS);
    write_script(&ffmpeg, FAKE_FFMPEG);

    fs::write(
        dir.path().join("convo-fixture.toml"),
        format!(
            r#"
tts_program = "{}"
concat_program = "{}"

[[utterances]]
text = "Hello"
voice = "voiceA"

[[utterances]]
text = "World"
voice = "voiceB"

[[utterances]]
text = "Bye"
voice = "voiceA"
"#,
            tts.display(),
            ffmpeg.display()
        ),
    )
    .expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_generate-conversation"))
        .current_dir(dir.path())
        .output()
        .expect("run generate-conversation");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Generating line 1: Hello..."));
    assert!(stdout.contains("Generating line 3: Bye..."));
    assert!(stdout.contains("Combining audio files..."));

    let fixture = dir.path().join("src/fixtures/test4_conversation.mp3");
    assert_eq!(fs::read_to_string(&fixture).unwrap(), "Hello\nWorld\nBye\n");

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("temp_line_") || name == "filelist.txt")
        .collect();
    assert!(leftovers.is_empty(), "{:?}", leftovers);
}
