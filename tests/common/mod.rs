#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::Builder;

pub fn run_wordhash(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_wordhash"));
    command.args(args);
    command.output().expect("failed to run wordhash binary")
}

pub fn write_temp_wordlist(words: &[String]) -> PathBuf {
    let mut temp_file = Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("temp wordlist file should be created");
    for word in words {
        writeln!(temp_file, "{word}").expect("temp wordlist write should succeed");
    }
    temp_file.keep().expect("temp file should persist").1
}

pub fn numbered_words(len: usize) -> Vec<String> {
    (0..len).map(|index| format!("word{index}")).collect()
}
