//! Embeds the game dictionary
//!
//! `data/words.txt` holds one word per line. The words are written out as a
//! `WORDS` slice that `wordlists::embedded` pulls in with `include!`, so the
//! binary needs no data files at run time.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

const DICTIONARY: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={DICTIONARY}");

    let raw = fs::read_to_string(DICTIONARY)
        .unwrap_or_else(|e| panic!("cannot read dictionary {DICTIONARY}: {e}"));
    let source = dictionary_source(&raw);

    let target = PathBuf::from(env::var("OUT_DIR").unwrap()).join("words.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
}

/// Rust source for the dictionary constants; blank lines are skipped
fn dictionary_source(raw: &str) -> String {
    let words: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let mut source = String::new();
    writeln!(source, "/// Secret and guessable words, from `{DICTIONARY}`").unwrap();
    writeln!(source, "pub const WORDS: &[&str] = &{words:?};").unwrap();
    writeln!(source).unwrap();
    writeln!(source, "/// Entries in `WORDS`").unwrap();
    writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();
    source
}
