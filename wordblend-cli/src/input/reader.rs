//! Vocabulary source reading
//!
//! Turns files, directories, and stdin into [`WordSet`]s. Directories are
//! listed non-recursively, skipping hidden and POSIX-style temporary
//! (`*~`) entries; explicitly named files are read regardless.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use wordblend_core::WordSet;

use super::cleaner::clean_line;

/// Read every path (file or directory) into a single word set
pub fn load_words(paths: &[PathBuf]) -> Result<WordSet> {
    let mut words = WordSet::new();
    for path in paths {
        if path.is_dir() {
            for file in dir_files(path)? {
                read_file_into(&mut words, &file)?;
            }
        } else {
            read_file_into(&mut words, path)?;
        }
    }
    Ok(words)
}

/// Read a word set from any reader (stdin, usually)
pub fn load_from_reader<R: Read>(reader: R) -> Result<WordSet> {
    let mut words = WordSet::new();
    for line in BufReader::new(reader).lines() {
        let line = line.context("failed to read vocabulary from stream")?;
        if let Some(word) = clean_line(&line) {
            words.insert(word);
        }
    }
    Ok(words)
}

fn read_file_into(words: &mut WordSet, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;
    for line in content.lines() {
        if let Some(word) = clean_line(line) {
            words.insert(word);
        }
    }
    Ok(())
}

/// List files in a directory, excluding hidden and temporary entries.
/// Sorted so multi-file loads stay deterministic.
fn dir_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list vocabulary dir: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if path.is_file() && !name.starts_with('.') && !name.ends_with('~') {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
