//! Converter for tab-separated dictionary body files.
//!
//! Each line holds `headword\texplanation`. A headword may appear on several
//! lines; its explanations accumulate in file order.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::keytext::{KeyTextError, Result};

/// One body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyEntry {
    pub headword: String,
    pub explanation: String,
}

/// `headword -> entries`, with entries in file order.
pub type BodyIndex = HashMap<String, Vec<BodyEntry>>;

/// Reads and converts a UTF-8 body file.
pub fn convert_body(path: impl AsRef<Path>) -> Result<BodyIndex> {
    let path = path.as_ref();
    info!("Opening body file: {}", path.display());
    parse_body(BufReader::new(File::open(path)?))
}

/// Converts body lines from any buffered reader.
///
/// # Errors
/// Fails on the first line that has no tab, an empty headword, an empty
/// explanation, or no line terminator.
pub fn parse_body<R: BufRead>(mut reader: R) -> Result<BodyIndex> {
    let mut body = BodyIndex::new();
    let mut entries = 0usize;
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_no += 1;

        let (headword, rest) = match line.split_once('\t') {
            Some((headword, rest)) if !headword.is_empty() && !rest.is_empty() => (headword, rest),
            _ => {
                return Err(KeyTextError::InvalidBodyLine {
                    line: line_no,
                    content: line.clone(),
                })
            }
        };

        let explanation = rest
            .strip_suffix("\r\n")
            .or_else(|| rest.strip_suffix('\n'))
            .ok_or(KeyTextError::MissingNewline { line: line_no })?;

        body.entry(headword.to_string()).or_default().push(BodyEntry {
            headword: headword.to_string(),
            explanation: explanation.to_string(),
        });
        entries += 1;
    }

    info!("Convert {} (merged) / {} (split) entries", body.len(), entries);
    Ok(body)
}
