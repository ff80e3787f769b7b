//! Extraction of `replace` directives from manifest text.
//!
//! Two forms are recognised:
//!
//! ```text
//! replace example.com/a => example.com/a-fork v1.2.0
//!
//! replace (
//!     example.com/b => ../b
//!     example.com/c v1.0.0 => example.com/c-fork v1.0.1
//! )
//! ```
//!
//! All single-line directives are returned first, in file order, followed by
//! the contents of every block, block by block. The relative position of
//! single-line directives and blocks in the file does not matter.

use modlens_core::module::ModuleRef;
use modlens_util::errors::ModlensError;

use crate::replacements::Replacement;

const KEYWORD: &str = "replace";
const ARROW: &str = "=>";

/// Parse every `replace` directive in `content`, attributing them to `offender`.
///
/// Malformed lines are logged and skipped.
pub fn parse_replacements(offender: &ModuleRef, content: &str) -> Vec<Replacement> {
    let mut singles: Vec<(usize, &str)> = Vec::new();
    let mut blocks: Vec<Vec<(usize, &str)>> = Vec::new();
    let mut open_block: Option<Vec<(usize, &str)>> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();

        if let Some(block) = open_block.as_mut() {
            if line != ")" {
                if !line.is_empty() {
                    block.push((line_no, line));
                }
                continue;
            }
            blocks.extend(open_block.take());
            continue;
        }

        match directive_body(line) {
            Some("(") => open_block = Some(Vec::new()),
            Some(body) => singles.push((line_no, body)),
            None => {}
        }
    }

    if let Some(block) = open_block {
        tracing::warn!(
            "unterminated replace block in manifest of {}",
            offender.path
        );
        blocks.push(block);
    }

    singles
        .into_iter()
        .chain(blocks.into_iter().flatten())
        .filter_map(|(line_no, text)| match parse_mapping(offender, text) {
            Ok(replacement) => Some(replacement),
            Err(e) => {
                tracing::warn!("skipping line {line_no} of {}: {e}", offender.path);
                None
            }
        })
        .collect()
}

/// Parse a single `original [version] => override [version]` mapping.
pub fn parse_mapping(offender: &ModuleRef, text: &str) -> Result<Replacement, ModlensError> {
    let malformed = |reason: &str| ModlensError::Manifest {
        message: format!("malformed replace '{text}': {reason}"),
    };

    if text.contains(['(', ')']) {
        return Err(malformed("unexpected parenthesis"));
    }
    let (lhs, rhs) = text
        .split_once(ARROW)
        .ok_or_else(|| malformed("missing '=>'"))?;
    let lhs: Vec<&str> = lhs.split_whitespace().collect();
    let rhs: Vec<&str> = rhs.split_whitespace().collect();

    let original = match lhs.as_slice() {
        [original] | [original, _] => *original,
        [] => return Err(malformed("missing original module")),
        _ => return Err(malformed("too many fields before '=>'")),
    };
    let (target, version) = match rhs.as_slice() {
        [target] => (*target, ""),
        [target, version] => (*target, *version),
        [] => return Err(malformed("missing replacement")),
        _ => return Err(malformed("too many fields after '=>'")),
    };

    let version = if is_local_path(target) { "" } else { version };

    Ok(Replacement {
        offender: ModuleRef::clone(offender),
        original: original.to_string(),
        target: target.to_string(),
        version: version.to_string(),
    })
}

/// Whether a replacement target is a relative filesystem path rather than a module.
pub fn is_local_path(target: &str) -> bool {
    target.starts_with("./") || target.starts_with("../")
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// The text following the `replace` keyword, if `line` is a directive.
fn directive_body(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(KEYWORD)?;
    if rest.starts_with('(') || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}
