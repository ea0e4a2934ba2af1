//! Call-site locator: finds `<marker><name>(...)` occurrences in source text.
//!
//! This is deliberately not a parser. The locator looks for the fixed marker
//! substring, then matches the argument list with a parenthesis-depth
//! counter, which is enough to skip nested calls inside arguments. It never
//! inspects the surrounding grammar; that is the classifier's job.

use std::collections::HashSet;

use crate::classify::UseCase;
use crate::registry::Binding;

/// The namespaced prefix identifying a target factory invocation.
pub const DEFAULT_MARKER: &str = "vkTools::initializers::";

/// One located factory call, spanning `[start, end)` from the marker through
/// the closing parenthesis. `use_case` and `binding` start out unset and are
/// filled in by the classifier and matcher phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'r> {
    pub start: usize,
    pub end: usize,
    pub name: String,
    pub args: Vec<String>,
    pub use_case: UseCase,
    pub binding: Binding<'r>,
}

/// Index of the `)` that closes the argument list opened at `open`.
///
/// Returns None when the depth never returns to zero before end of text.
fn find_params_end(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0i32;
    for (i, &byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth <= 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split raw parameter text into top-level arguments.
///
/// Line breaks and tabs are stripped first, then commas split only at
/// parenthesis depth zero, and each fragment is whitespace-trimmed.
/// Whitespace-only input yields zero arguments, not one empty argument.
pub fn split_arguments(raw: &str) -> Vec<String> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r' | '\t')).collect();

    let mut fragments = Vec::new();
    let mut depth = 0i32;
    let mut fragment_start = 0;
    for (i, byte) in cleaned.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => {
                fragments.push(cleaned[fragment_start..i].trim().to_string());
                fragment_start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(cleaned[fragment_start..].trim().to_string());

    if fragments.len() == 1 && fragments[0].is_empty() {
        return Vec::new();
    }
    fragments
}

/// Find the next call site at or after `from`.
///
/// Returns None when the marker does not occur again, when no `(` follows
/// the marker, or when the argument list is unbalanced. The latter two
/// degrade silently: no further occurrences are assumed reachable past a
/// malformed call.
pub fn find_next<'r>(source: &str, marker: &str, from: usize) -> Option<CallSite<'r>> {
    let start = source.get(from..)?.find(marker)? + from;
    let name_start = start + marker.len();

    let open = source[name_start..].find('(')? + name_start;
    let close = find_params_end(source, open)?;

    let name = source[name_start..open].to_string();
    let args = split_arguments(&source[open + 1..close]);

    Some(CallSite {
        start,
        end: close + 1,
        name,
        args,
        use_case: UseCase::Unknown,
        binding: Binding::Unresolved,
    })
}

/// Locate all call sites in document order.
///
/// Sites whose name is in the ignore set still advance the scan cursor but
/// are never recorded, so they are neither classified nor rewritten.
pub fn locate_all<'r>(source: &str, marker: &str, ignore: &HashSet<String>) -> Vec<CallSite<'r>> {
    let mut sites = Vec::new();
    let mut cursor = 0;
    while let Some(site) = find_next(source, marker, cursor) {
        cursor = site.end;
        if !ignore.contains(&site.name) {
            sites.push(site);
        }
    }
    sites
}
