//! Use-case classifier: decides the syntactic role a located call plays.
//!
//! The classification is a backward character scan over the gap between the
//! previous call site and the current one, not a parse of the surrounding
//! scope. It is heuristic by design and carries the previous site's use-case
//! forward, which is enough because sites are classified in document order.

use std::fmt;

use crate::utils::{last_index_of_non_whitespace, last_index_of_whitespace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UseCase {
    /// `Type name = call(...);` — the only case eligible for full expansion.
    Initializer,
    /// The call is itself an argument of an enclosing call.
    FunctionParameter,
    /// The call sits inside a brace-enclosed list.
    ArrayParameter,
    /// `arr[i] = call(...);`
    ArrayAssignment,
    /// `obj.field = call(...);` or `ptr->field = call(...);`
    MemberAssignment,
    #[default]
    Unknown,
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UseCase::Initializer => "Initializer",
            UseCase::FunctionParameter => "FunctionParameter",
            UseCase::ArrayParameter => "ArrayParameter",
            UseCase::ArrayAssignment => "ArrayAssignment",
            UseCase::MemberAssignment => "MemberAssignment",
            UseCase::Unknown => "Unknown",
        };
        write!(f, "{}", text)
    }
}

/// Sub-classify an assignment once a `=` has been found at `eq_index`.
///
/// Looks at the last non-whitespace character left of the `=`: a `]` means
/// an array element is being assigned; otherwise the token holding that
/// character decides between member access and a plain initializer.
fn classify_assignment(source: &str, eq_index: usize) -> UseCase {
    let Some(found) = last_index_of_non_whitespace(source, eq_index) else {
        return UseCase::Unknown;
    };
    if source.as_bytes()[found] == b']' {
        return UseCase::ArrayAssignment;
    }
    let token_start = last_index_of_whitespace(source, found)
        .map(|i| i + 1)
        .unwrap_or(0);
    let token = &source[token_start..=found];
    if token.contains('.') || token.contains("->") {
        UseCase::MemberAssignment
    } else {
        UseCase::Initializer
    }
}

/// Classify the call starting at `site_start` by scanning backward through
/// the gap since the previous site (`prev_end`).
///
/// The first `(`, `{`, or `=` found (scanning backward) decides. When the
/// scan exhausts the gap without a boundary character, only a previous
/// `ArrayParameter` carries over: later entries of a brace list have
/// nothing but a comma between them and the preceding call.
pub fn classify(source: &str, site_start: usize, prev_end: usize, previous: UseCase) -> UseCase {
    let bytes = source.as_bytes();
    for i in (prev_end..site_start.min(bytes.len())).rev() {
        match bytes[i] {
            b'(' => return UseCase::FunctionParameter,
            b'{' => return UseCase::ArrayParameter,
            b'=' => return classify_assignment(source, i),
            _ => {}
        }
    }
    if previous == UseCase::ArrayParameter {
        UseCase::ArrayParameter
    } else {
        UseCase::Unknown
    }
}
