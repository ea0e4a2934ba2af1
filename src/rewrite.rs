//! Rewriter: turns classified, matched call sites into replacement text.
//!
//! Replacements are applied in strict reverse document order so that each
//! edit leaves the byte offsets of all not-yet-processed, lower-offset
//! sites untouched.
//!
//! Only an unambiguously matched `Initializer` site is expanded in place;
//! every other matched site gets an explanatory comment block inserted
//! before its statement while the original code is left intact.

use anyhow::{Context, Result};

use crate::classify::UseCase;
use crate::locate::CallSite;
use crate::registry::{Binding, MethodDescriptor};
use crate::utils::{
    index_of_non_whitespace, last_index_of_non_whitespace, last_index_of_whitespace, line_start,
};

/// A token recovered by backward scanning, `[start, start + text.len())`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    start: usize,
    text: String,
}

/// The whitespace prefix of the line containing `pos`.
fn determine_indent(source: &str, pos: usize) -> Result<String> {
    let start = line_start(source, pos);
    let first = index_of_non_whitespace(source, start)
        .context("indentation scan ran past end of text")?;
    Ok(source[start..first].to_string())
}

/// The token ending at the last non-whitespace character before `before`.
///
/// Token start falls back to the start of text when no whitespace precedes
/// it, so a declaration at offset zero still resolves.
fn token_before(source: &str, before: usize) -> Option<Token> {
    let end = last_index_of_non_whitespace(source, before)? + 1;
    let start = last_index_of_whitespace(source, end)
        .map(|i| i + 1)
        .unwrap_or(0);
    Some(Token {
        start,
        text: source[start..end].to_string(),
    })
}

/// The assignment target: the token immediately before the nearest `=`
/// preceding the call.
fn locate_assignment_name(source: &str, call_start: usize) -> Result<Token> {
    let eq = source[..call_start]
        .rfind('=')
        .context("call is not part of an assignment (no '=' before it)")?;
    token_before(source, eq).context("no variable name before '='")
}

/// The declared type: the token immediately before the variable name.
fn locate_assignment_type(source: &str, name_start: usize) -> Result<Token> {
    token_before(source, name_start).context("no declared type before variable name")
}

/// End of the statement being replaced: the call end, extended past any
/// trailing run of semicolons (whitespace between them included).
fn statement_end(source: &str, from: usize) -> usize {
    let bytes = source.as_bytes();
    let mut end = from;
    let mut cursor = from;
    while cursor < bytes.len() && matches!(bytes[cursor], b' ' | b'\t' | b';') {
        cursor += 1;
        if bytes[cursor - 1] == b';' {
            end = cursor;
        }
    }
    end
}

fn push_comment_fields(
    out: &mut String,
    indent: &str,
    descriptor: &MethodDescriptor,
    args: &[String],
) {
    for field in &descriptor.fields {
        out.push_str(&format!(
            "{}// .{} = {};\n",
            indent,
            field.path,
            field.resolve(args)
        ));
    }
}

/// Insert a comment block describing the expansion before the call's line.
///
/// The statement itself is preserved byte-for-byte immediately after the
/// comment. Ambiguous bindings repeat the field block once per candidate
/// under a "Possibility #N" header, in registration order.
///
/// `floor` is the end of the previous site's statement. The insertion
/// point is clamped to it so that when two sites share a line, this edit
/// never lands inside the earlier site's still-unpatched span.
fn patch_comment(source: &str, site: &CallSite, floor: usize) -> Result<String> {
    let at = line_start(source, site.start).max(floor);
    let indent = determine_indent(source, site.start)?;

    let mut block = format!("{}// Lookup of initializer '{}'\n", indent, site.name);
    match &site.binding {
        Binding::Resolved(descriptor) => {
            push_comment_fields(&mut block, &indent, descriptor, &site.args)
        }
        Binding::Ambiguous(candidates) => {
            for (index, descriptor) in candidates.iter().enumerate() {
                block.push_str(&format!("{}// Possibility #{}\n", indent, index));
                push_comment_fields(&mut block, &indent, descriptor, &site.args);
            }
        }
        Binding::Unresolved => return Ok(source.to_string()),
    }

    Ok(format!("{}{}{}", &source[..at], block, &source[at..]))
}

/// Replace the whole `Type name = call(...);` statement with `Type name{};`
/// followed by one field assignment per descriptor field.
fn patch_initializer(source: &str, site: &CallSite, floor: usize) -> Result<String> {
    let Binding::Resolved(descriptor) = &site.binding else {
        // Ambiguous initializers fall back to the comment form.
        return patch_comment(source, site, floor);
    };

    let name = locate_assignment_name(source, site.start)?;
    let type_token = locate_assignment_type(source, name.start)?;
    let indent = determine_indent(source, type_token.start)?;

    let mut block = format!("{} {}{{}};\n", type_token.text, name.text);
    for field in &descriptor.fields {
        block.push_str(&format!(
            "{}{}.{} = {};\n",
            indent,
            name.text,
            field.path,
            field.resolve(&site.args)
        ));
    }

    let end = statement_end(source, site.end);
    Ok(format!(
        "{}{}{}",
        &source[..type_token.start],
        block,
        &source[end..]
    ))
}

fn patch(source: &str, site: &CallSite, floor: usize) -> Result<String> {
    match (&site.binding, site.use_case) {
        (Binding::Unresolved, _) => Ok(source.to_string()),
        (Binding::Resolved(_), UseCase::Initializer) => patch_initializer(source, site, floor),
        _ => patch_comment(source, site, floor),
    }
}

/// Apply all site replacements, highest start offset first.
///
/// Each site's edit is bounded below by the end of the previous site's
/// statement, so sites sharing a line cannot shift each other's recorded
/// offsets.
pub fn apply(source: &str, sites: &[CallSite]) -> Result<String> {
    let mut text = source.to_string();
    for (index, site) in sites.iter().enumerate().rev() {
        let floor = match index.checked_sub(1) {
            Some(prev) => statement_end(&text, sites[prev].end),
            None => 0,
        };
        text = patch(&text, site, floor)?;
    }
    Ok(text)
}
