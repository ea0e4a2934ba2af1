//! Descriptor registry: which factory calls can be expanded, and into what.
//!
//! A [`MethodDescriptor`] maps one `(name, arity)` pair to an ordered list of
//! struct field assignments. The same pair may be registered more than once
//! when the factory is genuinely ambiguous (the Vulkan samples use
//! `writeDescriptorSet` with four arguments for both buffer and image
//! writes); all candidates are kept in registration order and surfaced to
//! the user as "Possibility #N".

use std::collections::HashMap;

use anyhow::{Context, Result, bail, ensure};

pub mod vulkan;

/// Right-hand side of one expanded field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTemplate {
    /// Emitted verbatim.
    Literal(String),
    /// Substituted with the call's k-th positional argument (0-indexed).
    Arg(usize),
}

impl ValueTemplate {
    /// Parse the raw table form: `#k` is a back-reference, anything else a literal.
    fn parse(raw: &str) -> Result<Self> {
        match raw.strip_prefix('#') {
            Some(index) => {
                let index = index
                    .parse::<usize>()
                    .with_context(|| format!("invalid argument back-reference '{}'", raw))?;
                Ok(ValueTemplate::Arg(index))
            }
            None => Ok(ValueTemplate::Literal(raw.to_string())),
        }
    }
}

/// One output field of an expansion: `<target>.<path> = <value>;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInit {
    pub path: String,
    pub value: ValueTemplate,
}

impl FieldInit {
    /// Resolve the template against the call's arguments.
    ///
    /// Back-reference indices are validated against the descriptor arity at
    /// construction, and the matcher only binds descriptors whose arity
    /// equals the argument count, so indexing cannot go out of range.
    pub fn resolve<'a>(&'a self, args: &'a [String]) -> &'a str {
        match &self.value {
            ValueTemplate::Literal(text) => text,
            ValueTemplate::Arg(index) => &args[*index],
        }
    }
}

/// An expansion template for one `(name, arity)` factory signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub arity: usize,
    pub fields: Vec<FieldInit>,
}

impl MethodDescriptor {
    /// Build and validate a descriptor from the static table form.
    ///
    /// Fails if the back-reference indices used by `fields` are not exactly
    /// `{0, .., arity-1}`: an out-of-range, duplicate, or missing reference
    /// is a defect in the table, not a per-file condition.
    pub fn new(name: &str, arity: usize, fields: &[(&str, &str)]) -> Result<Self> {
        let fields = fields
            .iter()
            .map(|(path, raw)| {
                Ok(FieldInit {
                    path: path.to_string(),
                    value: ValueTemplate::parse(raw)?,
                })
            })
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("descriptor '{}/{}'", name, arity))?;

        let mut seen = vec![false; arity];
        for field in &fields {
            if let ValueTemplate::Arg(index) = field.value {
                ensure!(
                    index < arity,
                    "descriptor '{}/{}': field '{}' references argument #{} but arity is {}",
                    name,
                    arity,
                    field.path,
                    index,
                    arity
                );
                ensure!(
                    !seen[index],
                    "descriptor '{}/{}': argument #{} referenced more than once",
                    name,
                    arity,
                    index
                );
                seen[index] = true;
            }
        }
        if let Some(missing) = seen.iter().position(|used| !used) {
            bail!(
                "descriptor '{}/{}': argument #{} is never referenced",
                name,
                arity,
                missing
            );
        }

        Ok(Self {
            name: name.to_string(),
            arity,
            fields,
        })
    }
}

/// Result of looking up a call site in the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Binding<'r> {
    Resolved(&'r MethodDescriptor),
    /// Several descriptors share the `(name, arity)` pair; registration
    /// order is preserved and drives "Possibility #N" numbering.
    Ambiguous(&'r [MethodDescriptor]),
    #[default]
    Unresolved,
}

/// Immutable lookup table built once at startup and shared across files.
#[derive(Debug)]
pub struct Registry {
    by_name: HashMap<String, HashMap<usize, Vec<MethodDescriptor>>>,
}

impl Registry {
    pub fn build(descriptors: Vec<MethodDescriptor>) -> Self {
        let mut by_name: HashMap<String, HashMap<usize, Vec<MethodDescriptor>>> = HashMap::new();
        for descriptor in descriptors {
            by_name
                .entry(descriptor.name.clone())
                .or_default()
                .entry(descriptor.arity)
                .or_default()
                .push(descriptor);
        }
        Self { by_name }
    }

    /// The built-in Vulkan initializer table.
    pub fn builtin() -> Result<Self> {
        Ok(Self::build(vulkan::descriptors()?))
    }

    pub fn lookup(&self, name: &str, arity: usize) -> Binding<'_> {
        match self
            .by_name
            .get(name)
            .and_then(|by_arity| by_arity.get(&arity))
        {
            Some(candidates) if candidates.len() == 1 => Binding::Resolved(&candidates[0]),
            Some(candidates) => Binding::Ambiguous(candidates),
            None => Binding::Unresolved,
        }
    }
}
