//! Relationship-chain resolution over a JSON:API document.
//!
//! The CMS stores media as a two-hop indirection: a node references a
//! media entity, the media entity references the underlying file entity,
//! and only the file carries a usable path. Resolution walks such a
//! chain against the `included` side-table and produces an absolute URL,
//! or nothing.
//!
//! Every failure mode short-circuits to `None`: a missing relationship,
//! a reference whose target was not included in the response, or a
//! target of the wrong type. Callers render their own placeholder when
//! resolution comes back empty.

use serde_json::Value;

use crate::document::{Entity, Reference};
use crate::links::to_absolute_url;

/// One step of a relationship chain: the field to follow and,
/// optionally, the entity type the target must have. A type mismatch is
/// treated as "not found", never as an error.
#[derive(Debug, Clone, Copy)]
pub struct Hop<'a> {
    pub field: &'a str,
    pub expected_type: Option<&'a str>,
}

impl<'a> Hop<'a> {
    pub fn new(field: &'a str, expected_type: &'a str) -> Self {
        Self {
            field,
            expected_type: Some(expected_type),
        }
    }

    /// A hop that accepts any target type.
    pub fn any(field: &'a str) -> Self {
        Self {
            field,
            expected_type: None,
        }
    }
}

/// Identity lookup in the `included` side-table.
pub fn find_included<'a>(included: &'a [Entity], reference: &Reference) -> Option<&'a Entity> {
    included.iter().find(|entity| reference.matches(entity))
}

/// Follow one hop from `current`: first reference wins when the field is
/// multi-valued.
fn follow_hop<'a>(current: &Entity, included: &'a [Entity], hop: &Hop) -> Option<&'a Entity> {
    let reference = current.relationship(hop.field)?.first()?;
    resolve_reference(included, reference, hop.expected_type)
}

fn resolve_reference<'a>(
    included: &'a [Entity],
    reference: &Reference,
    expected_type: Option<&str>,
) -> Option<&'a Entity> {
    if let Some(expected) = expected_type {
        if reference.entity_type != expected {
            tracing::debug!(
                expected,
                found = %reference.entity_type,
                id = %reference.id,
                "Reference has unexpected type, treating as unresolved"
            );
            return None;
        }
    }

    let entity = find_included(included, reference);
    if entity.is_none() {
        tracing::debug!(
            id = %reference.id,
            entity_type = %reference.entity_type,
            "Referenced entity absent from included set"
        );
    }
    entity
}

/// Walk a relationship chain starting at `root`, returning the entity
/// the final hop lands on.
///
/// The walk is bounded by the chain length, so self-referencing entities
/// cannot loop it. An empty chain returns `root` itself.
pub fn resolve_entity<'a>(
    root: &'a Entity,
    included: &'a [Entity],
    chain: &[Hop],
) -> Option<&'a Entity> {
    let mut current = root;
    for hop in chain {
        current = follow_hop(current, included, hop)?;
    }
    Some(current)
}

/// Terminal path extraction from a file entity: `uri.url` first, bare
/// `url` second. Empty strings count as "no value".
pub fn file_url(entity: &Entity) -> Option<&str> {
    entity
        .attr("uri")
        .and_then(|uri| uri.get("url"))
        .and_then(Value::as_str)
        .or_else(|| entity.attr("url").and_then(Value::as_str))
        .filter(|url| !url.is_empty())
}

/// Resolve a relationship chain to a single absolute media URL.
///
/// `None` means some step of the chain did not resolve; the caller is
/// expected to substitute a placeholder.
pub fn resolve_media_url(
    root: &Entity,
    included: &[Entity],
    chain: &[Hop],
    base_url: &str,
) -> Option<String> {
    let target = resolve_entity(root, included, chain)?;
    let path = file_url(target)?;
    Some(to_absolute_url(Some(path), base_url))
}

/// Resolve every reference of the first hop's field independently
/// through the rest of the chain.
///
/// Output preserves the relative order of the resolving inputs;
/// references that fail to resolve are dropped, never emitted as
/// placeholders.
pub fn resolve_media_urls(
    root: &Entity,
    included: &[Entity],
    chain: &[Hop],
    base_url: &str,
) -> Vec<String> {
    let Some((first, rest)) = chain.split_first() else {
        return Vec::new();
    };
    let Some(relationship) = root.relationship(first.field) else {
        return Vec::new();
    };

    relationship
        .refs()
        .iter()
        .filter_map(|reference| {
            let entity = resolve_reference(included, reference, first.expected_type)?;
            let target = resolve_entity(entity, included, rest)?;
            let path = file_url(target)?;
            Some(to_absolute_url(Some(path), base_url))
        })
        .collect()
}
