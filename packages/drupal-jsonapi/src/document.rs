//! Typed model of the JSON:API response envelope.
//!
//! The CMS returns sparse documents: a primary entity (or list of
//! entities) under `data`, plus a flat `included` side-table holding the
//! related entities the request asked for. Entity identity is the
//! `(id, type)` pair; `included` is only ever consulted by identity
//! lookup, never by position.
//!
//! Attribute values keep their raw JSON shape. Field shapes vary by
//! content type, so normalization lives in [`crate::fields`] rather than
//! in the model.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// A parsed JSON:API response document.
///
/// Both fields default when absent, so a bare `{}` body still parses.
/// The model is read-only after deserialization; nothing in this crate
/// mutates a parsed document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: Option<PrimaryData>,
    #[serde(default)]
    pub included: Vec<Entity>,
}

impl Document {
    /// All primary entities, in server response order.
    ///
    /// A single-entity document yields a one-element slice; `data: null`
    /// yields an empty slice.
    pub fn entities(&self) -> &[Entity] {
        match &self.data {
            Some(PrimaryData::Many(list)) => list,
            Some(PrimaryData::One(entity)) => std::slice::from_ref(&**entity),
            None => &[],
        }
    }

    /// The first (or only) primary entity.
    pub fn primary(&self) -> Option<&Entity> {
        self.entities().first()
    }
}

/// The `data` member: one entity or an ordered list of entities.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Many(Vec<Entity>),
    One(Box<Entity>),
}

/// One content, media, or file record.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

impl Entity {
    /// Raw attribute value, if the field is present.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Named relationship, if the field is present.
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    pub fn is(&self, entity_type: &str) -> bool {
        self.entity_type == entity_type
    }
}

/// A relationship field. `data` may be absent, `null`, a single
/// reference, or a list of references; cardinality is field-dependent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<ReferenceData>,
}

impl Relationship {
    /// References in declaration order, with a scalar wrapped into a
    /// one-element view so callers never branch on cardinality.
    pub fn refs(&self) -> &[Reference] {
        match &self.data {
            Some(ReferenceData::Many(list)) => list,
            Some(ReferenceData::One(reference)) => std::slice::from_ref(reference),
            None => &[],
        }
    }

    /// First reference, if any.
    pub fn first(&self) -> Option<&Reference> {
        self.refs().first()
    }
}

/// The `data` member of a relationship.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReferenceData {
    Many(Vec<Reference>),
    One(Reference),
}

/// A typed pointer at another entity, resolved via the `included`
/// side-table. A reference whose target is absent from `included` is an
/// expected state (sparse fetch), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
}

impl Reference {
    /// Identity match: `(id, type)` pair equality.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.id == entity.id && self.entity_type == entity.entity_type
    }
}
