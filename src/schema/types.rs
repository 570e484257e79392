//! Schema type definitions
//!
//! Supported kinds:
//! - string: optional character-count bounds
//! - number: optional signed numeric bounds
//! - bool: kind check only
//! - null: kind check only
//! - array: single item schema or per-position tuple, size bounds, uniqueness
//! - object: declared property schemas, required names, size bounds
//! - any: wildcard, matches every value
//!
//! Builders are chainable value-style mutators so declarations compose
//! inline. Composite schemas reference children through [`SchemaHandle`]s
//! resolved against the arena that allocated them; schema nodes never own
//! each other.

use std::collections::BTreeMap;

use serde::Serialize;

use super::factory::SchemaHandle;

/// Kind discriminant for schema nodes, used in error records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Any,
}

impl SchemaKind {
    /// Returns the display name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::Null => "Null",
            SchemaKind::Bool => "Bool",
            SchemaKind::Number => "Number",
            SchemaKind::String => "String",
            SchemaKind::Array => "Array",
            SchemaKind::Object => "Object",
            SchemaKind::Any => "Any",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Constrains string values by character count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    pub(crate) min_len: Option<usize>,
    pub(crate) max_len: Option<usize>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `min_len` characters.
    pub fn min(mut self, min_len: usize) -> Self {
        self.min_len = Some(min_len);
        self
    }

    /// Allows at most `max_len` characters.
    pub fn max(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// Constrains numeric values by signed bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the value to be at least `min`.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Requires the value to be at most `max`.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Accepts exactly boolean values. No further constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolSchema;

impl BoolSchema {
    pub fn new() -> Self {
        Self
    }
}

/// Accepts exactly null values. No further constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSchema;

impl NullSchema {
    pub fn new() -> Self {
        Self
    }
}

/// Constrains arrays by size, element content, and uniqueness.
///
/// Content runs in one of two modes: `item` applies a single schema to
/// every element; `tuple` applies one schema per position. Setting one
/// mode clears the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    pub(crate) item: Option<SchemaHandle>,
    pub(crate) tuple: Vec<SchemaHandle>,
    pub(crate) min_items: Option<usize>,
    pub(crate) max_items: Option<usize>,
    pub(crate) unique: bool,
    pub(crate) exact_tuple: bool,
}

impl ArraySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `min_items` elements.
    pub fn min(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }

    /// Allows at most `max_items` elements.
    pub fn max(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Validates every element against one schema. Clears tuple mode.
    pub fn item(mut self, schema: SchemaHandle) -> Self {
        self.item = Some(schema);
        self.tuple.clear();
        self
    }

    /// Validates position `i` against `schemas[i]`. An empty list is
    /// ignored. Clears item mode.
    pub fn tuple(mut self, schemas: Vec<SchemaHandle>) -> Self {
        if schemas.is_empty() {
            return self;
        }
        self.tuple = schemas;
        self.item = None;
        self
    }

    /// Requires scalar elements to be pairwise distinct.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// In tuple mode, additionally rejects arrays whose length differs
    /// from the tuple length. Ignored in item mode.
    pub fn exact_tuple(mut self, exact: bool) -> Self {
        self.exact_tuple = exact;
        self
    }
}

/// Constrains objects by declared properties, required names, and size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub(crate) properties: BTreeMap<String, SchemaHandle>,
    pub(crate) required: Vec<String>,
    pub(crate) min_properties: Option<usize>,
    pub(crate) max_properties: Option<usize>,
    pub(crate) deny_unknown: bool,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property schema. The first declaration of a name wins;
    /// later declarations of the same name are ignored.
    pub fn property(mut self, name: impl Into<String>, schema: SchemaHandle) -> Self {
        self.properties.entry(name.into()).or_insert(schema);
        self
    }

    /// Marks a declared property as required. Names without a prior
    /// `property` declaration are ignored.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.properties.contains_key(&name) && !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }

    /// Requires at least `min_properties` members.
    pub fn min(mut self, min_properties: usize) -> Self {
        self.min_properties = Some(min_properties);
        self
    }

    /// Allows at most `max_properties` members.
    pub fn max(mut self, max_properties: usize) -> Self {
        self.max_properties = Some(max_properties);
        self
    }

    /// Rejects instance keys that have no declared property schema
    /// (default: unknown keys are ignored).
    pub fn deny_unknown(mut self, deny: bool) -> Self {
        self.deny_unknown = deny;
        self
    }
}

/// A schema node: one kind plus its constraint payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Bool(BoolSchema),
    Null(NullSchema),
    Array(ArraySchema),
    Object(ObjectSchema),
    Any,
}

impl Schema {
    /// Returns the kind discriminant of this node.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Schema::String(_) => SchemaKind::String,
            Schema::Number(_) => SchemaKind::Number,
            Schema::Bool(_) => SchemaKind::Bool,
            Schema::Null(_) => SchemaKind::Null,
            Schema::Array(_) => SchemaKind::Array,
            Schema::Object(_) => SchemaKind::Object,
            Schema::Any => SchemaKind::Any,
        }
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::String(schema)
    }
}

impl From<NumberSchema> for Schema {
    fn from(schema: NumberSchema) -> Self {
        Schema::Number(schema)
    }
}

impl From<BoolSchema> for Schema {
    fn from(schema: BoolSchema) -> Self {
        Schema::Bool(schema)
    }
}

impl From<NullSchema> for Schema {
    fn from(schema: NullSchema) -> Self {
        Schema::Null(schema)
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Schema::Array(schema)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Schema::Object(schema)
    }
}
