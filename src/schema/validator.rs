//! Schema validator for value trees
//!
//! Validation semantics:
//! - Every kind follows the same two-phase contract: kind check first,
//!   then constraint checks
//! - A kind mismatch records exactly one error and stops that node;
//!   composites do not recurse into a value of the wrong kind
//! - Constraint checks evaluate independently in the same call, so
//!   violating two bounds records two separate errors
//! - Composites recurse with path bookkeeping; one pass surfaces every
//!   independent violation
//!
//! Forbidden behaviors:
//! - Coercion between kinds
//! - Stopping at the first violation
//! - Mutating the instance or the schema

use std::collections::BTreeSet;

use crate::json::{Value, ValueKind};

use super::context::ValidatorContext;
use super::errors::{ValidationError, ValidationReport};
use super::factory::{SchemaArena, SchemaHandle};
use super::types::{ArraySchema, NumberSchema, ObjectSchema, Schema, SchemaKind, StringSchema};

/// Walks a value tree against a schema tree, recording violations.
///
/// The validator borrows the arena read-only; a schema tree may be
/// reused across sequential runs. The instance is never mutated.
pub struct SchemaValidator<'a> {
    arena: &'a SchemaArena,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator backed by the given arena.
    pub fn new(arena: &'a SchemaArena) -> Self {
        Self { arena }
    }

    /// Validates a value tree against the schema rooted at `root`,
    /// using a fresh context with unlimited error recording.
    ///
    /// # Panics
    ///
    /// Panics if `root`, or any handle reachable from it, was not
    /// produced by this validator's arena.
    pub fn validate(&self, root: SchemaHandle, value: &Value) -> ValidationReport {
        let mut ctx = ValidatorContext::new();
        let valid = self.validate_with(root, value, &mut ctx);
        ValidationReport::new(valid, ctx.into_errors())
    }

    /// Validates one node tree against a caller-supplied context.
    ///
    /// Returns false if this node or any descendant reached through it
    /// recorded at least one violation. The boolean outcome is tracked
    /// independently of the context's error cap.
    pub fn validate_with(
        &self,
        handle: SchemaHandle,
        value: &Value,
        ctx: &mut ValidatorContext,
    ) -> bool {
        match self.arena.get(handle) {
            Schema::String(schema) => self.validate_string(schema, value, ctx),
            Schema::Number(schema) => self.validate_number(schema, value, ctx),
            Schema::Bool(_) => self.validate_bool(value, ctx),
            Schema::Null(_) => self.validate_null(value, ctx),
            Schema::Array(schema) => self.validate_array(schema, value, ctx),
            Schema::Object(schema) => self.validate_object(schema, value, ctx),
            Schema::Any => true,
        }
    }

    fn validate_string(
        &self,
        schema: &StringSchema,
        value: &Value,
        ctx: &mut ValidatorContext,
    ) -> bool {
        let text = match value.as_str() {
            Some(text) => text,
            None => {
                let path = ctx.current_path();
                ctx.push_error(ValidationError::kind_mismatch(
                    path,
                    SchemaKind::String,
                    value.kind(),
                ));
                return false;
            }
        };

        let mut failed = false;
        let count = text.chars().count();
        let path = ctx.current_path();

        if let Some(max) = schema.max_len {
            if count > max {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    format!(
                        "String size should be at most {} chars, but got {}",
                        max, count
                    ),
                    SchemaKind::String,
                    ValueKind::String,
                ));
                failed = true;
            }
        }

        if let Some(min) = schema.min_len {
            if count < min {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    format!(
                        "String size should be at least {} chars, but got {}",
                        min, count
                    ),
                    SchemaKind::String,
                    ValueKind::String,
                ));
                failed = true;
            }
        }

        !failed
    }

    fn validate_number(
        &self,
        schema: &NumberSchema,
        value: &Value,
        ctx: &mut ValidatorContext,
    ) -> bool {
        let number = match value.as_number() {
            Some(number) => number,
            None => {
                let path = ctx.current_path();
                ctx.push_error(ValidationError::kind_mismatch(
                    path,
                    SchemaKind::Number,
                    value.kind(),
                ));
                return false;
            }
        };

        let mut failed = false;
        let path = ctx.current_path();

        if let Some(max) = schema.max {
            if number > max {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    "Number exceeds maximum value",
                    SchemaKind::Number,
                    ValueKind::Number,
                ));
                failed = true;
            }
        }

        if let Some(min) = schema.min {
            if number < min {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    "Number is below minimum value",
                    SchemaKind::Number,
                    ValueKind::Number,
                ));
                failed = true;
            }
        }

        !failed
    }

    fn validate_bool(&self, value: &Value, ctx: &mut ValidatorContext) -> bool {
        if value.kind() != ValueKind::Bool {
            let path = ctx.current_path();
            ctx.push_error(ValidationError::kind_mismatch(
                path,
                SchemaKind::Bool,
                value.kind(),
            ));
            return false;
        }
        true
    }

    fn validate_null(&self, value: &Value, ctx: &mut ValidatorContext) -> bool {
        if value.kind() != ValueKind::Null {
            let path = ctx.current_path();
            ctx.push_error(ValidationError::kind_mismatch(
                path,
                SchemaKind::Null,
                value.kind(),
            ));
            return false;
        }
        true
    }

    /// Array checks, in order: size bounds, item or tuple content,
    /// uniqueness scan. The order affects only error-list ordering.
    fn validate_array(
        &self,
        schema: &ArraySchema,
        value: &Value,
        ctx: &mut ValidatorContext,
    ) -> bool {
        let elements = match value.as_array() {
            Some(elements) => elements,
            None => {
                let path = ctx.current_path();
                ctx.push_error(ValidationError::kind_mismatch(
                    path,
                    SchemaKind::Array,
                    value.kind(),
                ));
                return false;
            }
        };

        let mut failed = false;
        let path = ctx.current_path();

        if let Some(max) = schema.max_items {
            if elements.len() > max {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    format!(
                        "Array must contain at most {} items, but got {}",
                        max,
                        elements.len()
                    ),
                    SchemaKind::Array,
                    ValueKind::Array,
                ));
                failed = true;
            }
        }

        if let Some(min) = schema.min_items {
            if elements.len() < min {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    format!(
                        "Array must contain at least {} items, but got {}",
                        min,
                        elements.len()
                    ),
                    SchemaKind::Array,
                    ValueKind::Array,
                ));
                failed = true;
            }
        }

        if let Some(item) = schema.item {
            for (i, element) in elements.iter().enumerate() {
                ctx.push_path(format!("[{}]", i));
                if !self.validate_with(item, element, ctx) {
                    failed = true;
                }
                ctx.pop_path();
            }
        }

        if !schema.tuple.is_empty() {
            // positions past either length are deliberately not validated
            for (i, (&child, element)) in schema.tuple.iter().zip(elements.iter()).enumerate() {
                ctx.push_path(format!("[{}]", i));
                if !self.validate_with(child, element, ctx) {
                    failed = true;
                }
                ctx.pop_path();
            }

            if schema.exact_tuple && elements.len() != schema.tuple.len() {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    format!(
                        "Array length {} does not match tuple length {}",
                        elements.len(),
                        schema.tuple.len()
                    ),
                    SchemaKind::Array,
                    ValueKind::Array,
                ));
                failed = true;
            }
        }

        if schema.unique && !self.scan_unique(elements, ctx) {
            failed = true;
        }

        !failed
    }

    /// Uniqueness scan with per-kind buckets: numbers compare by numeric
    /// equality, strings by exact text, bools by value, and at most one
    /// null is permitted. Arrays and objects are never compared. Each
    /// repeat is flagged once at its own index; first occurrences are
    /// never flagged.
    fn scan_unique(&self, elements: &[Value], ctx: &mut ValidatorContext) -> bool {
        let mut numbers: Vec<f64> = Vec::new();
        let mut strings: BTreeSet<&str> = BTreeSet::new();
        let mut bools: BTreeSet<bool> = BTreeSet::new();
        let mut null_seen = false;
        let mut unique = true;

        for (i, element) in elements.iter().enumerate() {
            let duplicate = match element {
                Value::Number(n) => {
                    if numbers.iter().any(|seen| seen == n) {
                        true
                    } else {
                        numbers.push(*n);
                        false
                    }
                }
                Value::String(s) => !strings.insert(s.as_str()),
                Value::Bool(b) => !bools.insert(*b),
                Value::Null => {
                    let repeat = null_seen;
                    null_seen = true;
                    repeat
                }
                Value::Array(_) | Value::Object(_) => false,
            };

            if duplicate {
                ctx.push_path(format!("[{}]", i));
                let path = ctx.current_path();
                ctx.pop_path();
                ctx.push_error(ValidationError::new(
                    path,
                    "Duplicate item found in array, Items must be unique",
                    SchemaKind::Array,
                    ValueKind::Array,
                ));
                unique = false;
            }
        }

        unique
    }

    /// Object checks, in order: size bounds, required-name presence,
    /// per-declared-property recursion, then unknown-key rejection when
    /// enabled. Size and required errors land at the object's own path.
    fn validate_object(
        &self,
        schema: &ObjectSchema,
        value: &Value,
        ctx: &mut ValidatorContext,
    ) -> bool {
        let members = match value.as_object() {
            Some(members) => members,
            None => {
                let path = ctx.current_path();
                ctx.push_error(ValidationError::kind_mismatch(
                    path,
                    SchemaKind::Object,
                    value.kind(),
                ));
                return false;
            }
        };

        let mut failed = false;
        let path = ctx.current_path();

        if let Some(max) = schema.max_properties {
            if members.len() > max {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    format!(
                        "Object must contain at most {} properties, but got {}",
                        max,
                        members.len()
                    ),
                    SchemaKind::Object,
                    ValueKind::Object,
                ));
                failed = true;
            }
        }

        if let Some(min) = schema.min_properties {
            if members.len() < min {
                ctx.push_error(ValidationError::new(
                    path.clone(),
                    format!(
                        "Object must contain at least {} properties, but got {}",
                        min,
                        members.len()
                    ),
                    SchemaKind::Object,
                    ValueKind::Object,
                ));
                failed = true;
            }
        }

        for name in &schema.required {
            if members.contains_key(name) {
                continue;
            }
            // required names are always declared, so the lookup succeeds
            let expected = match schema.properties.get(name) {
                Some(&child) => self.arena.get(child).kind(),
                None => SchemaKind::Object,
            };
            ctx.push_error(ValidationError::missing_required(
                path.clone(),
                name,
                expected,
            ));
            failed = true;
        }

        for (name, &child) in &schema.properties {
            let member = match members.get(name) {
                Some(member) => member,
                None => continue,
            };
            ctx.push_path(format!(".{}", name));
            if !self.validate_with(child, member, ctx) {
                failed = true;
            }
            ctx.pop_path();
        }

        if schema.deny_unknown {
            for name in members.keys() {
                if schema.properties.contains_key(name) {
                    continue;
                }
                ctx.push_path(format!(".{}", name));
                let unknown_path = ctx.current_path();
                ctx.pop_path();
                ctx.push_error(ValidationError::new(
                    unknown_path,
                    format!("Unknown property '{}'", name),
                    SchemaKind::Object,
                    ValueKind::Object,
                ));
                failed = true;
            }
        }

        !failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{Lexer, Parser};
    use crate::schema::types::{BoolSchema, NullSchema};

    fn parse(source: &str) -> Value {
        let mut parser = Parser::new(Lexer::new(source));
        parser.parse().unwrap();
        parser.release().unwrap()
    }

    #[test]
    fn test_unconstrained_kind_match_is_valid() {
        let mut arena = SchemaArena::new();
        let string = arena.insert(StringSchema::new());
        let number = arena.insert(NumberSchema::new());
        let array = arena.insert(ArraySchema::new());
        let object = arena.insert(ObjectSchema::new());
        let boolean = arena.bool();
        let null = arena.null();
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(string, &parse("\"hi\"")).valid);
        assert!(validator.validate(number, &parse("42")).valid);
        assert!(validator.validate(array, &parse("[1, 2]")).valid);
        assert!(validator.validate(object, &parse("{\"a\": 1}")).valid);
        assert!(validator.validate(boolean, &parse("true")).valid);
        assert!(validator.validate(null, &parse("null")).valid);

        let report = validator.validate(string, &parse("\"hi\""));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_kind_mismatch_records_one_error() {
        let mut arena = SchemaArena::new();
        let number = arena.insert(NumberSchema::new().min(5.0));
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(number, &parse("\"x\""));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "");
        assert_eq!(report.errors[0].message, "Expected Number, found String");
        assert_eq!(report.errors[0].expected, SchemaKind::Number);
        assert_eq!(report.errors[0].actual, ValueKind::String);
    }

    #[test]
    fn test_kind_mismatch_stops_composite_recursion() {
        let mut arena = SchemaArena::new();
        let item = arena.insert(NumberSchema::new());
        let array = arena.insert(ArraySchema::new().item(item).min(1));
        let validator = SchemaValidator::new(&arena);

        // wrong kind entirely: only the kind error, no size or item errors
        let report = validator.validate(array, &parse("{\"a\": 1}"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "Expected Array, found Object");
    }

    #[test]
    fn test_string_bounds() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(StringSchema::new().min(5).max(50));
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("\"https\"")).valid);

        let report = validator.validate(schema, &parse("\"abc\""));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "String size should be at least 5 chars, but got 3"
        );
    }

    #[test]
    fn test_string_contradictory_bounds_record_two_errors() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(StringSchema::new().min(5).max(2));
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(schema, &parse("\"abc\""));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        // max is checked before min
        assert_eq!(
            report.errors[0].message,
            "String size should be at most 2 chars, but got 3"
        );
        assert_eq!(
            report.errors[1].message,
            "String size should be at least 5 chars, but got 3"
        );
    }

    #[test]
    fn test_number_bounds() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(NumberSchema::new().min(1024.0).max(65535.0));
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("8080")).valid);

        let report = validator.validate(schema, &parse("80"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "Number is below minimum value");

        let report = validator.validate(schema, &parse("70000"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "Number exceeds maximum value");
    }

    #[test]
    fn test_number_bounds_are_signed() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(NumberSchema::new().min(-10.0));
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("-5")).valid);
        assert!(!validator.validate(schema, &parse("-20")).valid);
    }

    #[test]
    fn test_number_contradictory_bounds_record_two_errors() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(NumberSchema::new().min(10.0).max(5.0));
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(schema, &parse("7"));
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].message, "Number exceeds maximum value");
        assert_eq!(report.errors[1].message, "Number is below minimum value");
    }

    #[test]
    fn test_bool_and_null_check_kind_only() {
        let mut arena = SchemaArena::new();
        let boolean = arena.insert(BoolSchema::new());
        let null = arena.insert(NullSchema::new());
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(boolean, &parse("false")).valid);
        assert!(validator.validate(null, &parse("null")).valid);

        let report = validator.validate(boolean, &parse("null"));
        assert_eq!(report.errors[0].message, "Expected Bool, found Null");

        let report = validator.validate(null, &parse("0"));
        assert_eq!(report.errors[0].message, "Expected Null, found Number");
    }

    #[test]
    fn test_any_matches_every_kind() {
        let mut arena = SchemaArena::new();
        let any = arena.any();
        let validator = SchemaValidator::new(&arena);

        for source in ["null", "true", "17", "\"x\"", "[1]", "{\"a\": 1}"] {
            assert!(validator.validate(any, &parse(source)).valid);
        }
    }

    #[test]
    fn test_array_size_bounds() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(ArraySchema::new().min(1).max(2));
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("[1]")).valid);

        let report = validator.validate(schema, &parse("[]"));
        assert_eq!(
            report.errors[0].message,
            "Array must contain at least 1 items, but got 0"
        );

        let report = validator.validate(schema, &parse("[1, 2, 3]"));
        assert_eq!(
            report.errors[0].message,
            "Array must contain at most 2 items, but got 3"
        );
    }

    #[test]
    fn test_array_item_mode_reports_element_paths() {
        let mut arena = SchemaArena::new();
        let item = arena.insert(NumberSchema::new().min(5.0).max(10.0));
        let schema = arena.insert(ArraySchema::new().item(item).unique(true));
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(schema, &parse("[5, 7, 7, \"x\"]"));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);

        // content errors come before the uniqueness scan
        assert_eq!(report.errors[0].path, "[3]");
        assert_eq!(report.errors[0].message, "Expected Number, found String");
        assert_eq!(report.errors[1].path, "[2]");
        assert_eq!(
            report.errors[1].message,
            "Duplicate item found in array, Items must be unique"
        );
    }

    #[test]
    fn test_array_tuple_mode_is_positional() {
        let mut arena = SchemaArena::new();
        let first = arena.insert(StringSchema::new());
        let second = arena.insert(NumberSchema::new());
        let schema = arena.insert(ArraySchema::new().tuple(vec![first, second]));
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("[\"a\", 1]")).valid);

        let report = validator.validate(schema, &parse("[1, \"a\"]"));
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].path, "[0]");
        assert_eq!(report.errors[0].message, "Expected String, found Number");
        assert_eq!(report.errors[1].path, "[1]");
        assert_eq!(report.errors[1].message, "Expected Number, found String");
    }

    #[test]
    fn test_array_tuple_extra_positions_are_lenient() {
        let mut arena = SchemaArena::new();
        let first = arena.insert(StringSchema::new());
        let second = arena.insert(NumberSchema::new());
        let third = arena.bool();
        let fourth = arena.null();
        let schema = arena.insert(ArraySchema::new().tuple(vec![first, second, third, fourth]));
        let validator = SchemaValidator::new(&arena);

        // the trailing fifth element is not validated against anything
        let report = validator.validate(schema, &parse("[\"a\", 1, true, null, \"extra\"]"));
        assert!(report.valid);
        assert!(report.errors.is_empty());

        // unused trailing tuple schemas are fine too
        assert!(validator.validate(schema, &parse("[\"a\", 1]")).valid);
    }

    #[test]
    fn test_array_exact_tuple_rejects_length_mismatch() {
        let mut arena = SchemaArena::new();
        let first = arena.insert(StringSchema::new());
        let second = arena.insert(NumberSchema::new());
        let schema = arena.insert(
            ArraySchema::new()
                .tuple(vec![first, second])
                .exact_tuple(true),
        );
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("[\"a\", 1]")).valid);

        let report = validator.validate(schema, &parse("[\"a\", 1, true]"));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "");
        assert_eq!(
            report.errors[0].message,
            "Array length 3 does not match tuple length 2"
        );
    }

    #[test]
    fn test_unique_buckets_are_per_kind() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(ArraySchema::new().unique(true));
        let validator = SchemaValidator::new(&arena);

        // a number and its text twin are not duplicates
        assert!(validator.validate(schema, &parse("[1, \"1\"]")).valid);

        // repeats within one kind are flagged at their own index
        let report = validator.validate(schema, &parse("[true, false, true]"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "[2]");

        // at most one null across the whole array
        let report = validator.validate(schema, &parse("[null, 1, null]"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "[2]");
    }

    #[test]
    fn test_unique_never_compares_composites() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(ArraySchema::new().unique(true));
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("[[1], [1]]")).valid);
        assert!(
            validator
                .validate(schema, &parse("[{\"a\": 1}, {\"a\": 1}]"))
                .valid
        );
    }

    #[test]
    fn test_unique_flags_every_repeat() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(ArraySchema::new().unique(true));
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(schema, &parse("[7, 7, 7]"));
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].path, "[1]");
        assert_eq!(report.errors[1].path, "[2]");
    }

    #[test]
    fn test_object_missing_required_at_own_path() {
        let mut arena = SchemaArena::new();
        let host = arena.insert(StringSchema::new().min(1));
        let port = arena.insert(NumberSchema::new().min(1024.0).max(65535.0));
        let schema = arena.insert(
            ObjectSchema::new()
                .property("host", host)
                .property("port", port)
                .required("host")
                .required("port"),
        );
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(schema, &parse("{}"));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        for error in &report.errors {
            assert_eq!(error.path, "");
            assert_eq!(error.actual, ValueKind::Null);
        }
        assert_eq!(report.errors[0].message, "Missing required property 'host'");
        assert_eq!(report.errors[0].expected, SchemaKind::String);
        assert_eq!(report.errors[1].message, "Missing required property 'port'");
        assert_eq!(report.errors[1].expected, SchemaKind::Number);
    }

    #[test]
    fn test_object_recursion_builds_nested_paths() {
        let mut arena = SchemaArena::new();
        let protocol = arena.insert(StringSchema::new());
        let protocols = arena.insert(ArraySchema::new().item(protocol).unique(true).min(1));
        let webserver = arena.insert(ObjectSchema::new().property("supported_protocols", protocols));
        let root = arena.insert(ObjectSchema::new().property("webserver", webserver));
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(
            root,
            &parse("{\"webserver\": {\"supported_protocols\": [\"http\", \"https\", 42]}}"),
        );
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, ".webserver.supported_protocols[2]");
    }

    #[test]
    fn test_object_size_bounds() {
        let mut arena = SchemaArena::new();
        let schema = arena.insert(ObjectSchema::new().min(1).max(2));
        let validator = SchemaValidator::new(&arena);

        assert!(validator.validate(schema, &parse("{\"a\": 1}")).valid);

        let report = validator.validate(schema, &parse("{}"));
        assert_eq!(
            report.errors[0].message,
            "Object must contain at least 1 properties, but got 0"
        );

        let report = validator.validate(schema, &parse("{\"a\": 1, \"b\": 2, \"c\": 3}"));
        assert_eq!(
            report.errors[0].message,
            "Object must contain at most 2 properties, but got 3"
        );
    }

    #[test]
    fn test_object_unknown_keys_ignored_by_default() {
        let mut arena = SchemaArena::new();
        let host = arena.insert(StringSchema::new());
        let schema = arena.insert(ObjectSchema::new().property("host", host));
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(schema, &parse("{\"host\": \"a\", \"extra\": 1}"));
        assert!(report.valid);
    }

    #[test]
    fn test_object_deny_unknown_flags_each_key() {
        let mut arena = SchemaArena::new();
        let host = arena.insert(StringSchema::new());
        let schema = arena.insert(
            ObjectSchema::new()
                .property("host", host)
                .deny_unknown(true),
        );
        let validator = SchemaValidator::new(&arena);

        let report = validator.validate(schema, &parse("{\"host\": \"a\", \"extra\": 1}"));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, ".extra");
        assert_eq!(report.errors[0].message, "Unknown property 'extra'");
    }

    #[test]
    fn test_descendant_failure_propagates_to_root() {
        let mut arena = SchemaArena::new();
        let port = arena.insert(NumberSchema::new().min(1024.0));
        let webserver = arena.insert(ObjectSchema::new().property("port", port));
        let root = arena.insert(ObjectSchema::new().property("webserver", webserver));
        let validator = SchemaValidator::new(&arena);

        let mut ctx = ValidatorContext::new();
        let ok = validator.validate_with(root, &parse("{\"webserver\": {\"port\": 80}}"), &mut ctx);
        assert!(!ok);
        assert_eq!(ctx.errors().len(), 1);
        assert_eq!(ctx.errors()[0].path, ".webserver.port");
    }

    #[test]
    fn test_error_cap_does_not_change_outcome() {
        let mut arena = SchemaArena::new();
        let item = arena.insert(NumberSchema::new());
        let schema = arena.insert(ArraySchema::new().item(item));
        let validator = SchemaValidator::new(&arena);

        let mut ctx = ValidatorContext::with_max_errors(1);
        let ok = validator.validate_with(schema, &parse("[\"a\", \"b\", \"c\"]"), &mut ctx);
        assert!(!ok);
        assert_eq!(ctx.errors().len(), 1);
        assert_eq!(ctx.errors()[0].path, "[0]");
    }

    #[test]
    fn test_path_stack_recovers_after_child_failure() {
        let mut arena = SchemaArena::new();
        let bad = arena.insert(NumberSchema::new());
        let good = arena.insert(StringSchema::new());
        let schema = arena.insert(
            ObjectSchema::new()
                .property("first", bad)
                .property("second", good),
        );
        let validator = SchemaValidator::new(&arena);

        // the failing first child must not leak its path segment into
        // the second child's error
        let report = validator.validate(schema, &parse("{\"first\": \"x\", \"second\": 1}"));
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].path, ".first");
        assert_eq!(report.errors[1].path, ".second");
    }
}
