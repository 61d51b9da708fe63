#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Values
//!
//! A type-safe, ergonomic builder for DynamoDB's `AttributeValue` wire
//! format, projection expressions, and request option parameters.
//!
//! ## Overview
//!
//! This library targets declarative request documents (task definitions and
//! other infrastructure descriptions that embed DynamoDB parameters as JSON)
//! rather than live API calls:
//! - Attribute values are a closed tagged union, so a mismatched type tag and
//!   payload cannot be constructed
//! - Nested maps and lists lower recursively into the exact JSON shape the
//!   DynamoDB API expects, preserving key order
//! - Projection expressions are assembled through a fluent builder instead of
//!   string concatenation at call sites
//! - Request options serialize to their fixed uppercase API literals
//!
//! ## Quick Example
//!
//! ```rust
//! use dynamodb_values::{projection, value};
//! use indexmap::IndexMap;
//!
//! # fn main() -> Result<(), projection::ProjectionExpressionError> {
//! let item = value::AttributeValue::from_map(IndexMap::from([
//!     ("name".to_string(), value::AttributeValue::from_string("Joe")),
//!     ("age".to_string(), value::AttributeValue::from_number(35)),
//! ]));
//! assert_eq!(
//!     item.to_object(),
//!     serde_json::json!({"M": {"name": {"S": "Joe"}, "age": {"N": "35"}}}),
//! );
//!
//! let expression = projection::ProjectionExpression::new()
//!     .with_attribute("orders")
//!     .at_index(0)?
//!     .with_attribute("status");
//! assert_eq!(expression.build(), "orders[0].status");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@value`] - Typed attribute values and the wire-format codec
//! - [`mod@projection`] - Projection expression builder
//! - [`mod@options`] - Request option parameters (consumed capacity, item
//!   collection metrics, return values)

/// Request option parameters with fixed DynamoDB wire strings.
pub mod options;

/// Projection expression builder for selecting item attributes.
pub mod projection;

/// Conversions into the official AWS SDK types (requires the `aws-sdk`
/// feature).
#[cfg(feature = "aws-sdk")]
pub mod sdk;

/// Typed attribute values and the wire-format codec.
pub mod value;
