use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// The wire tags accepted when deserializing an attribute value.
const WIRE_TAGS: &[&str] = &["S", "N", "B", "SS", "NS", "BS", "M", "L", "NULL", "BOOL"];

/// Numeric types accepted by [`AttributeValue::from_number`] and
/// [`AttributeValue::from_number_set`].
///
/// DynamoDB transports numbers as decimal strings to maximize compatibility
/// across languages and libraries, so the only requirement on a numeric type
/// is that it renders itself as one.
pub trait Number {
    /// The decimal string sent on the wire.
    fn to_decimal(&self) -> String;
}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                fn to_decimal(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

/// A single DynamoDB attribute value.
///
/// Each value is a tagged union where exactly one variant is present; the
/// variant determines the wire tag (`S`, `N`, `M`, ...) and the payload shape,
/// so a mismatched tag/payload pair cannot be constructed. Values are built
/// through the `from_*` factories and lowered to the DynamoDB JSON wire form
/// with [`AttributeValue::to_object`].
///
/// ```rust
/// use dynamodb_values::value::AttributeValue;
/// use indexmap::IndexMap;
///
/// let item = AttributeValue::from_map(IndexMap::from([
///     ("name".to_string(), AttributeValue::from_string("Joe")),
///     ("age".to_string(), AttributeValue::from_number(35)),
/// ]));
/// assert_eq!(
///     item.to_object(),
///     serde_json::json!({"M": {"name": {"S": "Joe"}, "age": {"N": "35"}}}),
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeValue {
    /// String value, either a literal or a JSONPath expression.
    S(String),
    /// Number value, string-encoded for arbitrary precision.
    N(String),
    /// Binary value, carried as caller-provided base64 text.
    B(String),
    /// String set.
    Ss(Vec<String>),
    /// Number set, string-encoded.
    Ns(Vec<String>),
    /// Binary set, carried as base64 text.
    Bs(Vec<String>),
    /// Map of attribute name to nested value; key order is preserved.
    M(IndexMap<String, AttributeValue>),
    /// Ordered list of nested values.
    L(Vec<AttributeValue>),
    /// Null marker.
    Null(bool),
    /// Boolean value.
    Bool(bool),
}

impl AttributeValue {
    /// Builds an attribute of type String. For example: `"S": "Hello"`.
    ///
    /// Strings may be literal values or JSONPath expressions.
    pub fn from_string(value: impl Into<String>) -> Self {
        Self::S(value.into())
    }

    /// Builds an attribute of type Number from a numeric literal.
    ///
    /// The number is converted to its decimal string form, which is how
    /// DynamoDB transports numbers.
    pub fn from_number<N: Number>(value: N) -> Self {
        Self::N(value.to_decimal())
    }

    /// Builds an attribute of type Number from an already string-encoded
    /// number or a JSONPath expression. The string is passed through
    /// uninterpreted.
    pub fn from_number_string(value: impl Into<String>) -> Self {
        Self::N(value.into())
    }

    /// Builds an attribute of type Binary from base64 text.
    pub fn from_binary(value: impl Into<String>) -> Self {
        Self::B(value.into())
    }

    /// Builds an attribute of type String Set. For example:
    /// `"SS": ["Giraffe", "Hippo", "Zebra"]`.
    pub fn from_string_set(values: Vec<String>) -> Self {
        Self::Ss(values)
    }

    /// Builds an attribute of type Number Set from numeric literals.
    ///
    /// Every element is converted to its decimal string form, matching
    /// [`AttributeValue::from_number_set_strings`].
    pub fn from_number_set<N: Number>(values: Vec<N>) -> Self {
        Self::Ns(values.iter().map(Number::to_decimal).collect())
    }

    /// Builds an attribute of type Number Set from string-encoded numbers or
    /// JSONPath expressions.
    pub fn from_number_set_strings(values: Vec<String>) -> Self {
        Self::Ns(values)
    }

    /// Builds an attribute of type Binary Set from base64 text elements.
    pub fn from_binary_set(values: Vec<String>) -> Self {
        Self::Bs(values)
    }

    /// Builds an attribute of type Map. Nested values are lowered recursively
    /// when the map is serialized, and key order is preserved.
    pub fn from_map(values: IndexMap<String, Self>) -> Self {
        Self::M(values)
    }

    /// Builds an attribute of type List. For example:
    /// `"L": [{"S": "Cookies"}, {"N": "3.14"}]`.
    pub fn from_list(values: Vec<Self>) -> Self {
        Self::L(values)
    }

    /// Builds an attribute of type Null. For example: `"NULL": true`.
    pub fn from_null(is_null: bool) -> Self {
        Self::Null(is_null)
    }

    /// Builds an attribute of type Boolean. For example: `"BOOL": true`.
    pub fn from_boolean(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Lowers this value into the DynamoDB JSON wire form: an object with a
    /// single wire-tag key, with `M` and `L` payloads lowered recursively.
    ///
    /// The operation is pure; calling it repeatedly yields structurally
    /// identical output.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_values.to_object", skip(self))
    )]
    #[must_use]
    pub fn to_object(&self) -> Value {
        let (tag, payload) = match self {
            Self::S(value) => ("S", Value::from(value.clone())),
            Self::N(value) => ("N", Value::from(value.clone())),
            Self::B(value) => ("B", Value::from(value.clone())),
            Self::Ss(values) => ("SS", Value::from(values.clone())),
            Self::Ns(values) => ("NS", Value::from(values.clone())),
            Self::Bs(values) => ("BS", Value::from(values.clone())),
            Self::M(values) => {
                let lowered = values
                    .iter()
                    .map(|(name, nested)| (name.clone(), nested.to_object()))
                    .collect::<serde_json::Map<String, Value>>();
                ("M", Value::Object(lowered))
            }
            Self::L(values) => {
                let lowered = values.iter().map(Self::to_object).collect();
                ("L", Value::Array(lowered))
            }
            Self::Null(is_null) => ("NULL", Value::Bool(*is_null)),
            Self::Bool(value) => ("BOOL", Value::Bool(*value)),
        };
        let mut object = serde_json::Map::with_capacity(1);
        object.insert(tag.to_string(), payload);
        Value::Object(object)
    }

    /// Returns the wire tag identifying this value's type (`"S"`, `"N"`,
    /// `"BOOL"`, ...).
    #[must_use]
    pub fn wire_tag(&self) -> &'static str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::B(_) => "B",
            Self::Ss(_) => "SS",
            Self::Ns(_) => "NS",
            Self::Bs(_) => "BS",
            Self::M(_) => "M",
            Self::L(_) => "L",
            Self::Null(_) => "NULL",
            Self::Bool(_) => "BOOL",
        }
    }

    /// Returns `true` if this is a null marker set to `true`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(true))
    }

    /// Returns the string payload if this is an `S` value.
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the string-encoded number if this is an `N` value.
    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean payload if this is a `BOOL` value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the map payload if this is an `M` value.
    #[must_use]
    pub fn as_m(&self) -> Option<&IndexMap<String, AttributeValue>> {
        match self {
            Self::M(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the list payload if this is an `L` value.
    #[must_use]
    pub fn as_l(&self) -> Option<&[AttributeValue]> {
        match self {
            Self::L(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_object())
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::S(value) => map.serialize_entry("S", value)?,
            Self::N(value) => map.serialize_entry("N", value)?,
            Self::B(value) => map.serialize_entry("B", value)?,
            Self::Ss(values) => map.serialize_entry("SS", values)?,
            Self::Ns(values) => map.serialize_entry("NS", values)?,
            Self::Bs(values) => map.serialize_entry("BS", values)?,
            Self::M(values) => map.serialize_entry("M", values)?,
            Self::L(values) => map.serialize_entry("L", values)?,
            Self::Null(is_null) => map.serialize_entry("NULL", is_null)?,
            Self::Bool(value) => map.serialize_entry("BOOL", value)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeValueVisitor)
    }
}

struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with exactly one DynamoDB wire-tag key")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let Some(tag) = map.next_key::<String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        let value = match tag.as_str() {
            "S" => AttributeValue::S(map.next_value()?),
            "N" => AttributeValue::N(map.next_value()?),
            "B" => AttributeValue::B(map.next_value()?),
            "SS" => AttributeValue::Ss(map.next_value()?),
            "NS" => AttributeValue::Ns(map.next_value()?),
            "BS" => AttributeValue::Bs(map.next_value()?),
            "M" => AttributeValue::M(map.next_value()?),
            "L" => AttributeValue::L(map.next_value()?),
            "NULL" => AttributeValue::Null(map.next_value()?),
            "BOOL" => AttributeValue::Bool(map.next_value()?),
            other => return Err(de::Error::unknown_field(other, WIRE_TAGS)),
        };
        if map.next_key::<String>()?.is_some() {
            return Err(de::Error::custom(
                "attribute value must have exactly one wire-tag key",
            ));
        }
        Ok(value)
    }
}
