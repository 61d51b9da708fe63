use crate::{options, value};

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types;
use base64::Engine;
use std::collections;

/// Error raised when a wire value cannot be represented as an SDK value.
#[derive(Debug, thiserror::Error)]
pub enum SdkConversionError {
    /// A binary payload was not valid standard base64.
    ///
    /// JSONPath placeholders in binary slots fall into this case: they are
    /// only resolved by the orchestration service and carry no bytes to
    /// decode.
    #[error("binary payload is not valid base64: {text}")]
    InvalidBase64 {
        /// The payload that failed to decode.
        text: String,
    },
}

fn decode_binary(text: &str) -> Result<Blob, SdkConversionError> {
    base64::engine::general_purpose::STANDARD
        .decode(text)
        .map(Blob::new)
        .map_err(|_| SdkConversionError::InvalidBase64 {
            text: text.to_string(),
        })
}

impl TryFrom<value::AttributeValue> for types::AttributeValue {
    type Error = SdkConversionError;

    fn try_from(attribute_value: value::AttributeValue) -> Result<Self, Self::Error> {
        let converted = match attribute_value {
            value::AttributeValue::S(text) => Self::S(text),
            value::AttributeValue::N(number) => Self::N(number),
            value::AttributeValue::B(text) => Self::B(decode_binary(&text)?),
            value::AttributeValue::Ss(values) => Self::Ss(values),
            value::AttributeValue::Ns(values) => Self::Ns(values),
            value::AttributeValue::Bs(values) => {
                let decoded = values
                    .iter()
                    .map(|text| decode_binary(text))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::Bs(decoded)
            }
            value::AttributeValue::M(values) => {
                let converted = values
                    .into_iter()
                    .map(|(name, nested)| Ok((name, nested.try_into()?)))
                    .collect::<Result<collections::HashMap<_, _>, SdkConversionError>>()?;
                Self::M(converted)
            }
            value::AttributeValue::L(values) => {
                let converted = values
                    .into_iter()
                    .map(TryInto::try_into)
                    .collect::<Result<Vec<_>, _>>()?;
                Self::L(converted)
            }
            value::AttributeValue::Null(is_null) => Self::Null(is_null),
            value::AttributeValue::Bool(boolean) => Self::Bool(boolean),
        };
        Ok(converted)
    }
}

impl From<options::ConsumedCapacity> for types::ReturnConsumedCapacity {
    fn from(option: options::ConsumedCapacity) -> Self {
        match option {
            options::ConsumedCapacity::Indexes => Self::Indexes,
            options::ConsumedCapacity::Total => Self::Total,
            options::ConsumedCapacity::None => Self::None,
        }
    }
}

impl From<options::ItemCollectionMetrics> for types::ReturnItemCollectionMetrics {
    fn from(option: options::ItemCollectionMetrics) -> Self {
        match option {
            options::ItemCollectionMetrics::Size => Self::Size,
            options::ItemCollectionMetrics::None => Self::None,
        }
    }
}

impl From<options::ReturnValues> for types::ReturnValue {
    fn from(option: options::ReturnValues) -> Self {
        match option {
            options::ReturnValues::None => Self::None,
            options::ReturnValues::AllOld => Self::AllOld,
            options::ReturnValues::UpdatedOld => Self::UpdatedOld,
            options::ReturnValues::AllNew => Self::AllNew,
            options::ReturnValues::UpdatedNew => Self::UpdatedNew,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indexmap::IndexMap;
    use rstest::rstest;

    #[test]
    fn test_converts_nested_value_tree() {
        let item = value::AttributeValue::from_map(IndexMap::from([
            (
                "name".to_string(),
                value::AttributeValue::from_string("Joe"),
            ),
            (
                "payload".to_string(),
                value::AttributeValue::from_binary("dGVzdA=="),
            ),
            (
                "scores".to_string(),
                value::AttributeValue::from_list(vec![
                    value::AttributeValue::from_number(1),
                    value::AttributeValue::from_boolean(false),
                ]),
            ),
        ]));
        let converted: types::AttributeValue = item.try_into().unwrap();
        let entries = converted.as_m().unwrap();
        assert_eq!(
            entries["name"],
            types::AttributeValue::S("Joe".to_string())
        );
        assert_eq!(
            entries["payload"],
            types::AttributeValue::B(Blob::new(b"test".to_vec()))
        );
        assert_eq!(
            entries["scores"],
            types::AttributeValue::L(vec![
                types::AttributeValue::N("1".to_string()),
                types::AttributeValue::Bool(false),
            ])
        );
    }

    #[rstest]
    #[case::path_placeholder(value::AttributeValue::from_binary("$.payload"))]
    #[case::set_element(
        value::AttributeValue::from_binary_set(
            vec![
                "U3Vubnk=".to_string(),
                "not base64!".to_string(),
            ]
        )
    )]
    fn test_rejects_undecodable_binary(#[case] input: value::AttributeValue) {
        let result: Result<types::AttributeValue, _> = input.try_into();
        assert!(matches!(
            result,
            Err(SdkConversionError::InvalidBase64 { .. })
        ));
    }

    #[rstest]
    #[case::indexes(
        options::ConsumedCapacity::Indexes,
        types::ReturnConsumedCapacity::Indexes
    )]
    #[case::total(options::ConsumedCapacity::Total, types::ReturnConsumedCapacity::Total)]
    #[case::none(options::ConsumedCapacity::None, types::ReturnConsumedCapacity::None)]
    fn test_consumed_capacity_conversion(
        #[case] option: options::ConsumedCapacity,
        #[case] expected: types::ReturnConsumedCapacity,
    ) {
        assert_eq!(types::ReturnConsumedCapacity::from(option), expected);
    }

    #[rstest]
    #[case::all_old(options::ReturnValues::AllOld, types::ReturnValue::AllOld)]
    #[case::updated_new(options::ReturnValues::UpdatedNew, types::ReturnValue::UpdatedNew)]
    fn test_return_values_conversion(
        #[case] option: options::ReturnValues,
        #[case] expected: types::ReturnValue,
    ) {
        assert_eq!(types::ReturnValue::from(option), expected);
    }

    #[test]
    fn test_item_collection_metrics_conversion() {
        assert_eq!(
            types::ReturnItemCollectionMetrics::from(options::ItemCollectionMetrics::Size),
            types::ReturnItemCollectionMetrics::Size
        );
    }
}
