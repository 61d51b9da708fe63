use serde::{Deserialize, Serialize};
use std::fmt;

/// Level of detail about provisioned throughput consumption returned by an
/// operation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ConsumedCapacity {
    /// Aggregate consumed capacity for the operation, together with the
    /// consumed capacity of each table and secondary index that was accessed.
    #[serde(rename = "INDEXES")]
    Indexes,
    /// Only the aggregate consumed capacity for the operation.
    #[serde(rename = "TOTAL")]
    Total,
    /// No consumed capacity details.
    #[serde(rename = "NONE")]
    None,
}

impl ConsumedCapacity {
    /// Returns the DynamoDB wire-format string for this option.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indexes => "INDEXES",
            Self::Total => "TOTAL",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for ConsumedCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether item collection metrics are returned by a write operation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ItemCollectionMetrics {
    /// Include statistics about the item collections modified during the
    /// operation.
    #[serde(rename = "SIZE")]
    Size,
    /// No statistics.
    #[serde(rename = "NONE")]
    None,
}

impl ItemCollectionMetrics {
    /// Returns the DynamoDB wire-format string for this option.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Size => "SIZE",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for ItemCollectionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which item attributes a write operation returns, as they appeared before
/// or after the change.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ReturnValues {
    /// Nothing is returned.
    #[serde(rename = "NONE")]
    None,
    /// All attributes of the item as it was before the operation.
    #[serde(rename = "ALL_OLD")]
    AllOld,
    /// Only the updated attributes, as they were before the operation.
    #[serde(rename = "UPDATED_OLD")]
    UpdatedOld,
    /// All attributes of the item as it is after the operation.
    #[serde(rename = "ALL_NEW")]
    AllNew,
    /// Only the updated attributes, as they are after the operation.
    #[serde(rename = "UPDATED_NEW")]
    UpdatedNew,
}

impl ReturnValues {
    /// Returns the DynamoDB wire-format string for this option.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::AllOld => "ALL_OLD",
            Self::UpdatedOld => "UPDATED_OLD",
            Self::AllNew => "ALL_NEW",
            Self::UpdatedNew => "UPDATED_NEW",
        }
    }
}

impl fmt::Display for ReturnValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
