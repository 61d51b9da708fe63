use std::fmt;

/// Error raised when a projection expression is assembled in an invalid order.
///
/// This is the only failure mode in the crate; it surfaces synchronously to
/// the caller and there is no recovery path.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ProjectionExpressionError {
    /// An index segment was appended before any attribute segment.
    #[error("projection expression must start with an attribute, not an index")]
    StartsWithIndex,
}

/// Builder for a DynamoDB projection expression.
///
/// Attribute names are joined with dots and list accesses are rendered as
/// bracketed indexes, producing paths such as `a[0].b`. The first segment must
/// be an attribute name; [`ProjectionExpression::at_index`] rejects an empty
/// expression.
///
/// ```rust
/// use dynamodb_values::projection;
///
/// # fn main() -> Result<(), projection::ProjectionExpressionError> {
/// let expression = projection::ProjectionExpression::new()
///     .with_attribute("orders")
///     .at_index(0)?
///     .with_attribute("status");
/// assert_eq!(expression.build(), "orders[0].status");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectionExpression {
    segments: Vec<String>,
}

impl ProjectionExpression {
    /// Creates an empty expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute name, prefixed with a dot unless the expression
    /// is still empty.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.segments.is_empty() {
            self.segments.push(name);
        } else {
            self.segments.push(format!(".{name}"));
        }
        self
    }

    /// Appends a bracketed list index.
    ///
    /// Fails with [`ProjectionExpressionError::StartsWithIndex`] when the
    /// expression is still empty, since a path cannot begin with an index.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_values.at_index", err)
    )]
    pub fn at_index(mut self, index: usize) -> Result<Self, ProjectionExpressionError> {
        if self.segments.is_empty() {
            return Err(ProjectionExpressionError::StartsWithIndex);
        }
        self.segments.push(format!("[{index}]"));
        Ok(self)
    }

    /// Concatenates the appended segments into the final expression string.
    ///
    /// Separators were embedded at append time, so this is a pure read and
    /// may be called any number of times.
    #[must_use]
    pub fn build(&self) -> String {
        self.segments.concat()
    }
}

impl fmt::Display for ProjectionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::single_attribute(
        ProjectionExpression::new().with_attribute("a"),
        "a"
    )]
    #[case::dotted_attributes(
        ProjectionExpression::new()
            .with_attribute("a")
            .with_attribute("b")
            .with_attribute("c"),
        "a.b.c"
    )]
    #[case::empty(
        ProjectionExpression::new(),
        ""
    )]
    fn test_build(#[case] expression: ProjectionExpression, #[case] expected: &str) {
        assert_eq!(expression.build(), expected);
    }

    #[test]
    fn test_index_after_attribute() {
        let expression = ProjectionExpression::new()
            .with_attribute("a")
            .at_index(0)
            .unwrap()
            .with_attribute("b");
        assert_eq!(expression.build(), "a[0].b");
    }

    #[test]
    fn test_chained_indexes() {
        let expression = ProjectionExpression::new()
            .with_attribute("matrix")
            .at_index(2)
            .unwrap()
            .at_index(10)
            .unwrap();
        assert_eq!(expression.build(), "matrix[2][10]");
    }

    #[test]
    fn test_index_on_empty_expression_fails() {
        let result = ProjectionExpression::new().at_index(0);
        assert_eq!(result, Err(ProjectionExpressionError::StartsWithIndex));
    }

    #[test]
    fn test_build_is_a_pure_read() {
        let expression = ProjectionExpression::new().with_attribute("a");
        assert_eq!(expression.build(), expression.build());
        let expression = expression.with_attribute("b");
        assert_eq!(expression.build(), "a.b");
    }

    #[test]
    fn test_display_matches_build() {
        let expression = ProjectionExpression::new()
            .with_attribute("a")
            .at_index(1)
            .unwrap();
        assert_eq!(expression.to_string(), expression.build());
    }
}
