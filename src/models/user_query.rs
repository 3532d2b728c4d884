//! The parameterized user lookup rendered by `GET /users`.

use std::fmt;

/// A user lookup as it would be executed against a real database: fixed
/// statement text plus a bound numeric identifier. The identifier is
/// never spliced into the statement itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundUserQuery {
    /// The validated identifier, bound to placeholder `?1`.
    pub id: i64,
}

impl BoundUserQuery {
    /// Statement text with its placeholder. Identical for every id.
    pub const STATEMENT: &'static str = "SELECT * FROM users WHERE id = ?1";

    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl fmt::Display for BoundUserQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- ?1 = {}", Self::STATEMENT, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_text_is_independent_of_id() {
        let a = BoundUserQuery::new(1).to_string();
        let b = BoundUserQuery::new(42).to_string();
        assert!(a.starts_with(BoundUserQuery::STATEMENT));
        assert!(b.starts_with(BoundUserQuery::STATEMENT));
    }

    #[test]
    fn renders_placeholder_and_binding() {
        let rendered = BoundUserQuery::new(7).to_string();
        assert_eq!(rendered, "SELECT * FROM users WHERE id = ?1 -- ?1 = 7");
    }
}
