//! The seam between the API and whatever supplies statements.

use async_trait::async_trait;
use incomelens_core::statement::{Dataset, Record};

use super::error::MarketError;

/// Supplies income statements and company profiles.
#[async_trait]
pub trait StatementSource: Send + Sync {
    /// Fetches all income statements for `symbol`, newest first as the
    /// provider returns them.
    async fn income_statements(&self, symbol: &str) -> Result<Dataset, MarketError>;

    /// Looks up the profile of `symbol`. `Ok(None)` means the provider does
    /// not know the company.
    async fn company_profile(&self, symbol: &str) -> Result<Option<Record>, MarketError>;
}

/// Trims `symbol` and checks it looks like a ticker (letters, digits, `.`,
/// `-`, `^`).
pub fn validate_symbol(symbol: &str) -> Result<&str, MarketError> {
    let trimmed = symbol.trim();
    let valid = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'));

    if valid {
        Ok(trimmed)
    } else {
        Err(MarketError::InvalidSymbol(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_symbol_trims() {
        assert_eq!(validate_symbol(" AAPL ").unwrap(), "AAPL");
        assert_eq!(validate_symbol("BRK.B").unwrap(), "BRK.B");
        assert_eq!(validate_symbol("^GSPC").unwrap(), "^GSPC");
    }

    #[test]
    fn test_validate_symbol_rejects_paths_and_blanks() {
        assert!(validate_symbol("").is_err());
        assert!(validate_symbol("   ").is_err());
        assert!(validate_symbol("AAPL/../profile").is_err());
        assert!(validate_symbol("AAPL?apikey=x").is_err());
    }
}
