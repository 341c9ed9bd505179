//! Menu item validation

use rust_decimal::Decimal;

use super::validation::{required_text, ValidationError};

/// Maximum length for menu item names
const MAX_NAME_LEN: usize = 128;

/// Maximum length for descriptions
const MAX_DESCRIPTION_LEN: usize = 1024;

/// Maximum length for free-form nutrition info
const MAX_NUTRITION_LEN: usize = 2048;

/// Largest price that fits NUMERIC(10,2): 99999999.99
const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// A menu item ready for insertion.
///
/// New items always start on the active menu.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    name: String,
    description: String,
    price: Decimal,
    nutrition_info: String,
}

impl NewMenuItem {
    /// Validate a menu item.
    ///
    /// # Rules
    /// - Name non-empty, max 128 characters
    /// - Description and nutrition info may be empty but are bounded
    /// - Price non-negative, rounded to cents
    pub fn new(
        name: &str,
        description: &str,
        price: Decimal,
        nutrition_info: &str,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name, MAX_NAME_LEN)?;
        let description = bounded("description", description, MAX_DESCRIPTION_LEN)?;
        let nutrition_info = bounded("nutritionInfo", nutrition_info, MAX_NUTRITION_LEN)?;

        if price < Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "must not be negative",
            });
        }

        let price = price.round_dp(2);
        if price > MAX_PRICE {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "exceeds 99999999.99",
            });
        }

        Ok(Self {
            name,
            description,
            price,
            nutrition_info,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn nutrition_info(&self) -> &str {
        &self.nutrition_info
    }
}

fn bounded(field: &'static str, s: &str, max: usize) -> Result<String, ValidationError> {
    if s.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(s.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn valid_item() {
        let item = NewMenuItem::new("Soup", "Tomato", price("4.50"), "210 kcal").unwrap();
        assert_eq!(item.name(), "Soup");
        assert_eq!(item.price(), price("4.50"));
    }

    #[test]
    fn rounds_to_cents() {
        let item = NewMenuItem::new("Soup", "", price("4.499"), "").unwrap();
        assert_eq!(item.price(), price("4.50"));
    }

    #[test]
    fn free_price_allowed() {
        assert!(NewMenuItem::new("Water", "", Decimal::ZERO, "").is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        let err = NewMenuItem::new("Soup", "", price("-1"), "").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "price", .. }));
    }

    #[test]
    fn rejects_huge_price() {
        let err = NewMenuItem::new("Soup", "", price("100000000"), "").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "price", .. }));
    }

    #[test]
    fn rejects_blank_name() {
        let err = NewMenuItem::new(" ", "", price("1"), "").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn bounds_nutrition_info() {
        let long = "x".repeat(2049);
        let err = NewMenuItem::new("Soup", "", price("1"), &long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "nutritionInfo", .. }));
    }
}
