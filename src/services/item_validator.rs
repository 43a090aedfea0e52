use crate::types::dto::common::FieldError;
use crate::types::dto::items::CreateItemRequest;
use crate::types::internal::item::ItemInput;

/// Maximum length of an item name, in UTF-16 code units
pub const MAX_NAME_LENGTH: usize = 100;

/// Allowed quantity range, inclusive
pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 100;

/// Validates create/update request bodies
///
/// Every field is checked and all failures are reported together, so a
/// client sees every problem with its request in a single response.
pub struct ItemValidator;

impl ItemValidator {
    /// Validate a request body and turn it into store input
    ///
    /// Blank strings count as missing.
    ///
    /// # Returns
    /// * `Ok(ItemInput)` - All fields valid
    /// * `Err(Vec<FieldError>)` - One entry per rejected field
    pub fn validate(request: &CreateItemRequest) -> Result<ItemInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match non_blank(request.name.as_deref()) {
            None => {
                errors.push(FieldError::new("name", "Name is required"));
                None
            }
            Some(name) if name.encode_utf16().count() > MAX_NAME_LENGTH => {
                errors.push(FieldError::new(
                    "name",
                    format!("Name must not exceed {} characters", MAX_NAME_LENGTH),
                ));
                None
            }
            Some(name) => Some(name.to_string()),
        };

        let category = match non_blank(request.category.as_deref()) {
            None => {
                errors.push(FieldError::new("category", "Category is required"));
                None
            }
            Some(category) => Some(category.to_string()),
        };

        // a missing quantity is treated as 0 and fails the range check
        let quantity = u8::try_from(request.quantity.unwrap_or(0))
            .ok()
            .filter(|q| (MIN_QUANTITY..=MAX_QUANTITY).contains(&i64::from(*q)));
        if quantity.is_none() {
            errors.push(FieldError::new(
                "quantity",
                format!("Quantity must be between {} and {}", MIN_QUANTITY, MAX_QUANTITY),
            ));
        }

        match (name, category, quantity) {
            (Some(name), Some(category), Some(quantity)) if errors.is_empty() => Ok(ItemInput {
                name,
                category,
                quantity,
                status: request.status,
            }),
            _ => Err(errors),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::internal::item::ItemStatus;

    fn request(name: Option<&str>, category: Option<&str>, quantity: Option<i64>) -> CreateItemRequest {
        CreateItemRequest {
            name: name.map(str::to_string),
            category: category.map(str::to_string),
            quantity,
            status: None,
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_request_passes() {
        let input = ItemValidator::validate(&request(Some("Leche"), Some("Lácteos"), Some(2))).unwrap();

        assert_eq!(input.name, "Leche");
        assert_eq!(input.category, "Lácteos");
        assert_eq!(input.quantity, 2);
        assert_eq!(input.status, None);
    }

    #[test]
    fn test_status_is_passed_through() {
        let mut req = request(Some("Leche"), Some("Lácteos"), Some(2));
        req.status = Some(ItemStatus::OutOfStock);

        let input = ItemValidator::validate(&req).unwrap();
        assert_eq!(input.status, Some(ItemStatus::OutOfStock));
    }

    #[test]
    fn test_quantity_boundaries() {
        assert!(ItemValidator::validate(&request(Some("a"), Some("b"), Some(1))).is_ok());
        assert!(ItemValidator::validate(&request(Some("a"), Some("b"), Some(100))).is_ok());

        for quantity in [0, -1, 101, 150, i64::MAX] {
            let errors = ItemValidator::validate(&request(Some("a"), Some("b"), Some(quantity))).unwrap_err();
            assert_eq!(fields(&errors), vec!["quantity"], "quantity {}", quantity);
            assert_eq!(errors[0].message, "Quantity must be between 1 and 100");
        }
    }

    #[test]
    fn test_name_length_limit_counts_utf16_units() {
        let exactly_max = "ñ".repeat(MAX_NAME_LENGTH);
        assert!(ItemValidator::validate(&request(Some(&exactly_max), Some("b"), Some(1))).is_ok());

        let too_long = "a".repeat(MAX_NAME_LENGTH + 1);
        let errors = ItemValidator::validate(&request(Some(&too_long), Some("b"), Some(1))).unwrap_err();
        assert_eq!(fields(&errors), vec!["name"]);
        assert_eq!(errors[0].message, "Name must not exceed 100 characters");

        // astral-plane characters take two units each
        let fifty_emoji = "🥛".repeat(50);
        assert!(ItemValidator::validate(&request(Some(&fifty_emoji), Some("b"), Some(1))).is_ok());

        let sixty_emoji = "🥛".repeat(60);
        let errors = ItemValidator::validate(&request(Some(&sixty_emoji), Some("b"), Some(1))).unwrap_err();
        assert_eq!(fields(&errors), vec!["name"]);
    }

    #[test]
    fn test_blank_strings_are_missing() {
        let errors = ItemValidator::validate(&request(Some("   "), Some(""), Some(1))).unwrap_err();

        assert_eq!(fields(&errors), vec!["name", "category"]);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[1].message, "Category is required");
    }

    #[test]
    fn test_all_failures_are_reported() {
        let errors = ItemValidator::validate(&request(None, None, None)).unwrap_err();
        assert_eq!(fields(&errors), vec!["name", "category", "quantity"]);
    }

    #[test]
    fn test_missing_quantity_reports_range() {
        let errors = ItemValidator::validate(&request(Some("Leche"), Some("Lácteos"), None)).unwrap_err();

        assert_eq!(fields(&errors), vec!["quantity"]);
        assert_eq!(errors[0].message, "Quantity must be between 1 and 100");
    }
}
