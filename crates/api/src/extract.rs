//! Request extractors whose rejections render as [`AppError`].
//!
//! Axum's stock `Json`, `Query` and `Path` reject with plain-text bodies and
//! (for JSON) a 422 status. These wrappers route every rejection through the
//! structured 400 error body instead.

use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::AppError;

/// `axum::Json` with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `axum::extract::Path` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateRestaurantRequest>) -> AppResult<..>
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Validate every element of a top-level JSON array, reporting violations
/// as `[index].field: message`.
pub fn validate_each<T: Validate>(items: &[T]) -> Result<(), AppError> {
    let mut details = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if let Err(errors) = item.validate() {
            collect_details(&format!("[{index}]"), &errors, &mut details);
        }
    }
    if details.is_empty() {
        Ok(())
    } else {
        Err(AppError::malformed("Request failed validation", details))
    }
}

/// Flatten nested validator output into `path: message` lines, sorted by
/// field name at each level.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut details = Vec::new();
    collect_details("", errors, &mut details);
    details
}

fn collect_details(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        let field = wire_name(field);
        let path = if prefix.is_empty() {
            field
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_details(&path, inner, out),
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    collect_details(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

/// JSON name of a request field: camelCase, with `item_type` sent as `type`.
fn wire_name(field: &str) -> String {
    if field == "item_type" {
        return "type".to_string();
    }
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            name.extend(ch.to_uppercase());
            upper = false;
        } else {
            name.push(ch);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use menu_core::item_type::ItemType;

    use super::*;
    use crate::dto::request::{CreateRestaurantRequest, MenuItemRequest};

    fn item(dish_name: &str, price: f64) -> MenuItemRequest {
        MenuItemRequest {
            dish_name: dish_name.to_string(),
            price,
            availability: true,
            item_type: ItemType::Veg,
        }
    }

    #[test]
    fn validate_each_reports_index_and_field() {
        let err = validate_each(&[item("Pizza", 10.0), item("", -1.0)]).unwrap_err();
        match err {
            AppError::MalformedRequest { details, .. } => {
                assert_eq!(details.len(), 2);
                assert!(details[0].starts_with("[1].dishName: "));
                assert!(details[1].starts_with("[1].price: "));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn field_paths_use_json_names() {
        assert_eq!(wire_name("dish_name"), "dishName");
        assert_eq!(wire_name("menu_items"), "menuItems");
        assert_eq!(wire_name("item_type"), "type");
        assert_eq!(wire_name("pincode"), "pincode");
    }

    #[test]
    fn validate_each_accepts_valid_items() {
        assert!(validate_each(&[item("Pizza", 0.01)]).is_ok());
        assert!(validate_each::<MenuItemRequest>(&[]).is_ok());
    }

    #[test]
    fn nested_menu_item_errors_carry_their_path() {
        let request = CreateRestaurantRequest {
            name: "Test Restaurant".to_string(),
            address: "123 Test St".to_string(),
            city: None,
            pincode: "12345".to_string(),
            menu_items: Some(vec![item("Pizza", 0.0)]),
        };
        let errors = request.validate().unwrap_err();
        let details = flatten_validation_errors(&errors);

        assert!(details
            .iter()
            .any(|d| d == "pincode: Pincode must be exactly 6 characters"));
        assert!(details.iter().any(|d| d.starts_with("menuItems")
            && d.ends_with("price: Price must be greater than 0")));
    }
}
