//! Menu item form adapter

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItemPayload, Pack, PackagingSelectionResult};

use crate::pricing::money::parse_amount;
use crate::pricing::{merge_into_extras, resolve_with};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_extras, validate_optional_text, validate_required_text,
};

/// Raw menu item form as sent by the vendor UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemForm {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub needs_container: bool,
    #[serde(default)]
    pub extra_portion: bool,
    #[serde(default)]
    pub extras: Vec<String>,
}

/// Parsed menu item form
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub needs_container: bool,
    pub extra_portion: bool,
    pub extras: Vec<String>,
}

impl MenuItemDraft {
    pub fn parse(form: MenuItemForm) -> AppResult<Self> {
        validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&form.description, "description", MAX_NOTE_LEN)?;
        validate_extras(&form.extras)?;

        let price = match parse_amount(&form.price, "price")? {
            Some(p) if p > 0.0 => p,
            Some(p) => {
                return Err(AppError::with_message(
                    ErrorCode::MenuItemInvalidPrice,
                    format!("price must be greater than zero, got {}", p),
                )
                .with_detail("field", "price"));
            }
            None => {
                return Err(AppError::with_message(ErrorCode::RequiredField, "price is required")
                    .with_detail("field", "price"));
            }
        };

        Ok(Self {
            name: form.name.trim().to_string(),
            description: form
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            price,
            needs_container: form.needs_container,
            extra_portion: form.extra_portion,
            extras: form.extras,
        })
    }

    /// Container selection against the vendor's current pack catalog
    pub fn packaging(&self, packs: &[Pack]) -> PackagingSelectionResult {
        resolve_with(self.needs_container, self.extra_portion, packs)
    }

    /// Build the catalog payload, blocking submission while the required
    /// container pack is missing from the vendor catalog.
    pub fn into_payload(self, packs: &[Pack]) -> AppResult<MenuItemPayload> {
        let selection = self.packaging(packs);

        if let Some(message) = selection.missing_pack_kind.missing_message() {
            let kind = selection
                .missing_pack_kind
                .kind()
                .map(|k| k.catalog_name())
                .unwrap_or_default();
            return Err(AppError::with_message(ErrorCode::PackMissing, message)
                .with_detail("missing_pack", kind));
        }

        let extras = merge_into_extras(&self.extras, &selection, packs);
        Ok(MenuItemPayload {
            name: self.name,
            description: self.description,
            price: self.price,
            needs_container: self.needs_container,
            extra_portion: self.extra_portion,
            extras,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(id: &str, name: &str) -> Pack {
        Pack {
            id: id.to_string(),
            name: name.to_string(),
            price: 0.3,
        }
    }

    fn form(needs_container: bool, extra_portion: bool) -> MenuItemForm {
        MenuItemForm {
            name: "Jollof rice".to_string(),
            description: Some("  ".to_string()),
            price: "2500".to_string(),
            needs_container,
            extra_portion,
            extras: vec!["s1".to_string()],
        }
    }

    #[test]
    fn test_parse() {
        let draft = MenuItemDraft::parse(form(true, false)).unwrap();
        assert_eq!(draft.price, 2500.0);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_price_required() {
        let mut f = form(false, false);
        f.price = String::new();
        let err = MenuItemDraft::parse(f).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let mut f = form(false, false);
        f.price = "0".to_string();
        let err = MenuItemDraft::parse(f).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }

    #[test]
    fn test_payload_attaches_container() {
        let packs = vec![pack("m1", "Medium Container"), pack("b1", "Big Container")];
        let payload = MenuItemDraft::parse(form(true, true))
            .unwrap()
            .into_payload(&packs)
            .unwrap();
        assert_eq!(payload.extras, vec!["s1".to_string(), "b1".to_string()]);
    }

    #[test]
    fn test_no_container_needed() {
        let payload = MenuItemDraft::parse(form(false, true))
            .unwrap()
            .into_payload(&[])
            .unwrap();
        assert_eq!(payload.extras, vec!["s1".to_string()]);
    }

    #[test]
    fn test_missing_pack_blocks_submission() {
        let packs = vec![pack("m1", "Medium Container")];
        let err = MenuItemDraft::parse(form(true, true))
            .unwrap()
            .into_payload(&packs)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PackMissing);
        assert!(err.message.contains("Big Container"));
        assert_eq!(
            err.details.unwrap().get("missing_pack").unwrap(),
            "Big Container"
        );
    }
}
