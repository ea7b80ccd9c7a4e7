//! Pack (takeaway container) Model

use serde::{Deserialize, Serialize};

/// Catalog name of the container attached to regular takeaway items
pub const MEDIUM_CONTAINER: &str = "Medium Container";
/// Catalog name of the container attached to extra-portion takeaway items
pub const BIG_CONTAINER: &str = "Big Container";

/// Pack entity - a vendor-defined packaging SKU
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pack {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Pack {
    /// Whether this pack is one of the two auto-assigned containers
    pub fn is_container(&self) -> bool {
        self.name == MEDIUM_CONTAINER || self.name == BIG_CONTAINER
    }
}

/// Create pack payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackCreate {
    pub name: String,
    pub price: f64,
}

/// Container kind required by a takeaway menu item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PackKind {
    Medium,
    Big,
}

impl PackKind {
    /// Kind required for the given portion size
    pub fn required(extra_portion: bool) -> Self {
        if extra_portion { Self::Big } else { Self::Medium }
    }

    /// Exact (case-sensitive) catalog name of this container
    pub fn catalog_name(&self) -> &'static str {
        match self {
            Self::Medium => MEDIUM_CONTAINER,
            Self::Big => BIG_CONTAINER,
        }
    }
}

/// Which required pack is absent from the vendor catalog
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingPackKind {
    #[default]
    None,
    Medium,
    Big,
}

impl MissingPackKind {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The pack kind the vendor has to create, if any
    pub fn kind(&self) -> Option<PackKind> {
        match self {
            Self::None => None,
            Self::Medium => Some(PackKind::Medium),
            Self::Big => Some(PackKind::Big),
        }
    }

    /// Actionable vendor-facing message, `None` when nothing is missing
    pub fn missing_message(&self) -> Option<String> {
        self.kind().map(|kind| {
            format!(
                "Please create a \"{}\" pack before adding takeaway items{}.",
                kind.catalog_name(),
                match kind {
                    PackKind::Medium => "",
                    PackKind::Big => " with an extra portion",
                }
            )
        })
    }
}

impl From<PackKind> for MissingPackKind {
    fn from(kind: PackKind) -> Self {
        match kind {
            PackKind::Medium => Self::Medium,
            PackKind::Big => Self::Big,
        }
    }
}

/// Packaging resolution input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackagingSelectionInput {
    pub needs_container: bool,
    pub extra_portion: bool,
    /// The vendor's pack catalog
    #[serde(default)]
    pub available_packs: Vec<Pack>,
}

/// Packaging resolution result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackagingSelectionResult {
    /// Catalog id of the pack to attach to the menu item
    pub selected_pack_id: Option<String>,
    pub missing_pack_kind: MissingPackKind,
}

impl PackagingSelectionResult {
    pub fn selected(pack_id: impl Into<String>) -> Self {
        Self {
            selected_pack_id: Some(pack_id.into()),
            missing_pack_kind: MissingPackKind::None,
        }
    }

    pub fn missing(kind: PackKind) -> Self {
        Self {
            selected_pack_id: None,
            missing_pack_kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_kind() {
        assert_eq!(PackKind::required(false), PackKind::Medium);
        assert_eq!(PackKind::required(true), PackKind::Big);
        assert_eq!(PackKind::Medium.catalog_name(), "Medium Container");
        assert_eq!(PackKind::Big.catalog_name(), "Big Container");
    }

    #[test]
    fn test_missing_message() {
        assert!(MissingPackKind::None.missing_message().is_none());

        let msg = MissingPackKind::Big.missing_message().unwrap();
        assert!(msg.contains("\"Big Container\""));
        assert!(msg.contains("extra portion"));

        let msg = MissingPackKind::Medium.missing_message().unwrap();
        assert!(msg.contains("\"Medium Container\""));
    }

    #[test]
    fn test_is_container() {
        let pack = |name: &str| Pack {
            id: "p".into(),
            name: name.into(),
            price: 1.0,
        };
        assert!(pack("Medium Container").is_container());
        assert!(pack("Big Container").is_container());
        assert!(!pack("big container").is_container());
        assert!(!pack("Sauce").is_container());
    }

    #[test]
    fn test_selection_input_defaults_packs() {
        let input: PackagingSelectionInput =
            serde_json::from_str(r#"{"needs_container":true,"extra_portion":false}"#).unwrap();
        assert!(input.available_packs.is_empty());
    }

    #[test]
    fn test_result_serde() {
        let json = serde_json::to_value(PackagingSelectionResult::missing(PackKind::Big)).unwrap();
        assert_eq!(json["missing_pack_kind"], "big");
        assert!(json["selected_pack_id"].is_null());
    }
}
