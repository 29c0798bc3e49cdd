//! Fixed two-level classification taxonomy for waste items.
//!
//! Category codes are stable identifiers shared with the vision collaborator
//! and the disposal-guidance tables; display names are presentation text.

use serde::{Deserialize, Serialize};

/// One of the eight fixed primary waste categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrimaryCategory {
    #[serde(rename = "FURN")]
    Furniture,
    #[serde(rename = "APPL")]
    Appliances,
    #[serde(rename = "ELEC")]
    Electronics,
    #[serde(rename = "BEDD")]
    Bedding,
    #[serde(rename = "KTCH")]
    Kitchenware,
    #[serde(rename = "SPRT")]
    Sports,
    #[serde(rename = "TOYS")]
    Toys,
    #[serde(rename = "MISC")]
    Miscellaneous,
}

/// A refinement under a primary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryCategory {
    pub code: &'static str,
    pub name: &'static str,
}

impl PrimaryCategory {
    pub const ALL: [PrimaryCategory; 8] = [
        PrimaryCategory::Furniture,
        PrimaryCategory::Appliances,
        PrimaryCategory::Electronics,
        PrimaryCategory::Bedding,
        PrimaryCategory::Kitchenware,
        PrimaryCategory::Sports,
        PrimaryCategory::Toys,
        PrimaryCategory::Miscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryCategory::Furniture => "FURN",
            PrimaryCategory::Appliances => "APPL",
            PrimaryCategory::Electronics => "ELEC",
            PrimaryCategory::Bedding => "BEDD",
            PrimaryCategory::Kitchenware => "KTCH",
            PrimaryCategory::Sports => "SPRT",
            PrimaryCategory::Toys => "TOYS",
            PrimaryCategory::Miscellaneous => "MISC",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrimaryCategory::Furniture => "Furniture",
            PrimaryCategory::Appliances => "Large appliances",
            PrimaryCategory::Electronics => "Electronics",
            PrimaryCategory::Bedding => "Bedding and textiles",
            PrimaryCategory::Kitchenware => "Kitchenware",
            PrimaryCategory::Sports => "Sports and leisure",
            PrimaryCategory::Toys => "Toys and children's items",
            PrimaryCategory::Miscellaneous => "Other bulky items",
        }
    }

    /// Resolve a category code; unknown codes yield `None`, not an error.
    pub fn from_code(code: &str) -> Option<PrimaryCategory> {
        match code {
            "FURN" => Some(PrimaryCategory::Furniture),
            "APPL" => Some(PrimaryCategory::Appliances),
            "ELEC" => Some(PrimaryCategory::Electronics),
            "BEDD" => Some(PrimaryCategory::Bedding),
            "KTCH" => Some(PrimaryCategory::Kitchenware),
            "SPRT" => Some(PrimaryCategory::Sports),
            "TOYS" => Some(PrimaryCategory::Toys),
            "MISC" => Some(PrimaryCategory::Miscellaneous),
            _ => None,
        }
    }

    pub fn secondaries(&self) -> &'static [SecondaryCategory] {
        match self {
            PrimaryCategory::Furniture => &[
                SecondaryCategory { code: "FURN_BED", name: "Bed frame" },
                SecondaryCategory { code: "FURN_SOFA", name: "Sofa" },
                SecondaryCategory { code: "FURN_TABLE", name: "Table" },
                SecondaryCategory { code: "FURN_CHAIR", name: "Chair" },
                SecondaryCategory { code: "FURN_WARDROBE", name: "Wardrobe" },
            ],
            PrimaryCategory::Appliances => &[
                SecondaryCategory { code: "APPL_FRIDGE", name: "Refrigerator" },
                SecondaryCategory { code: "APPL_WASHER", name: "Washing machine" },
                SecondaryCategory { code: "APPL_AIRCON", name: "Air conditioner" },
                SecondaryCategory { code: "APPL_OVEN", name: "Oven or range" },
            ],
            PrimaryCategory::Electronics => &[
                SecondaryCategory { code: "ELEC_TV", name: "Television" },
                SecondaryCategory { code: "ELEC_COMPUTER", name: "Computer" },
                SecondaryCategory { code: "ELEC_AUDIO", name: "Audio equipment" },
                SecondaryCategory { code: "ELEC_PRINTER", name: "Printer" },
            ],
            PrimaryCategory::Bedding => &[
                SecondaryCategory { code: "BEDD_MATTRESS", name: "Mattress" },
                SecondaryCategory { code: "BEDD_BLANKET", name: "Blanket or duvet" },
                SecondaryCategory { code: "BEDD_CARPET", name: "Carpet or rug" },
            ],
            PrimaryCategory::Kitchenware => &[
                SecondaryCategory { code: "KTCH_COOKWARE", name: "Cookware" },
                SecondaryCategory { code: "KTCH_DINNERWARE", name: "Dinnerware" },
                SecondaryCategory { code: "KTCH_SMALLAPPL", name: "Small kitchen appliance" },
            ],
            PrimaryCategory::Sports => &[
                SecondaryCategory { code: "SPRT_BICYCLE", name: "Bicycle" },
                SecondaryCategory { code: "SPRT_TREADMILL", name: "Exercise machine" },
                SecondaryCategory { code: "SPRT_CAMPING", name: "Camping gear" },
            ],
            PrimaryCategory::Toys => &[
                SecondaryCategory { code: "TOYS_RIDEON", name: "Ride-on toy" },
                SecondaryCategory { code: "TOYS_PLAYSET", name: "Play set" },
                SecondaryCategory { code: "TOYS_STROLLER", name: "Stroller" },
            ],
            PrimaryCategory::Miscellaneous => &[
                SecondaryCategory { code: "MISC_INSTRUMENT", name: "Musical instrument" },
                SecondaryCategory { code: "MISC_LUGGAGE", name: "Luggage" },
                SecondaryCategory { code: "MISC_OTHER", name: "Unclassified" },
            ],
        }
    }

    /// Look up a secondary refinement of this category by code.
    pub fn secondary(&self, code: &str) -> Option<SecondaryCategory> {
        self.secondaries().iter().copied().find(|s| s.code == code)
    }
}

impl std::fmt::Display for PrimaryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
