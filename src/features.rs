//! The fixed set of health measurements collected by the form.

/// One numeric measurement shown as a form input.
///
/// `name` doubles as the key in the prediction request body, so it must match
/// what the prediction service expects byte for byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Display unit; empty for unitless ratios.
    pub unit: &'static str,
}

pub const CHOLESTEROL_LDL: &str = "Cholesterol LDL_x";
pub const FAT_PERCENT: &str = "Fat (%)";
pub const CARBOHYDRATES_PERCENT: &str = "Carbohydrates (%)";
pub const RIBOFLAVIN: &str = "wit. B2 - Riboflavin";
pub const VITAMIN_B5: &str = "Vitamin B5 (mg)";
pub const COPPER: &str = "Copper (mg)";
pub const ZINC: &str = "Zinc (mg)";
pub const VITAMIN_D: &str = "Vitamin D (µg)";
pub const BMI: &str = "BMI";
pub const PROTEIN_FAT_RATIO: &str = "Protein_Fat_Ratio";
pub const SELENIUM: &str = "Selenium (µg)";
pub const MANGANESE: &str = "Manganese (mg)";

/// Inputs in display order.
pub static FEATURES: [FeatureDescriptor; 12] = [
    FeatureDescriptor {
        name: CHOLESTEROL_LDL,
        description: "LDL cholesterol level in mg/dL",
        unit: "mg/dL",
    },
    FeatureDescriptor {
        name: FAT_PERCENT,
        description: "Share of fat in the diet",
        unit: "%",
    },
    FeatureDescriptor {
        name: CARBOHYDRATES_PERCENT,
        description: "Share of carbohydrates in the diet",
        unit: "%",
    },
    FeatureDescriptor {
        name: RIBOFLAVIN,
        description: "Vitamin B2 (riboflavin) level",
        unit: "mg",
    },
    FeatureDescriptor {
        name: VITAMIN_B5,
        description: "Vitamin B5 level",
        unit: "mg",
    },
    FeatureDescriptor {
        name: COPPER,
        description: "Copper level",
        unit: "mg",
    },
    FeatureDescriptor {
        name: ZINC,
        description: "Zinc level",
        unit: "mg",
    },
    FeatureDescriptor {
        name: VITAMIN_D,
        description: "Vitamin D level",
        unit: "µg",
    },
    FeatureDescriptor {
        name: BMI,
        description: "Body mass index",
        unit: "kg/m²",
    },
    FeatureDescriptor {
        name: PROTEIN_FAT_RATIO,
        description: "Protein to fat ratio",
        unit: "",
    },
    FeatureDescriptor {
        name: SELENIUM,
        description: "Selenium level",
        unit: "µg",
    },
    FeatureDescriptor {
        name: MANGANESE,
        description: "Manganese level",
        unit: "mg",
    },
];

/// Look up a descriptor by its payload name.
pub fn find(name: &str) -> Option<&'static FeatureDescriptor> {
    FEATURES.iter().find(|feature| feature.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = FEATURES.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FEATURES.len());
    }

    #[test]
    fn display_order_starts_with_ldl_and_ends_with_manganese() {
        assert_eq!(FEATURES.first().map(|f| f.name), Some(CHOLESTEROL_LDL));
        assert_eq!(FEATURES.last().map(|f| f.name), Some(MANGANESE));
        assert_eq!(FEATURES[8].name, BMI);
    }

    #[test]
    fn find_matches_exact_names_only() {
        assert_eq!(find(BMI).map(|f| f.unit), Some("kg/m²"));
        assert_eq!(find(PROTEIN_FAT_RATIO).map(|f| f.unit), Some(""));
        assert!(find("bmi").is_none());
    }
}
