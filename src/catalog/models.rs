use serde::{Deserialize, Serialize};

/// Fixed strength vocabulary, weakest first. Canonical display and sort
/// order regardless of what order the data presents.
pub const STRENGTH_SCALE: [&str; 6] = [
    "Mild",
    "Medium-Low",
    "Medium",
    "Medium-Strong",
    "Strong",
    "Very Strong",
];

/// Fixed difficulty vocabulary, easiest first.
pub const DIFFICULTY_SCALE: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// A cocktail recipe. Serialized as camelCase JSON, the format of both the
/// bundled catalog and user submissions. Everything beyond the four fields
/// the submission gate requires is defaulted, so a minimal submission
/// deserializes cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique across the combined base+custom collection. Assigned at
    /// creation time for user submissions and never reassigned.
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Primary spirit; comma-separated when a drink has several bases.
    pub base_spirit: String,
    #[serde(default)]
    pub glass: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub characteristics: Option<Characteristics>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub preparation: Preparation,
    #[serde(default)]
    pub notes: Option<Notes>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Comma-split, trimmed base-spirit tokens.
    pub fn spirit_tokens(&self) -> Vec<&str> {
        self.base_spirit
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }

    pub fn strength(&self) -> Option<&str> {
        self.characteristics.as_ref()?.strength.as_deref()
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.characteristics.as_ref()?.difficulty.as_deref()
    }

    pub fn flavors(&self) -> &[String] {
        self.characteristics
            .as_ref()
            .map(|c| c.flavor.as_slice())
            .unwrap_or(&[])
    }

    pub fn styles(&self) -> &[String] {
        self.characteristics
            .as_ref()
            .map(|c| c.style.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    #[serde(default)]
    pub flavor: Vec<String>,
    #[serde(default)]
    pub style: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub season: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    pub name: String,
    #[serde(default)]
    pub substitutions: Vec<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub garnish: bool,
    #[serde(default)]
    pub preparation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preparation {
    #[serde(default)]
    pub prep_time_minutes: u32,
    #[serde(default)]
    pub steps: Vec<PreparationStep>,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationStep {
    pub step: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notes {
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub variations: Option<String>,
    #[serde(default)]
    pub tips: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub alcohol_by_volume: f64,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub allergens: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub video: Option<Video>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub duration_seconds: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub is_original: bool,
}
