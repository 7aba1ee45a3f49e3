//! Drug reference models.

use serde::{Deserialize, Serialize};

/// Display language for bilingual reference text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ar" | "arabic" => Ok(Language::Ar),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

/// A pre-composed English/Arabic text pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BilingualText {
    pub en: String,
    pub ar: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Text in the requested language.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// A single entry in the drug reference table.
///
/// Records are immutable reference data: created when the table is loaded and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugRecord {
    /// Unique identifier (e.g., "la1", "ab4")
    pub id: String,
    /// Generic name, including strength where relevant (e.g., "Lidocaine 2%")
    pub generic_name: String,
    /// Locally available brand names
    #[serde(default)]
    pub brand_names: Vec<String>,
    /// Category tag (e.g., "Local Anesthetic")
    pub category: BilingualText,
    /// Short clinical description
    pub description: BilingualText,
    /// Static adult dose label, shown when no weight-based formula applies
    #[serde(default)]
    pub dose: Option<BilingualText>,
}

/// Category tag that routes a drug to the anesthetic dosing branch.
pub const LOCAL_ANESTHETIC_CATEGORY: &str = "Local Anesthetic";

impl DrugRecord {
    /// Create a new record with required fields.
    pub fn new(id: String, generic_name: String, category: BilingualText) -> Self {
        Self {
            id,
            generic_name,
            brand_names: Vec::new(),
            category,
            description: BilingualText::new("", ""),
            dose: None,
        }
    }

    /// Check whether this drug belongs to the local anesthetic category.
    pub fn is_local_anesthetic(&self) -> bool {
        self.category.en.contains(LOCAL_ANESTHETIC_CATEGORY)
    }

    /// Case-insensitive substring match on generic name or any brand name.
    pub fn matches_name(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        if self.generic_name.to_lowercase().contains(&query_lower) {
            return true;
        }
        self.brand_names
            .iter()
            .any(|b| b.to_lowercase().contains(&query_lower))
    }
}
