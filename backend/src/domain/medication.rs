//! Medication reference data model and query filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Clinical-risk classification tag on a medication record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AlertLevel {
    /// Requires independent double-checks before administration.
    #[serde(rename = "HIGH_ALERT")]
    HighAlert,
    /// Heightened risk profile in elderly patients.
    #[serde(rename = "ELDER_ALERT")]
    ElderAlert,
    /// No special handling beyond protocol.
    #[serde(rename = "STANDARD")]
    Standard,
}

impl AlertLevel {
    /// Stored text representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighAlert => "HIGH_ALERT",
            Self::ElderAlert => "ELDER_ALERT",
            Self::Standard => "STANDARD",
        }
    }

    /// Parse the stored text representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HIGH_ALERT" => Some(Self::HighAlert),
            "ELDER_ALERT" => Some(Self::ElderAlert),
            "STANDARD" => Some(Self::Standard),
            _ => None,
        }
    }
}

/// Optional therapeutic grouping for a medication record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Pain management agents.
    Analgesics,
    /// Cardiovascular agents.
    Cardiac,
    /// Airway and breathing agents.
    Respiratory,
    /// Central nervous system agents.
    Neurological,
    /// Hormonal and metabolic agents.
    Endocrine,
}

impl Category {
    /// Stored text representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analgesics => "analgesics",
            Self::Cardiac => "cardiac",
            Self::Respiratory => "respiratory",
            Self::Neurological => "neurological",
            Self::Endocrine => "endocrine",
        }
    }

    /// Parse the stored text representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "analgesics" => Some(Self::Analgesics),
            "cardiac" => Some(Self::Cardiac),
            "respiratory" => Some(Self::Respiratory),
            "neurological" => Some(Self::Neurological),
            "endocrine" => Some(Self::Endocrine),
            _ => None,
        }
    }
}

/// Medication reference record.
///
/// ## Invariants
/// - `alert_level` and `category` are restricted to their enumerated sets.
/// - `updated_at` is refreshed on every mutation; at creation it equals
///   `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    /// Stable identifier assigned on creation.
    #[schema(example = 1)]
    pub id: i32,
    /// Drug name, possibly listing trade names.
    #[schema(example = "EPINEPHrine/Adrenalin")]
    pub name: String,
    /// Pharmacological classification.
    #[schema(example = "Sympathomimetic")]
    pub classification: String,
    /// Clinical-risk tag.
    pub alert_level: AlertLevel,
    /// Optional therapeutic grouping.
    pub category: Option<Category>,
    /// Conditions the drug is indicated for.
    pub indications: String,
    /// Conditions ruling the drug out.
    pub contraindications: String,
    /// Adult dosing guidance.
    pub adult_dosage: String,
    /// Paediatric dosing guidance.
    pub pediatric_dosage: Option<String>,
    /// Administration routes, e.g. `"IV, IO, IM"`.
    pub route_of_administration: Option<String>,
    /// Onset and duration notes.
    pub onset_duration: Option<String>,
    /// Handling cautions and monitoring notes.
    pub special_considerations: Option<String>,
    /// Known side effects.
    pub side_effects: Option<String>,
    /// Id of the user who created the record, when known.
    pub created_by: Option<i32>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent mutation.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a medication record.
///
/// The store assigns `id` and both timestamps; omitted optional fields are
/// stored as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMedication {
    /// Drug name.
    pub name: String,
    /// Pharmacological classification.
    pub classification: String,
    /// Clinical-risk tag.
    pub alert_level: AlertLevel,
    /// Optional therapeutic grouping.
    #[serde(default)]
    pub category: Option<Category>,
    /// Conditions the drug is indicated for.
    pub indications: String,
    /// Conditions ruling the drug out.
    pub contraindications: String,
    /// Adult dosing guidance.
    pub adult_dosage: String,
    /// Paediatric dosing guidance.
    #[serde(default)]
    pub pediatric_dosage: Option<String>,
    /// Administration routes.
    #[serde(default)]
    pub route_of_administration: Option<String>,
    /// Onset and duration notes.
    #[serde(default)]
    pub onset_duration: Option<String>,
    /// Handling cautions and monitoring notes.
    #[serde(default)]
    pub special_considerations: Option<String>,
    /// Known side effects.
    #[serde(default)]
    pub side_effects: Option<String>,
    /// Id of the creating user.
    #[serde(default)]
    pub created_by: Option<i32>,
}

/// Partial update for a medication record.
///
/// Nullable fields use a double `Option`: the outer level distinguishes
/// "field absent from the payload" (keep the stored value) from "field
/// present" (replace, where an explicit JSON `null` clears it). Required
/// text fields cannot be cleared, only replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationUpdate {
    /// Replacement drug name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement classification.
    #[serde(default)]
    pub classification: Option<String>,
    /// Replacement clinical-risk tag.
    #[serde(default)]
    pub alert_level: Option<AlertLevel>,
    /// Replacement therapeutic grouping; explicit null clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Category>)]
    pub category: Option<Option<Category>>,
    /// Replacement indications.
    #[serde(default)]
    pub indications: Option<String>,
    /// Replacement contraindications.
    #[serde(default)]
    pub contraindications: Option<String>,
    /// Replacement adult dosing guidance.
    #[serde(default)]
    pub adult_dosage: Option<String>,
    /// Replacement paediatric dosing guidance; explicit null clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub pediatric_dosage: Option<Option<String>>,
    /// Replacement administration routes; explicit null clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub route_of_administration: Option<Option<String>>,
    /// Replacement onset and duration notes; explicit null clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub onset_duration: Option<Option<String>>,
    /// Replacement handling cautions; explicit null clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub special_considerations: Option<Option<String>>,
    /// Replacement side effects; explicit null clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub side_effects: Option<Option<String>>,
    /// Replacement creator reference; explicit null clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub created_by: Option<Option<i32>>,
}

/// Deserialise a field that was present in the payload, keeping `null`
/// distinct from absence (absence is handled by `#[serde(default)]`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Default page size when no `limit` parameter is supplied.
pub const DEFAULT_LIMIT: i64 = 50;

/// Recognised filter options for medication listing.
///
/// All provided filters combine with logical AND; `search` is an OR across
/// name, indications, contraindications, and classification. Results are
/// sorted ascending by name (case-insensitive) before `offset`/`limit`
/// pagination applies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationFilters {
    /// Case-insensitive substring matched across the four text fields.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact alert level match.
    #[serde(default)]
    pub alert_level: Option<AlertLevel>,
    /// Exact category match.
    #[serde(default)]
    pub category: Option<Category>,
    /// Maximum number of rows returned after filtering and sorting.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of sorted, filtered rows skipped before the page starts.
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for MedicationFilters {
    fn default() -> Self {
        Self {
            search: None,
            alert_level: None,
            category: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl MedicationFilters {
    /// Whether a record satisfies every provided filter.
    pub fn matches(&self, medication: &Medication) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = [
                &medication.name,
                &medication.indications,
                &medication.contraindications,
                &medication.classification,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(level) = self.alert_level {
            if medication.alert_level != level {
                return false;
            }
        }
        if let Some(category) = self.category {
            if medication.category != Some(category) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    //! Filter semantics and enum wire format coverage.
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn medication(name: &str, level: AlertLevel, category: Option<Category>) -> Medication {
        let now = Utc::now();
        Medication {
            id: 1,
            name: name.into(),
            classification: "Sympathomimetic".into(),
            alert_level: level,
            category,
            indications: "Anaphylaxis, Cardiac arrest".into(),
            contraindications: "None in life-threatening situations".into(),
            adult_dosage: "1 mg IV/IO q3-5min".into(),
            pediatric_dosage: None,
            route_of_administration: None,
            onset_duration: None,
            special_considerations: None,
            side_effects: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[case("epi", true)]
    #[case("EPINEPH", true)]
    #[case("anaphylaxis", true)]
    #[case("sympatho", true)]
    #[case("life-threatening", true)]
    #[case("warfarin", false)]
    fn search_matches_across_text_fields(#[case] needle: &str, #[case] expected: bool) {
        let filters = MedicationFilters {
            search: Some(needle.into()),
            ..MedicationFilters::default()
        };
        let med = medication(
            "EPINEPHrine/Adrenalin",
            AlertLevel::HighAlert,
            Some(Category::Cardiac),
        );
        assert_eq!(filters.matches(&med), expected);
    }

    #[test]
    fn distinct_filters_combine_with_and() {
        let filters = MedicationFilters {
            alert_level: Some(AlertLevel::HighAlert),
            category: Some(Category::Cardiac),
            ..MedicationFilters::default()
        };
        let hit = medication("Epi", AlertLevel::HighAlert, Some(Category::Cardiac));
        let wrong_category = medication("Morphine", AlertLevel::HighAlert, Some(Category::Analgesics));
        let missing_category = medication("Epi", AlertLevel::HighAlert, None);
        assert!(filters.matches(&hit));
        assert!(!filters.matches(&wrong_category));
        assert!(!filters.matches(&missing_category));
    }

    #[rstest]
    #[case(AlertLevel::HighAlert, "HIGH_ALERT")]
    #[case(AlertLevel::ElderAlert, "ELDER_ALERT")]
    #[case(AlertLevel::Standard, "STANDARD")]
    fn alert_level_round_trips_through_text(#[case] level: AlertLevel, #[case] text: &str) {
        assert_eq!(level.as_str(), text);
        assert_eq!(AlertLevel::parse(text), Some(level));
        let json = serde_json::to_value(level).expect("serialise");
        assert_eq!(json, serde_json::json!(text));
    }

    #[rstest]
    #[case(Category::Analgesics, "analgesics")]
    #[case(Category::Cardiac, "cardiac")]
    #[case(Category::Respiratory, "respiratory")]
    #[case(Category::Neurological, "neurological")]
    #[case(Category::Endocrine, "endocrine")]
    fn category_round_trips_through_text(#[case] category: Category, #[case] text: &str) {
        assert_eq!(category.as_str(), text);
        assert_eq!(Category::parse(text), Some(category));
    }

    #[test]
    fn unknown_enum_text_parses_to_none() {
        assert_eq!(AlertLevel::parse("CRITICAL"), None);
        assert_eq!(Category::parse("supplements"), None);
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let update: MedicationUpdate =
            serde_json::from_str(r#"{"adultDosage":"X","sideEffects":null}"#).expect("deserialise");
        assert_eq!(update.adult_dosage.as_deref(), Some("X"));
        assert_eq!(update.side_effects, Some(None));
        assert_eq!(update.pediatric_dosage, None);
    }

    #[test]
    fn filters_default_pagination() {
        let filters: MedicationFilters = serde_json::from_str("{}").expect("deserialise");
        assert_eq!(filters.limit, DEFAULT_LIMIT);
        assert_eq!(filters.offset, 0);
    }
}
