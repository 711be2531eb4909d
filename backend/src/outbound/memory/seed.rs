//! Demonstration dataset loaded into the in-memory backend at startup.
//!
//! Five medications drawn from Saskatchewan EMS protocols, covering every
//! alert level and four of the five categories.

use crate::domain::{AlertLevel, Category, NewMedication};

/// Sample medications seeded when the in-memory backend is selected.
pub fn sample_medications() -> Vec<NewMedication> {
    vec![
        NewMedication {
            name: "EPINEPHrine/Adrenalin".into(),
            classification: "Sympathomimetic".into(),
            alert_level: AlertLevel::HighAlert,
            category: Some(Category::Cardiac),
            indications: "Anaphylaxis, Severe asthma/bronchospasm, Cardiac arrest (VF/pVT, \
                          Asystole, PEA), Symptomatic bradycardia"
                .into(),
            contraindications: "None in life-threatening situations. Relative: Hypertension, \
                                coronary artery disease, cerebrovascular disease"
                .into(),
            adult_dosage: "Anaphylaxis: 0.3-0.5 mg IM (1:1000). Cardiac arrest: 1 mg IV/IO \
                           q3-5min. Severe asthma: 0.3-0.5 mg IM"
                .into(),
            pediatric_dosage: Some(
                "Anaphylaxis: 0.01 mg/kg IM (max 0.5 mg). Cardiac arrest: 0.01 mg/kg IV/IO \
                 q3-5min"
                    .into(),
            ),
            route_of_administration: Some("IV, IO, IM, Endotracheal".into()),
            onset_duration: Some(
                "IV: 1-2 min onset, 5-10 min duration. IM: 5-10 min onset, 10-30 min duration"
                    .into(),
            ),
            special_considerations: Some(
                "HIGH ALERT medication. Double-check concentration and dose. Monitor for \
                 arrhythmias."
                    .into(),
            ),
            side_effects: Some(
                "Tachycardia, hypertension, anxiety, tremor, headache, pulmonary edema".into(),
            ),
            created_by: None,
        },
        NewMedication {
            name: "Morphine".into(),
            classification: "Opioid Analgesic".into(),
            alert_level: AlertLevel::HighAlert,
            category: Some(Category::Analgesics),
            indications: "Moderate to severe pain, Acute myocardial infarction, Acute pulmonary \
                          edema"
                .into(),
            contraindications: "Respiratory depression, Head injury with altered LOC, \
                                Hypotension, Known allergy"
                .into(),
            adult_dosage: "2-4 mg IV q5-10min PRN pain. Max 10 mg in 1 hour. Titrate to effect."
                .into(),
            pediatric_dosage: Some("0.1 mg/kg IV q5-10min PRN. Max 0.2 mg/kg total dose".into()),
            route_of_administration: Some("IV, IO, IM".into()),
            onset_duration: Some(
                "IV: 2-5 min onset, 3-4 hr duration. IM: 15-30 min onset, 4-6 hr duration".into(),
            ),
            special_considerations: Some(
                "HIGH ALERT medication. Monitor respiratory status. Have naloxone readily \
                 available."
                    .into(),
            ),
            side_effects: Some(
                "Respiratory depression, hypotension, nausea, vomiting, constipation, sedation"
                    .into(),
            ),
            created_by: None,
        },
        NewMedication {
            name: "DimenhyDRINATE/Gravol".into(),
            classification: "Antihistamine/Antiemetic".into(),
            alert_level: AlertLevel::ElderAlert,
            category: Some(Category::Neurological),
            indications: "Nausea and vomiting, Motion sickness, Vertigo".into(),
            contraindications: "Known hypersensitivity, Narrow-angle glaucoma, Severe liver \
                                disease"
                .into(),
            adult_dosage: "25-50 mg IV/IM q4-6h PRN. Max 300 mg/24h".into(),
            pediatric_dosage: Some("1-1.25 mg/kg IV/IM q6h PRN. Max 75 mg/dose".into()),
            route_of_administration: Some("IV, IM, PO".into()),
            onset_duration: Some(
                "IV: 15-30 min onset, 4-6 hr duration. IM: 30-60 min onset".into(),
            ),
            special_considerations: Some(
                "ELDER ALERT: Increased risk of anticholinergic effects in elderly. Use lower \
                 doses and monitor closely."
                    .into(),
            ),
            side_effects: Some(
                "Drowsiness, dry mouth, blurred vision, constipation, urinary retention".into(),
            ),
            created_by: None,
        },
        NewMedication {
            name: "Salbutamol/Albuterol/Ventolin".into(),
            classification: "Beta-2 Agonist Bronchodilator".into(),
            alert_level: AlertLevel::Standard,
            category: Some(Category::Respiratory),
            indications: "Bronchospasm, Asthma, COPD exacerbation, Hyperkalemia".into(),
            contraindications: "Known hypersensitivity to salbutamol".into(),
            adult_dosage: "2.5-5 mg nebulized q20min PRN. MDI: 4-8 puffs q20min PRN".into(),
            pediatric_dosage: Some(
                "2.5 mg nebulized q20min PRN if >20kg. MDI: 4-8 puffs with spacer".into(),
            ),
            route_of_administration: Some("Inhalation (nebulizer, MDI)".into()),
            onset_duration: Some("Onset: 5-15 min, Peak: 30-60 min, Duration: 4-6 hr".into()),
            special_considerations: Some(
                "Monitor for tachycardia and tremor. Use spacer device for MDI in children."
                    .into(),
            ),
            side_effects: Some(
                "Tachycardia, tremor, nervousness, headache, muscle cramps".into(),
            ),
            created_by: None,
        },
        NewMedication {
            name: "Naloxone/Narcan".into(),
            classification: "Opioid Antagonist".into(),
            alert_level: AlertLevel::HighAlert,
            category: Some(Category::Neurological),
            indications: "Opioid overdose with respiratory depression, Coma of unknown origin"
                .into(),
            contraindications: "Known hypersensitivity to naloxone".into(),
            adult_dosage: "0.4-2 mg IV/IM/IN q2-3min. Titrate to adequate respirations. Max 10 mg"
                .into(),
            pediatric_dosage: Some("0.01 mg/kg IV/IM/IN q2-3min. Max 0.4 mg/dose".into()),
            route_of_administration: Some("IV, IM, IO, Intranasal, Endotracheal".into()),
            onset_duration: Some(
                "IV: 1-2 min onset, 30-60 min duration. IM/IN: 2-5 min onset".into(),
            ),
            special_considerations: Some(
                "HIGH ALERT: May precipitate withdrawal in opioid-dependent patients. Short \
                 duration - repeat dosing may be needed."
                    .into(),
            ),
            side_effects: Some(
                "Withdrawal symptoms, nausea, vomiting, tachycardia, hypertension".into(),
            ),
            created_by: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertLevel;

    #[test]
    fn seed_covers_every_alert_level() {
        let medications = sample_medications();
        assert_eq!(medications.len(), 5);
        for level in [
            AlertLevel::HighAlert,
            AlertLevel::ElderAlert,
            AlertLevel::Standard,
        ] {
            assert!(
                medications.iter().any(|m| m.alert_level == level),
                "missing alert level {level:?}"
            );
        }
    }
}
