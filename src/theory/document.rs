//! The MTTS v5 theory document schema.
//!
//! Every block is deserialized with defaults so a partially filled document
//! still renders; the panel shows empty sections rather than refusing the
//! whole file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TheoryDocument {
    pub id_and_class: IdAndClass,
    pub conceptual_ground: ConceptualGround,
    pub mechanism_and_dynamics: MechanismAndDynamics,
    pub empirics_and_critiques: EmpiricsAndCritiques,
    pub implications: Implications,
    pub relations_and_sources: RelationsAndSources,
}

impl TheoryDocument {
    /// The headline the detail panel shows for this document.
    pub fn panel_title(&self) -> &str {
        &self.id_and_class.theory_title
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdAndClass {
    pub theory_title: String,
    pub summary: String,
    pub associated_thinkers: Vec<String>,
    pub category: String,
    pub subcategory: String,
    pub core_identity_tagline: String,
    pub classification_tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptualGround {
    pub explanatory_identity_claim: String,
    pub ontological_status: String,
    pub mind_body_relationship: String,
    pub primitive_or_emergent_status: String,
    pub emergence_type: String,
    pub subjectivity_and_intentionality: String,
    pub qualia_account: String,
    pub ontological_commitments: String,
    pub epistemic_access: String,
    pub constituents_and_structure: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechanismAndDynamics {
    pub scope_of_consciousness: String,
    pub distinctive_mechanism_or_principle: String,
    pub dynamics_of_emergence: String,
    pub location_and_distribution: String,
    pub causation_and_functional_role: String,
    pub integration_or_binding: String,
    pub information_flow_or_representation: String,
    pub evolutionary_account: String,
    pub core_claims_and_evidence: Vec<String>,
    pub basis_of_belief_or_evidence_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmpiricsAndCritiques {
    pub testability_status: String,
    pub known_empirical_interventions_or_tests: String,
    pub criticisms_and_tensions: String,
    pub open_questions_and_limitations: String,
    pub ontological_coherence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplicationStance {
    pub stance: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Implications {
    #[serde(rename = "AI_consciousness")]
    pub ai_consciousness: ImplicationStance,
    pub survival_beyond_death: ImplicationStance,
    pub meaning_and_purpose: ImplicationStance,
    pub virtual_immortality: ImplicationStance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedTheory {
    pub name: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceReference {
    pub title_with_names: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationsAndSources {
    pub related_theories: Vec<RelatedTheory>,
    pub sources_and_references: Vec<SourceReference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const IIT_JSON: &str = r#"{
        "id_and_class": {
            "theory_title": "Integrated Information Theory (IIT)",
            "summary": "Consciousness is identical to integrated information.",
            "associated_thinkers": ["Giulio Tononi", "Christof Koch"],
            "category": "materialism",
            "subcategory": "computational",
            "core_identity_tagline": "Experience is integrated information.",
            "classification_tags": ["information", "phi"]
        },
        "conceptual_ground": {
            "explanatory_identity_claim": "Phi measures consciousness.",
            "ontological_status": "Intrinsic, fundamental"
        },
        "mechanism_and_dynamics": {
            "core_claims_and_evidence": ["Axioms to postulates"]
        },
        "implications": {
            "AI_consciousness": {
                "stance": "Feed-forward systems are not conscious",
                "rationale": "Zero phi"
            }
        },
        "relations_and_sources": {
            "related_theories": [
                { "name": "Global Workspace Theory", "relationship": "rival" }
            ],
            "sources_and_references": [
                { "title_with_names": "Tononi, An information integration theory", "year": 2004 }
            ]
        }
    }"#;

    #[test]
    fn test_deserialize_full_document() {
        let doc: TheoryDocument = serde_json::from_str(IIT_JSON).unwrap();
        assert_eq!(doc.panel_title(), "Integrated Information Theory (IIT)");
        assert_eq!(doc.id_and_class.associated_thinkers.len(), 2);
        assert_eq!(doc.implications.ai_consciousness.rationale, "Zero phi");
        assert_eq!(doc.relations_and_sources.sources_and_references[0].year, Some(2004));
        // Blocks absent from the JSON default to empty rather than failing.
        assert!(doc.empirics_and_critiques.testability_status.is_empty());
    }

    #[test]
    fn test_deserialize_tolerates_missing_year() {
        let json = r#"{"relations_and_sources":{"sources_and_references":[{"title_with_names":"x"}]}}"#;
        let doc: TheoryDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.relations_and_sources.sources_and_references[0].year, None);
    }
}
