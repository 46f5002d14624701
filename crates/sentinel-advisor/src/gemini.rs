//! Request and response wire format for the Gemini generateContent API.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use sentinel_core::snapshot::TeamSnapshot;

/// Body of a generateContent call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

impl GenerateContentRequest {
    /// Build the tactical-analysis request for one squad snapshot.
    pub fn tactical(snapshot: &TeamSnapshot) -> Result<Self, serde_json::Error> {
        Ok(Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(snapshot)?,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: assessment_schema(),
            },
        })
    }
}

/// Instruction prompt with the serialized snapshot embedded.
pub fn build_prompt(snapshot: &TeamSnapshot) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string(snapshot)?;
    Ok(format!(
        "You are an AI advisor for an NDRF (National Disaster Response Force) operation.\n\
         Analyze the following telemetry data from a rescue team inside a hazardous building.\n\
         \n\
         Data: {data}\n\
         \n\
         Provide a tactical assessment.\n\
         - Identify specific members at risk.\n\
         - Suggest immediate commands for the supervisor (e.g., \"Order Retreat\", \"Ventilate Area\", \"Rest\").\n\
         - Determine overall mission risk."
    ))
}

/// Response shape constraint: all three fields required, risk level from
/// the fixed set.
pub fn assessment_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "immediateActions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "riskLevel": {
                "type": "STRING",
                "enum": ["LOW", "MODERATE", "HIGH", "EXTREME"]
            }
        },
        "required": ["summary", "immediateActions", "riskLevel"]
    })
}

/// Reply envelope. Only the first candidate's first text part matters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// The model's reply text, if any candidate carried one.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use sentinel_core::prelude::{MemberStatus, TeamEngine};
    use sentinel_core::snapshot::MemberSnapshot;

    fn one_member_snapshot() -> TeamSnapshot {
        TeamSnapshot {
            members: vec![MemberSnapshot {
                name: "Junaith".to_string(),
                role: "Hazmat Spec".to_string(),
                hr: 120,
                spo2: 91,
                fatigue: 55,
                co_gas: 80,
                env_temp: 41,
                status: MemberStatus::Caution,
            }],
        }
    }

    #[test]
    fn test_prompt_embeds_snapshot_and_instructions() {
        let prompt = build_prompt(&one_member_snapshot()).unwrap();
        assert!(prompt.contains("NDRF (National Disaster Response Force)"));
        assert!(prompt.contains("\"name\":\"Junaith\""));
        assert!(prompt.contains("\"co_gas\":80"));
        assert!(prompt.contains("\"status\":\"CAUTION\""));
        assert!(prompt.contains("Determine overall mission risk."));
    }

    #[test]
    fn test_prompt_names_the_default_squad() {
        let engine = TeamEngine::new(Local::now());
        let prompt = build_prompt(&engine.snapshot()).unwrap();
        for member in engine.members() {
            assert!(
                prompt.contains(&format!("\"name\":\"{}\"", member.name)),
                "prompt should name {}",
                member.name
            );
        }
    }

    #[test]
    fn test_request_carries_schema_constraint() {
        let request = GenerateContentRequest::tactical(&one_member_snapshot()).unwrap();
        assert_eq!(
            request.generation_config.response_mime_type,
            "application/json"
        );
        let schema = &request.generation_config.response_schema;
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(
            schema["required"],
            json!(["summary", "immediateActions", "riskLevel"])
        );
        assert_eq!(
            schema["properties"]["riskLevel"]["enum"],
            json!(["LOW", "MODERATE", "HIGH", "EXTREME"])
        );
    }

    #[test]
    fn test_first_text_walks_the_envelope() {
        let reply: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "{\"ok\":true}" } ] } }
            ]
        }))
        .unwrap();
        assert_eq!(reply.first_text(), Some("{\"ok\":true}"));
    }

    #[test]
    fn test_first_text_handles_empty_envelopes() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_text(), None);

        let no_parts: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [ { "content": { "parts": [] } } ]
        }))
        .unwrap();
        assert_eq!(no_parts.first_text(), None);

        let no_content: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [ {} ]
        }))
        .unwrap();
        assert_eq!(no_content.first_text(), None);
    }
}
