//! Typed service over the AEC Data Model GraphQL API
//!
//! Unlike the raw forwarder, this service owns the request envelopes for a
//! fixed set of prepared documents and inspects the response envelope: a
//! non-empty `errors` array becomes an `AecError::Query` carrying the joined
//! messages, and only the `data` member is returned.

use std::sync::Arc;

use aecdash_domain::{AecError, Result};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

use super::graphql::GraphQlForwarder;
use super::queries;

/// A custom property value in a batch update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

/// Per-element entry in a batch property update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    pub element_id: String,
    pub properties: Vec<PropertyValue>,
}

/// High-level element-data operations for the 4D/5D/6D dashboard facets.
pub struct AecDataService {
    forwarder: Arc<GraphQlForwarder>,
}

impl AecDataService {
    /// Create a service over an existing forwarder.
    #[must_use]
    pub fn new(forwarder: Arc<GraphQlForwarder>) -> Self {
        Self { forwarder }
    }

    /// Properties of a single element.
    #[instrument(skip(self))]
    pub async fn get_element_properties(
        &self,
        project_id: &str,
        element_id: &str,
    ) -> Result<Value> {
        self.run(
            queries::GET_ELEMENT_PROPERTIES,
            json!({ "projectId": project_id, "elementId": element_id }),
        )
        .await
    }

    /// Elements of a model filtered by category.
    #[instrument(skip(self))]
    pub async fn get_elements_by_category(
        &self,
        project_id: &str,
        model_id: &str,
        category: &str,
    ) -> Result<Value> {
        self.run(
            queries::GET_ELEMENTS_BY_CATEGORY,
            json!({ "projectId": project_id, "modelId": model_id, "category": category }),
        )
        .await
    }

    /// Quantities for cost (5D) calculations.
    #[instrument(skip(self, element_ids))]
    pub async fn get_element_quantities(
        &self,
        project_id: &str,
        element_ids: &[String],
    ) -> Result<Value> {
        self.run(
            queries::GET_ELEMENT_QUANTITIES,
            json!({ "projectId": project_id, "elementIds": element_ids }),
        )
        .await
    }

    /// Create or update a custom property on an element.
    #[instrument(skip(self, property_value))]
    pub async fn update_custom_property(
        &self,
        project_id: &str,
        element_id: &str,
        property_name: &str,
        property_value: &str,
        property_type: &str,
    ) -> Result<Value> {
        self.run(
            queries::UPDATE_CUSTOM_PROPERTY,
            json!({
                "projectId": project_id,
                "elementId": element_id,
                "propertyName": property_name,
                "propertyValue": property_value,
                "propertyType": property_type,
            }),
        )
        .await
    }

    /// Batch write of custom properties across elements.
    #[instrument(skip(self, updates))]
    pub async fn batch_update_properties(
        &self,
        project_id: &str,
        updates: &[PropertyUpdate],
    ) -> Result<Value> {
        let updates = serde_json::to_value(updates)
            .map_err(|e| AecError::Internal(format!("Failed to serialize updates: {e}")))?;
        self.run(
            queries::BATCH_UPDATE_PROPERTIES,
            json!({ "projectId": project_id, "updates": updates }),
        )
        .await
    }

    /// Schedule-related properties for the 4D view.
    #[instrument(skip(self))]
    pub async fn get_schedule_properties(
        &self,
        project_id: &str,
        model_id: &str,
    ) -> Result<Value> {
        self.run(
            queries::GET_SCHEDULE_PROPERTIES,
            json!({ "projectId": project_id, "modelId": model_id }),
        )
        .await
    }

    /// Sustainability-related properties for the 6D view.
    #[instrument(skip(self, element_ids))]
    pub async fn get_sustainability_data(
        &self,
        project_id: &str,
        element_ids: &[String],
    ) -> Result<Value> {
        self.run(
            queries::GET_SUSTAINABILITY_DATA,
            json!({ "projectId": project_id, "elementIds": element_ids }),
        )
        .await
    }

    async fn run(&self, query: &str, variables: Value) -> Result<Value> {
        let envelope = self.forwarder.execute(query, variables).await?;
        unwrap_envelope(envelope)
    }
}

/// Unwrap a GraphQL response envelope into its `data` member.
fn unwrap_envelope(envelope: Value) -> Result<Value> {
    if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AecError::Query(joined));
        }
    }

    envelope
        .get("data")
        .cloned()
        .ok_or_else(|| AecError::Query("response missing data member".to_string()))
}
