//! Prepared AEC Data Model GraphQL documents
//!
//! Reusable queries and mutations for element properties, quantities,
//! schedule (4D) and sustainability (6D) reads, and custom-property writes.
//! The documents are owned by the upstream schema; this module just keeps
//! them in one place for [`super::service::AecDataService`].

/// Properties of a single element, including custom properties.
pub const GET_ELEMENT_PROPERTIES: &str = r"
  query GetElementProperties($projectId: ID!, $elementId: ID!) {
    aecElementProperties(projectId: $projectId, elementId: $elementId) {
      id
      name
      category
      properties {
        name
        value
        displayValue
        type
        group
      }
      customProperties {
        name
        value
        type
      }
    }
  }
";

/// Elements of a model filtered by category.
pub const GET_ELEMENTS_BY_CATEGORY: &str = r"
  query GetElementsByCategory($projectId: ID!, $modelId: ID!, $category: String!) {
    aecElements(projectId: $projectId, modelId: $modelId, filter: { category: $category }) {
      results {
        id
        name
        category
        externalId
        properties {
          name
          value
        }
      }
      pagination {
        cursor
        hasMore
      }
    }
  }
";

/// Quantity take-off values used for cost (5D) calculations.
pub const GET_ELEMENT_QUANTITIES: &str = r"
  query GetElementQuantities($projectId: ID!, $elementIds: [ID!]!) {
    aecElementQuantities(projectId: $projectId, elementIds: $elementIds) {
      elementId
      quantities {
        name
        value
        unit
      }
    }
  }
";

/// Create or update a single custom property on an element.
pub const UPDATE_CUSTOM_PROPERTY: &str = r"
  mutation UpdateCustomProperty($projectId: ID!, $elementId: ID!, $propertyName: String!, $propertyValue: String!, $propertyType: String!) {
    updateAecElementProperty(
      input: {
        projectId: $projectId
        elementId: $elementId
        property: {
          name: $propertyName
          value: $propertyValue
          type: $propertyType
        }
      }
    ) {
      success
      element {
        id
        customProperties {
          name
          value
        }
      }
    }
  }
";

/// Batch write of custom properties across multiple elements.
pub const BATCH_UPDATE_PROPERTIES: &str = r"
  mutation BatchUpdateProperties($projectId: ID!, $updates: [PropertyUpdateInput!]!) {
    batchUpdateAecElementProperties(
      input: {
        projectId: $projectId
        updates: $updates
      }
    ) {
      success
      results {
        elementId
        success
        error
      }
    }
  }
";

/// Schedule-related custom properties for the 4D view.
pub const GET_SCHEDULE_PROPERTIES: &str = r"
  query GetScheduleProperties($projectId: ID!, $modelId: ID!) {
    aecElements(projectId: $projectId, modelId: $modelId) {
      results {
        id
        externalId
        customProperties {
          name
          value
        }
      }
    }
  }
";

/// Sustainability-related properties for the 6D view.
pub const GET_SUSTAINABILITY_DATA: &str = r"
  query GetSustainabilityData($projectId: ID!, $elementIds: [ID!]!) {
    aecElementProperties(projectId: $projectId, elementIds: $elementIds) {
      id
      customProperties {
        name
        value
      }
      properties {
        name
        value
        group
      }
    }
  }
";
