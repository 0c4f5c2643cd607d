//! `zammad_organization` resource

use serde::{Deserialize, Serialize};

use crate::zammad::Organization;

use super::plan::{reconcile_optional_text, resolve_default};
use super::resource::{Resource, ResourceModel, RestResource};
use super::schema::{Attribute, AttributeType, PlanModifier, Schema};
use super::value::Value;

/// Organization record as held in plan and state
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OrganizationModel {
    #[serde(default)]
    pub id: Value<String>,
    #[serde(default)]
    pub name: Value<String>,
    #[serde(default)]
    pub note: Value<String>,
    #[serde(default)]
    pub shared: Value<bool>,
    #[serde(default)]
    pub domain: Value<String>,
    #[serde(default)]
    pub domain_assignment: Value<bool>,
    #[serde(default)]
    pub member_ids: Value<Vec<i64>>,
    #[serde(default)]
    pub active: Value<bool>,
    #[serde(default)]
    pub created_by_id: Value<i64>,
    #[serde(default)]
    pub updated_by_id: Value<i64>,
    #[serde(default)]
    pub created_at: Value<String>,
    #[serde(default)]
    pub updated_at: Value<String>,
}

impl ResourceModel for OrganizationModel {
    type Wire = Organization;

    const TYPE_SUFFIX: &'static str = "_organization";

    fn schema() -> Schema {
        Schema::new()
            .with_attribute(
                "id",
                Attribute::computed(AttributeType::String)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute("name", Attribute::required(AttributeType::String))
            .with_attribute(
                "shared",
                Attribute::optional_computed(AttributeType::Bool)
                    .description("Customers in the organization can see each other's items.")
                    .plan_modifier(PlanModifier::DefaultTrue)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute(
                "member_ids",
                Attribute::optional_computed(AttributeType::ListInt64),
            )
            .with_attribute("domain", Attribute::optional_computed(AttributeType::String))
            .with_attribute(
                "domain_assignment",
                Attribute::optional_computed(AttributeType::Bool)
                    .description("Assign users based on user domain."),
            )
            .with_attribute(
                "active",
                Attribute::optional_computed(AttributeType::Bool)
                    .plan_modifier(PlanModifier::DefaultTrue)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute("note", Attribute::optional(AttributeType::String))
            .with_attribute(
                "created_by_id",
                Attribute::computed(AttributeType::Int64)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute("updated_by_id", Attribute::computed(AttributeType::Int64))
            .with_attribute(
                "created_at",
                Attribute::computed(AttributeType::String)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute("updated_at", Attribute::computed(AttributeType::String))
    }

    fn id(&self) -> &Value<String> {
        &self.id
    }

    fn to_wire(&self, id: i64) -> Organization {
        Organization {
            id,
            name: self.name.value_or_default(),
            note: self.note.value_or_default(),
            shared: resolve_default(self.shared.known().copied()),
            domain: self.domain.value_or_default(),
            domain_assignment: self.domain_assignment.value_or_default(),
            active: resolve_default(self.active.known().copied()),
            member_ids: self.member_ids.known().cloned(),
            ..Default::default()
        }
    }

    fn from_wire(org: Organization, input: &Self) -> Self {
        Self {
            id: Value::Known(org.id.to_string()),
            note: reconcile_optional_text(&input.note, &org.note),
            name: Value::Known(org.name),
            shared: Value::Known(org.shared),
            domain: Value::Known(org.domain),
            domain_assignment: Value::Known(org.domain_assignment),
            member_ids: Value::Known(org.member_ids.unwrap_or_default()),
            active: Value::Known(org.active),
            created_by_id: Value::Known(org.created_by_id),
            updated_by_id: Value::Known(org.updated_by_id),
            created_at: Value::Known(org.created_at),
            updated_at: Value::Known(org.updated_at),
        }
    }
}

/// Adapter managing Zammad organizations
pub type OrganizationResource = RestResource<OrganizationModel>;

/// Factory registered with the provider
pub fn new_organization_resource() -> Box<dyn Resource> {
    Box::new(OrganizationResource::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::value::is_unknown_json;
    use crate::zammad::ZammadClient;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_org(id: i64, name: &str, note: serde_json::Value) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "note": note,
            "shared": true,
            "domain": "",
            "domain_assignment": false,
            "active": true,
            "member_ids": [],
            "created_at": "2024-05-01T08:00:00.000Z",
            "updated_at": "2024-05-01T08:00:00.000Z",
            "created_by_id": 3,
            "updated_by_id": 3
        })
    }

    fn configured(server: &MockServer) -> OrganizationResource {
        let mut resource = OrganizationResource::new();
        resource.configure(Some(Arc::new(ZammadClient::test_client(&server.uri()))));
        resource
    }

    fn planned(name: &str) -> serde_json::Value {
        json!({
            "id": {"$unknown": true},
            "name": name,
            "note": null,
            "shared": true,
            "domain": {"$unknown": true},
            "domain_assignment": {"$unknown": true},
            "member_ids": {"$unknown": true},
            "active": true,
            "created_by_id": {"$unknown": true},
            "updated_by_id": {"$unknown": true},
            "created_at": {"$unknown": true},
            "updated_at": {"$unknown": true}
        })
    }

    #[test]
    fn test_type_name() {
        let resource = OrganizationResource::new();
        assert_eq!(resource.type_name("zammad"), "zammad_organization");
    }

    #[test]
    fn test_schema_flags() {
        let schema = OrganizationModel::schema();
        assert!(schema.attribute("name").unwrap().required);
        assert!(schema.attribute("note").unwrap().optional);
        assert!(!schema.attribute("note").unwrap().computed);
        assert_eq!(
            schema.attribute("shared").unwrap().plan_modifiers,
            vec![PlanModifier::DefaultTrue, PlanModifier::UseStateForUnknown]
        );
        assert!(schema.attribute("updated_at").unwrap().plan_modifiers.is_empty());
        assert_eq!(schema.attributes.len(), 12);
    }

    #[test]
    fn test_to_wire_defaults_unset_bools_to_true() {
        let model = OrganizationModel {
            name: "one".into(),
            ..Default::default()
        };
        let wire = model.to_wire(0);
        assert!(wire.active);
        assert!(wire.shared);
        assert!(!wire.domain_assignment);
        assert_eq!(wire.id, 0);
    }

    #[tokio::test]
    async fn test_create_reconciles_unset_note() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("POST"))
            .and(path("/api/v1/organizations"))
            .and(body_json(json!({
                "name": "one",
                "note": "",
                "shared": true,
                "domain": "",
                "domain_assignment": false,
                "active": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(server_org(5, "one", json!(""))))
            .mount(&mock_server)
            .await;

        let response = resource.create(&planned("one")).await;
        assert!(!response.diagnostics.has_error());

        let state = response.state.unwrap();
        assert_eq!(state["id"], "5");
        assert_eq!(state["name"], "one");
        assert_eq!(state["active"], true);
        assert_eq!(state["shared"], true);
        assert!(state["note"].is_null());
        assert_eq!(state["member_ids"], json!([]));
        assert!(!is_unknown_json(&state["created_at"]));
    }

    #[tokio::test]
    async fn test_create_failure_has_no_state() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("POST"))
            .and(path("/api/v1/organizations"))
            .respond_with(ResponseTemplate::new(422).set_body_string("name taken"))
            .mount(&mock_server)
            .await;

        let response = resource.create(&planned("one")).await;
        assert!(response.state.is_none());
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Error creating organization");
        assert!(diag.detail.contains("name taken"));
        assert!(diag.detail.contains("422"));
    }

    #[tokio::test]
    async fn test_read_keeps_populated_note() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("GET"))
            .and(path("/api/v1/organizations/5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(server_org(5, "renamed", json!("edited"))),
            )
            .mount(&mock_server)
            .await;

        let prior = json!({"id": "5", "name": "one", "note": null});
        let response = resource.read(&prior).await;
        let state = response.state.unwrap();
        assert_eq!(state["name"], "renamed");
        assert_eq!(state["note"], "edited");
    }

    #[tokio::test]
    async fn test_read_malformed_id_sends_no_request() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let prior = json!({"id": "not-a-number", "name": "one"});
        let response = resource.read(&prior).await;

        assert_eq!(response.state, Some(prior));
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Error reading ID");
        assert!(diag.detail.contains("not-a-number"));
    }

    #[tokio::test]
    async fn test_read_not_found_is_error() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("GET"))
            .and(path("/api/v1/organizations/5"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let prior = json!({"id": "5", "name": "one"});
        let response = resource.read(&prior).await;
        assert!(response.diagnostics.has_error());
        assert_eq!(response.state, Some(prior));
    }

    #[tokio::test]
    async fn test_update_sends_id_and_all_mutable_fields() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        let mut updated = server_org(5, "one", json!("One Priority"));
        updated["active"] = json!(false);
        updated["shared"] = json!(false);
        updated["domain"] = json!("example.com");
        updated["domain_assignment"] = json!(true);
        updated["updated_at"] = json!("2024-05-02T08:00:00.000Z");

        Mock::given(method("PUT"))
            .and(path("/api/v1/organizations/5"))
            .and(body_json(json!({
                "id": 5,
                "name": "one",
                "note": "One Priority",
                "shared": false,
                "domain": "example.com",
                "domain_assignment": true,
                "active": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated))
            .mount(&mock_server)
            .await;

        let state = json!({
            "id": "5",
            "name": "one",
            "note": null,
            "active": true,
            "shared": true,
            "created_at": "2024-05-01T08:00:00.000Z",
            "created_by_id": 3
        });
        let plan = json!({
            "id": "5",
            "name": "one",
            "note": "One Priority",
            "active": false,
            "shared": false,
            "domain": "example.com",
            "domain_assignment": true,
            "member_ids": {"$unknown": true},
            "created_at": "2024-05-01T08:00:00.000Z",
            "created_by_id": 3,
            "updated_at": {"$unknown": true}
        });

        let response = resource.update(&plan, &state).await;
        assert!(response.diagnostics.is_empty());

        let new_state = response.state.unwrap();
        assert_eq!(new_state["id"], "5");
        assert_eq!(new_state["note"], "One Priority");
        assert_eq!(new_state["active"], false);
        assert_eq!(new_state["shared"], false);
        assert_eq!(new_state["domain"], "example.com");
        assert_eq!(new_state["domain_assignment"], true);
        assert_eq!(new_state["created_at"], "2024-05-01T08:00:00.000Z");
        assert_eq!(new_state["created_by_id"], 3);
        assert_eq!(new_state["updated_at"], "2024-05-02T08:00:00.000Z");
    }

    #[tokio::test]
    async fn test_update_sends_explicit_empty_member_ids() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("PUT"))
            .and(path("/api/v1/organizations/5"))
            .and(body_json(json!({
                "id": 5,
                "name": "one",
                "note": "",
                "shared": true,
                "domain": "",
                "domain_assignment": false,
                "active": true,
                "member_ids": []
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(server_org(5, "one", json!(null))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = json!({"id": "5", "name": "one", "member_ids": [7, 8]});
        let mut plan = planned("one");
        plan["id"] = json!("5");
        plan["domain"] = json!("");
        plan["domain_assignment"] = json!(false);
        plan["member_ids"] = json!([]);

        let response = resource.update(&plan, &state).await;
        assert!(response.diagnostics.is_empty());
        assert_eq!(response.state.unwrap()["member_ids"], json!([]));
    }

    #[test]
    fn test_to_wire_member_ids_only_when_known() {
        let model = OrganizationModel {
            name: Value::from("one"),
            member_ids: Value::Known(Vec::new()),
            ..Default::default()
        };
        let body = serde_json::to_value(model.to_wire(5)).unwrap();
        assert_eq!(body["member_ids"], json!([]));

        let model = OrganizationModel {
            member_ids: Value::Unknown,
            ..model
        };
        let body = serde_json::to_value(model.to_wire(5)).unwrap();
        assert!(body.get("member_ids").is_none());
    }

    #[tokio::test]
    async fn test_delete_success_removes_state() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("DELETE"))
            .and(path("/api/v1/organizations/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = resource.delete(&json!({"id": "5", "name": "one"})).await;
        assert!(response.diagnostics.is_empty());
        assert!(response.state.is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_retains_state() {
        let mock_server = MockServer::start().await;
        let resource = configured(&mock_server);

        Mock::given(method("DELETE"))
            .and(path("/api/v1/organizations/5"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let prior = json!({"id": "5", "name": "one"});
        let response = resource.delete(&prior).await;
        assert_eq!(response.state, Some(prior));
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Error deleting organization"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_resource_reports_error() {
        let resource = OrganizationResource::new();
        let response = resource.create(&planned("one")).await;
        assert!(response.state.is_none());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Unconfigured client"
        );
    }

    #[test]
    fn test_import_state_passes_id_through() {
        let resource = OrganizationResource::new();
        let response = resource.import_state("17");
        let state = response.state.unwrap();
        assert_eq!(state["id"], "17");
        assert!(state["name"].is_null());
        assert!(state["note"].is_null());
        assert_eq!(state.as_object().unwrap().len(), 12);
    }
}
