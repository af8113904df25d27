//! Integration tests for assistant validation, preview, build and deploy.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_failing_app, build_test_app, post_json};
use serde_json::json;

const BUSINESS: &str = "Premier Dental Care - cleanings and exams";

fn valid_draft() -> serde_json::Value {
    json!({
        "name": "Premier Dental",
        "templateId": "appointment-booking",
        "dynamicSegments": {"business-name-services": BUSINESS},
        "voiceSettings": {"speed": 1.2}
    })
}

#[tokio::test]
async fn test_validate_reports_problems_with_200() {
    let (app, _) = build_test_app();
    let draft = json!({
        "name": "Premier Dental",
        "templateId": "appointment-booking",
        "dynamicSegments": {"business-name-services": "", "favorite-color": "blue"}
    });

    let response = post_json(app, "/api/assistants/validate", draft).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["valid"], false);
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations[0]["segmentId"], "business-name-services");
    assert_eq!(violations[0]["rule"], "required");
    assert_eq!(violations[0]["severity"], "error");
    assert!(violations
        .iter()
        .any(|v| v["segmentId"] == "favorite-color" && v["rule"] == "unknownSegment"));
}

#[tokio::test]
async fn test_validate_accepts_valid_draft() {
    let (app, _) = build_test_app();
    let response = post_json(app, "/api/assistants/validate", valid_draft()).await;

    let json = body_json(response).await;
    assert_eq!(json["valid"], true);
}

#[tokio::test]
async fn test_preview_shows_placeholders() {
    let (app, _) = build_test_app();
    let draft = json!({"name": "Premier Dental", "templateId": "appointment-booking"});

    let response = post_json(app, "/api/assistants/preview", draft).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["templateVersion"], "2.1.0");
    assert!(json["prompt"]
        .as_str()
        .unwrap()
        .contains("[Business Name & Services]"));
}

#[tokio::test]
async fn test_build_returns_deployable_assistant() {
    let (app, deployer) = build_test_app();
    let response = post_json(app, "/api/assistants/build", valid_draft()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let prompt = json["assembledPrompt"].as_str().unwrap();
    assert!(prompt.contains(BUSINESS));
    assert!(!prompt.contains('['));
    assert_eq!(json["voiceSettings"]["speed"], 1.2);
    assert_eq!(json["voiceSettings"]["stability"], 0.8);
    assert_eq!(json["promptHash"].as_str().unwrap().len(), 64);
    assert_eq!(deployer.call_count().await, 0);
}

#[tokio::test]
async fn test_build_with_blank_required_value_returns_422() {
    let (app, _) = build_test_app();
    let draft = json!({
        "name": "Premier Dental",
        "templateId": "appointment-booking",
        "dynamicSegments": {"business-name-services": "  "}
    });

    let response = post_json(app, "/api/assistants/build", draft).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("business-name-services"));
    assert_eq!(json["violations"][0]["segmentId"], "business-name-services");
}

#[tokio::test]
async fn test_build_with_unknown_template_returns_404() {
    let (app, _) = build_test_app();
    let draft = json!({"name": "Premier Dental", "templateId": "nope"});

    let response = post_json(app, "/api/assistants/build", draft).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deploy_returns_deployed_configuration() {
    let (app, deployer) = build_test_app();
    let response = post_json(app, "/api/assistants/deploy", valid_draft()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "deployed");
    assert_eq!(json["remoteId"], "mock-asst-1");
    assert_eq!(json["phoneNumber"], "+15550100");
    assert!(json["assembledPrompt"].as_str().unwrap().contains(BUSINESS));
    assert_eq!(deployer.call_count().await, 1);
}

#[tokio::test]
async fn test_deploy_with_remote_id_updates() {
    let (app, deployer) = build_test_app();
    let mut configuration = valid_draft();
    configuration["remoteId"] = json!("asst_existing");
    configuration["status"] = json!("deployed");

    let response = post_json(app, "/api/assistants/deploy", configuration).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["remoteId"], "asst_existing");
    assert_eq!(
        deployer.calls().await[0].kind,
        mock_deployer::CallKind::Update {
            remote_id: "asst_existing".to_string()
        }
    );
}

#[tokio::test]
async fn test_deploy_failure_returns_502_with_assembled_configuration() {
    let app = build_failing_app("quota exceeded");
    let response = post_json(app, "/api/assistants/deploy", valid_draft()).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("quota exceeded"));
    assert_eq!(json["configuration"]["status"], "assembled");
    assert_eq!(json["configuration"]["lastError"], "quota exceeded");
    assert!(json["configuration"]["assembledPrompt"]
        .as_str()
        .unwrap()
        .contains(BUSINESS));
}

#[tokio::test]
async fn test_deploy_with_invalid_draft_returns_422() {
    let app = build_failing_app("should not be called");
    let draft = json!({"name": "", "templateId": "appointment-booking"});

    let response = post_json(app, "/api/assistants/deploy", draft).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let ids: Vec<_> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["segmentId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["name", "business-name-services"]);
}

#[tokio::test]
async fn test_malformed_draft_is_rejected() {
    let (app, deployer) = build_test_app();
    let response = post_json(app, "/api/assistants/deploy", json!({"templateId": 5})).await;

    assert!(response.status().is_client_error());
    assert_eq!(deployer.call_count().await, 0);
}
