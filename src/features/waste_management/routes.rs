use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::waste_management::handlers;
use crate::features::waste_management::WasteManagementRepository;

/// Create routes for the waste management feature
pub fn routes(repository: Arc<WasteManagementRepository>) -> Router {
    Router::new()
        .route(
            "/api/waste-management",
            get(handlers::list_waste_management).post(handlers::create_waste_management),
        )
        .route(
            "/api/waste-management/{id}",
            get(handlers::get_waste_management)
                .put(handlers::update_waste_management)
                .delete(handlers::delete_waste_management),
        )
        .with_state(repository)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::features::waste_management::dtos::UpdateWasteManagementDto;
    use crate::shared::test_helpers::{test_server, waste_management_payload};

    #[tokio::test]
    async fn test_update_organic_waste_leaves_other_quantities() {
        let server = test_server().await;
        for _ in 0..5 {
            server
                .post("/api/waste-management")
                .json(&waste_management_payload())
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .put("/api/waste-management/5")
            .json(&json!({ "organicWaste": 12.5 }))
            .await;
        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Waste management record updated successfully" })
        );

        let record = server.get("/api/waste-management/5").await.json::<Value>();
        assert_eq!(record["id"].as_i64(), Some(5));
        assert_eq!(record["organicWaste"].as_f64(), Some(12.5));
        assert_eq!(record["plasticWaste"].as_f64(), Some(300.0));
        assert_eq!(record["paperWaste"].as_f64(), Some(200.0));
        assert_eq!(record["metalWaste"].as_f64(), Some(100.0));

        let untouched = server.get("/api/waste-management/4").await.json::<Value>();
        assert_eq!(untouched["organicWaste"].as_f64(), Some(400.0));
    }

    #[tokio::test]
    async fn test_update_with_no_known_fields_still_acknowledges_existing_record() {
        let server = test_server().await;
        let created = server
            .post("/api/waste-management")
            .json(&waste_management_payload())
            .await
            .json::<Value>();
        let path = format!("/api/waste-management/{}", created["id"]);

        let response = server
            .put(&path)
            .json(&json!({ "id": 77, "color": "green" }))
            .await;
        response.assert_status(StatusCode::OK);

        let record = server.get(&path).await.json::<Value>();
        assert_eq!(record["id"], created["id"]);
        assert_eq!(record["organicWaste"], created["organicWaste"]);

        server
            .put("/api/waste-management/77")
            .json(&UpdateWasteManagementDto::default())
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_waste_management_missing_fields_is_bad_request() {
        let server = test_server().await;

        let response = server
            .post("/api/waste-management")
            .json(&json!({ "date": "2024-02-01", "organicWaste": 1.0 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let message = response.json::<Value>()["message"].as_str().unwrap().to_string();
        assert!(message.contains("WasteManagement.plasticWaste cannot be null"));
        assert!(message.contains("WasteManagement.metalWaste cannot be null"));
    }

    #[tokio::test]
    async fn test_delete_removes_record_from_list() {
        let server = test_server().await;
        let first = server
            .post("/api/waste-management")
            .json(&waste_management_payload())
            .await
            .json::<Value>();
        let second = server
            .post("/api/waste-management")
            .json(&waste_management_payload())
            .await
            .json::<Value>();

        server
            .delete(&format!("/api/waste-management/{}", first["id"]))
            .await
            .assert_status(StatusCode::OK);

        let listed = server.get("/api/waste-management").await.json::<Value>();
        let ids: Vec<i64> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![second["id"].as_i64().unwrap()]);

        server
            .delete(&format!("/api/waste-management/{}", first["id"]))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
