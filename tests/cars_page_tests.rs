mod support;

use serde_json::json;

use fleet_admin::models::LicenseCategory;
use fleet_admin::pages::cars_page::VEHICLES_LOAD_ERROR;
use fleet_admin::pages::CarsPage;
use fleet_admin::state::{ActionOutcome, SubmitOutcome};
use fleet_admin::views::RenderedPage;
use support::{Canned, FakeBackend};

fn fleet() -> Canned {
    Canned::json(
        200,
        json!({
            "statusCode": 200,
            "data": [
                {"id": 1, "plateNumber": "ABC-1234", "model": "Toyota Camry", "color": "Silver",
                 "requiredDriverCategory": 1},
                {"id": 5, "plateNumber": "GHI-7890", "model": null, "color": "Blue",
                 "requiredDriverCategory": 3, "vehicleTypeId": 2, "vehicleTypeName": "Van"}
            ],
            "message": null
        }),
    )
}

#[tokio::test]
async fn test_rows_follow_response_order() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;

    match page.render() {
        RenderedPage::Items { header, rows, .. } => {
            assert_eq!(header, "Cars (2)");
            assert!(rows[0].contains("ABC-1234"));
            assert!(rows[0].contains("#c0c0c0"));
            assert!(rows[1].contains("GHI-7890"));
            assert!(rows[1].contains("cat. D"));
            assert!(rows[1].contains("Van"));
        }
        other => panic!("unexpected page: {:?}", other),
    }
}

#[tokio::test]
async fn test_load_failure_is_blocking() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;
    backend.respond("GET", "/api/vehicles", Canned::empty(503));
    page.refresh().await;

    assert!(page.list().is_empty());
    assert!(matches!(
        page.render(),
        RenderedPage::Error { message, .. } if message == VEHICLES_LOAD_ERROR
    ));
}

fn vehicle_types() -> Canned {
    Canned::json(
        200,
        json!([
            {"id": 1, "name": "Sedan", "description": "Passenger car"},
            {"id": 2, "name": "Van", "description": "Cargo van"}
        ]),
    )
}

#[tokio::test]
async fn test_add_sends_category_code_and_vehicle_type() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());
    backend.respond("GET", "/api/vehicle-types", vehicle_types());
    backend.respond("POST", "/api/vehicles", Canned::empty(201));

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;

    page.open_add().await;
    assert_eq!(backend.requests_to("GET", "/api/vehicle-types").len(), 1);
    assert!(page.add_form.shows_vehicle_type());
    assert_eq!(page.add_form.vehicle_types.len(), 2);

    page.add_form.plate_number = "NEW-0001".to_string();
    page.add_form.model = "Ford Transit".to_string();
    page.add_form.color = "White".to_string();
    page.add_form.category = Some(LicenseCategory::C);
    page.add_form.vehicle_type_id = Some(2);

    assert_eq!(page.submit_add().await, SubmitOutcome::Saved(None));

    let posts = backend.requests_to("POST", "/api/vehicles");
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].json(),
        json!({
            "plateNumber": "NEW-0001",
            "model": "Ford Transit",
            "color": "White",
            "requiredDriverCategory": 2,
            "vehicleTypeId": 2
        })
    );
    assert_eq!(backend.requests_to("GET", "/api/vehicles").len(), 2);
}

#[tokio::test]
async fn test_add_without_vehicle_type_is_rejected_locally() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());
    backend.respond("GET", "/api/vehicle-types", vehicle_types());

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;

    page.open_add().await;
    page.add_form.plate_number = "NEW-0001".to_string();
    page.add_form.model = "Ford Transit".to_string();
    page.add_form.color = "White".to_string();
    page.add_form.category = Some(LicenseCategory::C);

    assert!(matches!(page.submit_add().await, SubmitOutcome::Failed(_)));
    assert!(page.modal().is_open());
    assert!(backend.requests_to("POST", "/api/vehicles").is_empty());
}

#[tokio::test]
async fn test_edit_loads_vehicle_types_and_round_trips_category() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());
    backend.respond(
        "GET",
        "/api/vehicle-types",
        Canned::json(200, json!([{"id": 2, "name": "Van", "description": "Cargo van"}])),
    );
    backend.respond("PUT", "/api/vehicles", Canned::empty(200));

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;

    assert!(page.open_edit(5).await);
    let form = page.edit_form.as_mut().unwrap();
    assert!(form.shows_vehicle_type());
    assert_eq!(form.category, LicenseCategory::D);
    form.color = "  Navy ".to_string();

    assert!(page.submit_edit().await.is_saved());

    let puts = backend.requests_to("PUT", "/api/vehicles");
    assert_eq!(puts.len(), 1);
    assert_eq!(
        puts[0].json(),
        json!({
            "id": 5,
            "plateNumber": "GHI-7890",
            "model": null,
            "color": "Navy",
            "requiredDriverCategory": 3,
            "vehicleTypeId": 2
        })
    );
}

#[tokio::test]
async fn test_edit_without_vehicle_types_endpoint() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());
    backend.respond(
        "GET",
        "/api/vehicle-types",
        Canned::bytes(200, "text/html", b"<html>not here</html>"),
    );

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;

    assert!(page.open_edit(1).await);
    assert!(!page.edit_form.as_ref().unwrap().shows_vehicle_type());
    assert!(!page.open_edit(99).await);
}

#[tokio::test]
async fn test_failed_edit_keeps_modal_open() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());
    backend.respond(
        "PUT",
        "/api/vehicles",
        Canned::json(409, json!({"message": "Plate already registered"})),
    );

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;
    assert!(page.open_edit(1).await);

    match page.submit_edit().await {
        SubmitOutcome::Failed(alert) => assert!(alert.contains("Plate already registered")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(page.modal().is_open());
    assert_eq!(page.list().len(), 2);
    assert_eq!(backend.requests_to("GET", "/api/vehicles").len(), 1);
}

#[tokio::test]
async fn test_delete_uses_id_query() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/vehicles", fleet());
    backend.respond("DELETE", "/api/vehicles", Canned::empty(200));

    let mut page = CarsPage::new(backend.client());
    page.refresh().await;

    assert!(matches!(page.delete(5, true).await, ActionOutcome::Done(_)));

    let deletes = backend.requests_to("DELETE", "/api/vehicles");
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].query.as_deref(), Some("id=5"));
    assert_eq!(page.list().len(), 1);
    assert_eq!(page.list().items()[0].id, 1);
}
