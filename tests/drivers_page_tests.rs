mod support;

use serde_json::json;

use fleet_admin::models::{EmploymentType, LicenseCategory};
use fleet_admin::pages::drivers_page::DRIVERS_LOAD_ERROR;
use fleet_admin::pages::DriversPage;
use fleet_admin::state::{ActionOutcome, SubmitOutcome};
use fleet_admin::views::RenderedPage;
use support::{Canned, FakeBackend};

fn jane_doe() -> serde_json::Value {
    json!({
        "id": "1",
        "fullName": "Jane Doe",
        "age": 34,
        "address": "1 Main St",
        "employmentType": "FullTime",
        "licenseCategory": "B,C",
        "isActive": true
    })
}

fn drivers_page(drivers: serde_json::Value, total_pages: u32) -> Canned {
    Canned::json(
        200,
        json!({
            "statusCode": 200,
            "data": drivers,
            "pageNumber": 1,
            "pageSize": 30,
            "totalPages": total_pages
        }),
    )
}

#[tokio::test]
async fn test_jane_doe_renders_one_card() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([jane_doe()]), 1));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    let gets = backend.requests_to("GET", "/api/drivers");
    assert_eq!(gets.len(), 1);
    assert_eq!(gets[0].query.as_deref(), Some("PageNumber=1&PageSize=30"));

    match page.render() {
        RenderedPage::Items { header, rows, warning } => {
            assert_eq!(header, "Drivers (1)");
            assert_eq!(rows.len(), 1);
            assert!(rows[0].contains("Jane Doe"));
            assert!(rows[0].contains("[B] [C]"));
            assert!(rows[0].contains("(Active)"));
            assert_eq!(warning, None);
        }
        other => panic!("unexpected page: {:?}", other),
    }
}

#[tokio::test]
async fn test_null_data_is_empty_not_error() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!(null), 1));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    assert_eq!(
        page.render(),
        RenderedPage::Empty("No drivers found.".to_string())
    );
}

#[tokio::test]
async fn test_successful_add_posts_once_then_refetches_once() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([jane_doe()]), 1));
    backend.respond("POST", "/api/drivers/add", Canned::empty(200));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    page.open_add();
    page.add_form.full_name = "  Sam Lee ".to_string();
    page.add_form.birth_date = "1990-05-01".to_string();
    page.add_form.address = "2 Side St".to_string();
    page.add_form.category = Some(LicenseCategory::C);
    page.add_form.employment_type = Some(EmploymentType::PartTime);

    let outcome = page.submit_add().await;
    assert_eq!(outcome, SubmitOutcome::Saved(None));
    assert!(!page.modal().is_open());
    assert_eq!(page.add_form.full_name, "");

    let posts = backend.requests_to("POST", "/api/drivers/add");
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].json(),
        json!({
            "fullName": "Sam Lee",
            "birthYear": "1990-05-01",
            "address": "2 Side St",
            "driverCategories": "C",
            "employmentType": "PartTime"
        })
    );
    assert_eq!(backend.requests_to("GET", "/api/drivers").len(), 2);
}

#[tokio::test]
async fn test_failed_add_keeps_modal_open_and_list_unchanged() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([jane_doe()]), 1));
    backend.respond(
        "POST",
        "/api/drivers/add",
        Canned::json(400, json!({"statusCode": 400, "message": "Driver already exists"})),
    );

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    page.open_add();
    page.add_form.full_name = "Jane Doe".to_string();
    page.add_form.birth_date = "1990-05-01".to_string();
    page.add_form.address = "1 Main St".to_string();
    page.add_form.category = Some(LicenseCategory::B);
    page.add_form.employment_type = Some(EmploymentType::FullTime);

    let outcome = page.submit_add().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Driver already exists".to_string())
    );
    assert!(page.modal().is_open());
    assert!(!page.modal().is_submitting());
    assert_eq!(page.list().len(), 1);
    assert_eq!(backend.requests_to("GET", "/api/drivers").len(), 1);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([]), 1));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;
    page.open_add();
    page.add_form.full_name = "Sam".to_string();

    assert!(matches!(page.submit_add().await, SubmitOutcome::Failed(_)));
    assert!(backend.requests_to("POST", "/api/drivers/add").is_empty());
}

#[tokio::test]
async fn test_edit_sends_integer_codes() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([jane_doe()]), 1));
    backend.respond("PUT", "/api/drivers", Canned::empty(204));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    assert!(page.open_edit("1"));
    let form = page.edit_form.as_mut().unwrap();
    assert_eq!(form.category, LicenseCategory::B);
    assert!(form.birth_date.ends_with("-01-01"));
    form.birth_date = "1991-02-03".to_string();
    form.category = LicenseCategory::D;
    form.employment_type = EmploymentType::PartTime;

    assert!(page.submit_edit().await.is_saved());
    assert!(!page.modal().is_open());

    let puts = backend.requests_to("PUT", "/api/drivers");
    assert_eq!(puts.len(), 1);
    assert_eq!(
        puts[0].json(),
        json!({
            "id": 1,
            "fullName": "Jane Doe",
            "birthYear": "1991-02-03",
            "address": "1 Main St",
            "driverCategory": 3,
            "employmentType": 1
        })
    );
}

#[tokio::test]
async fn test_confirmed_delete_removes_exactly_that_driver() {
    let backend = FakeBackend::start().await;
    backend.respond(
        "GET",
        "/api/drivers",
        drivers_page(json!([jane_doe(), {"id": 2, "fullName": "Sam Lee"}]), 1),
    );
    backend.respond("DELETE", "/api/drivers/2", Canned::empty(200));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    assert_eq!(page.delete("2", false).await, ActionOutcome::Cancelled);
    assert!(backend.requests().iter().all(|r| r.method != "DELETE"));

    assert!(matches!(page.delete("2", true).await, ActionOutcome::Done(_)));
    let deletes: Vec<_> = backend
        .requests()
        .into_iter()
        .filter(|r| r.method == "DELETE")
        .collect();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].path, "/api/drivers/2");

    let ids: Vec<_> = page.list().items().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_drivers() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([jane_doe()]), 1));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    backend.respond("GET", "/api/drivers", Canned::empty(500));
    page.refresh().await;

    match page.render() {
        RenderedPage::Items { rows, warning, .. } => {
            assert_eq!(rows.len(), 1);
            assert_eq!(warning.as_deref(), Some(DRIVERS_LOAD_ERROR));
        }
        other => panic!("unexpected page: {:?}", other),
    }
}

#[tokio::test]
async fn test_initial_failure_shows_error_view() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", Canned::empty(500));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    assert_eq!(
        page.render(),
        RenderedPage::Error {
            title: "Data Load Error".to_string(),
            message: DRIVERS_LOAD_ERROR.to_string(),
        }
    );
}

#[tokio::test]
async fn test_next_page_is_bounded_by_total_pages() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([jane_doe()]), 2));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;
    assert!(!page.prev_page().await);

    backend.respond(
        "GET",
        "/api/drivers",
        Canned::json(
            200,
            json!({"data": [], "pageNumber": 2, "pageSize": 30, "totalPages": 2}),
        ),
    );
    assert!(page.next_page().await);
    assert_eq!(page.page_request().page_number, 2);

    let gets = backend.requests_to("GET", "/api/drivers");
    assert_eq!(gets.last().unwrap().query.as_deref(), Some("PageNumber=2&PageSize=30"));
    assert!(!page.next_page().await);
}

#[tokio::test]
async fn test_failed_page_change_stays_on_loaded_page() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/drivers", drivers_page(json!([jane_doe()]), 3));

    let mut page = DriversPage::new(backend.client(), 30);
    page.refresh().await;

    backend.respond("GET", "/api/drivers", Canned::empty(500));
    assert!(page.next_page().await);
    assert_eq!(page.page_request().page_number, 1);
    assert_eq!(page.page_info().unwrap().page_number, 1);
    assert_eq!(page.list().error(), Some(DRIVERS_LOAD_ERROR));
    assert_eq!(page.list().len(), 1);

    page.refresh().await;
    let gets = backend.requests_to("GET", "/api/drivers");
    assert_eq!(gets[1].query.as_deref(), Some("PageNumber=2&PageSize=30"));
    assert_eq!(gets[2].query.as_deref(), Some("PageNumber=1&PageSize=30"));
}
