//! List session integration tests.
//!
//! These complement the unit tests in `src/session/model.rs` by driving
//! the async `ListSession` end to end against a scripted gateway: load,
//! debounced search, modal flows, and delete confirmation, with the call
//! log asserting exactly which network traffic each flow produces.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::mock_data::{mock_category, mock_products, ProductBuilder};
use common::mock_gateway::{GatewayCall, MockGateway};
use stockroom::catalog::{Category, CategoryDraft, Product, ProductDraft};
use stockroom::error::StockroomError;
use stockroom::session::{ListSession, ModalMode, ModalState, SessionStatus};

const QUIET: Duration = Duration::from_millis(10);

fn product_session(
    products: Vec<Product>,
) -> (Arc<MockGateway<Product>>, ListSession<Product, MockGateway<Product>>) {
    let gateway = Arc::new(MockGateway::new());
    gateway.set_collection(products);
    let session = ListSession::new(Arc::clone(&gateway), QUIET);
    (gateway, session)
}

fn full_draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: "19.99".to_string(),
        description: "desc".to_string(),
        category: "c1".to_string(),
        stock: "3".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_mount_loads_collection() {
    let (gateway, mut session) =
        product_session(mock_products(&[("1", "Shoe"), ("2", "Shirt")]));

    assert_eq!(session.state().status, SessionStatus::Idle);
    session.mount().await;

    assert_eq!(session.state().status, SessionStatus::Ready);
    assert_eq!(session.state().collection.len(), 2);
    assert_eq!(session.state().filtered.len(), 2);
    assert_eq!(gateway.list_calls(), 1);
}

#[tokio::test]
async fn test_search_narrows_after_settle() {
    let (_gateway, mut session) =
        product_session(mock_products(&[("1", "Shoe"), ("2", "Shirt"), ("3", "Hat")]));
    session.mount().await;

    for keystroke in ["s", "sh", "sho"] {
        session.query_changed(keystroke);
    }
    // Filtered view unchanged until the quiet period elapses.
    assert_eq!(session.state().filtered.len(), 3);

    session.wait_settled().await;
    assert_eq!(session.state().settled_query, "sho");
    assert_eq!(session.state().filtered.len(), 1);
    assert_eq!(session.state().filtered[0].name, "Shoe");
}

#[tokio::test]
async fn test_keystrokes_never_refetch() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;

    session.query_changed("s");
    session.query_changed("sh");
    session.query_changed("shoe");
    session.wait_settled().await;

    assert_eq!(gateway.list_calls(), 1);
}

#[tokio::test]
async fn test_clearing_query_restores_full_view() {
    let (_gateway, mut session) =
        product_session(mock_products(&[("1", "Shoe"), ("2", "Shirt")]));
    session.mount().await;

    session.query_changed("shoe");
    session.wait_settled().await;
    assert_eq!(session.state().filtered.len(), 1);

    session.query_changed("");
    session.wait_settled().await;
    assert_eq!(session.state().filtered.len(), 2);
}

#[tokio::test]
async fn test_cancelled_modal_still_reloads_once() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;
    assert_eq!(gateway.list_calls(), 1);

    session.open_create();
    assert_eq!(session.state().modal, ModalState::OpenForCreate);
    assert!(session.modal().is_some());

    session.cancel_modal().await;
    assert_eq!(session.state().modal, ModalState::Closed);
    assert!(session.modal().is_none());
    assert_eq!(gateway.list_calls(), 2);
}

#[tokio::test]
async fn test_successful_create_closes_modal_and_reloads() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;

    session.open_create();
    session
        .modal_mut()
        .unwrap()
        .set_draft(full_draft("Sandal"));
    session.submit_modal().await;

    assert!(session.modal().is_none());
    assert_eq!(session.state().modal, ModalState::Closed);
    assert_eq!(gateway.list_calls(), 2);
    assert!(gateway.calls().contains(&GatewayCall::Create));
    // The submitted payload carried the draft fields.
    let payloads = gateway.payloads();
    assert_eq!(payloads.len(), 1);
    assert!(payloads[0].get("name").is_some());
}

#[tokio::test]
async fn test_missing_required_field_fails_locally() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;

    session.open_create();
    session.submit_modal().await;

    let modal = session.modal().expect("modal stays open");
    assert_eq!(modal.error(), Some("name is required"));
    // No network traffic for a locally rejected draft, and no reload.
    assert!(!gateway.calls().contains(&GatewayCall::Create));
    assert_eq!(gateway.list_calls(), 1);
}

#[tokio::test]
async fn test_backend_validation_failure_keeps_draft() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;

    gateway.stage_create(Err(StockroomError::Validation(
        "price must be a positive number".to_string(),
    )));

    session.open_create();
    session
        .modal_mut()
        .unwrap()
        .set_draft(full_draft("Sandal"));
    session.submit_modal().await;

    let modal = session.modal().expect("modal stays open");
    assert_eq!(modal.error(), Some("price must be a positive number"));
    assert_eq!(modal.draft().name, "Sandal");
    assert_eq!(gateway.list_calls(), 1);
}

#[tokio::test]
async fn test_delete_without_confirmation_never_removes() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;

    session.request_delete("1");
    assert_eq!(session.state().pending_delete.as_deref(), Some("1"));

    session.cancel_delete();
    assert!(session.state().pending_delete.is_none());

    // Confirming with nothing staged is a no-op too.
    session.confirm_delete().await;
    assert_eq!(gateway.remove_calls(), 0);
    assert_eq!(gateway.list_calls(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_removes_and_reloads() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;

    session.request_delete("1");
    session.confirm_delete().await;

    assert!(gateway.calls().contains(&GatewayCall::Remove("1".to_string())));
    assert_eq!(gateway.list_calls(), 2);
    assert!(session.state().pending_delete.is_none());
}

#[tokio::test]
async fn test_failed_delete_shows_error_without_reload() {
    let (gateway, mut session) =
        product_session(mock_products(&[("1", "Shoe"), ("2", "Shirt")]));
    session.mount().await;

    gateway.stage_remove(Err(StockroomError::Server {
        status: 500,
        body: String::new(),
    }));

    session.request_delete("1");
    session.confirm_delete().await;

    assert_eq!(session.state().error.as_deref(), Some("HTTP 500"));
    assert_eq!(session.state().collection.len(), 2);
    assert_eq!(gateway.list_calls(), 1);
}

#[tokio::test]
async fn test_edit_prefills_draft_from_fetch() {
    let (gateway, mut session) = product_session(mock_products(&[("1", "Shoe")]));
    session.mount().await;

    gateway.stage_get(Ok(ProductBuilder::new("1", "Shoe")
        .price(25.0)
        .category("c1", "Footwear")
        .stock(7)
        .build()));

    session.open_edit("1").await;

    let modal = session.modal().expect("modal open");
    assert_eq!(modal.mode(), &ModalMode::Edit("1".to_string()));
    assert!(modal.error().is_none());
    assert_eq!(modal.draft().name, "Shoe");
    assert_eq!(modal.draft().price, "25");
    assert_eq!(modal.draft().category, "c1");
    assert_eq!(session.state().modal, ModalState::OpenForEdit("1".to_string()));
}

#[tokio::test]
async fn test_edit_opens_despite_prefetch_failure_and_updates_by_id() {
    let (gateway, mut session) = product_session(mock_products(&[("7", "Shoe")]));
    session.mount().await;

    gateway.stage_get(Err(StockroomError::NotFound("7".to_string())));
    session.open_edit("7").await;

    let modal = session.modal().expect("modal opens regardless");
    assert!(modal.error().is_some());
    assert!(modal.draft().name.is_empty());

    // Submitting still routes to the bound id.
    session.modal_mut().unwrap().set_draft(full_draft("Shoe v2"));
    session.submit_modal().await;

    assert!(gateway.calls().contains(&GatewayCall::Update("7".to_string())));
    assert!(session.modal().is_none());
    assert_eq!(gateway.list_calls(), 2);
}

#[tokio::test]
async fn test_failed_reload_keeps_stale_snapshot() {
    let (gateway, mut session) =
        product_session(mock_products(&[("1", "Shoe"), ("2", "Shirt")]));
    session.mount().await;
    assert_eq!(session.state().collection.len(), 2);

    gateway.stage_list(Err(StockroomError::Server {
        status: 502,
        body: String::new(),
    }));
    session.open_create();
    session.cancel_modal().await;

    assert_eq!(session.state().status, SessionStatus::Error);
    assert_eq!(session.state().error.as_deref(), Some("HTTP 502"));
    assert_eq!(session.state().collection.len(), 2);
    assert_eq!(session.state().filtered.len(), 2);
}

#[tokio::test]
async fn test_empty_collection_shows_empty_view() {
    let (_gateway, mut session) = product_session(Vec::new());
    session.mount().await;

    assert_eq!(session.state().status, SessionStatus::Ready);
    assert!(session.state().is_empty_view());
}

#[tokio::test]
async fn test_category_session_runs_same_flows() {
    let gateway: Arc<MockGateway<Category>> = Arc::new(MockGateway::new());
    gateway.set_collection(vec![
        mock_category("c1", "Footwear"),
        mock_category("c2", "Headwear"),
    ]);
    let mut session = ListSession::new(Arc::clone(&gateway), QUIET);

    session.mount().await;
    session.query_changed("foot");
    session.wait_settled().await;
    assert_eq!(session.state().filtered.len(), 1);
    assert_eq!(session.state().filtered[0].name, "Footwear");

    session.open_create();
    session.modal_mut().unwrap().set_draft(CategoryDraft {
        name: "Outerwear".to_string(),
        description: "Coats and jackets".to_string(),
    });
    session.submit_modal().await;

    assert!(session.modal().is_none());
    assert!(gateway.calls().contains(&GatewayCall::Create));
    assert_eq!(gateway.list_calls(), 2);
}
