//! Submission workflow tests for the authoring form

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use recipeshare_client::{ClientConfig, DraftForm, Route, StoreError, SubmitError};
use recipeshare_model::{RecipeDraft, UserId};
use recipeshare_test_utils::TestHarness;

fn fill_soup(form: &DraftForm) {
    form.edit(|draft| {
        draft.title = "Soup".to_string();
        draft.description = "Warm".to_string();
        draft.ingredients.update_at(0, String::new());
        draft.ingredients.append();
        draft.ingredients.update_at(1, "salt".to_string());
        draft.instructions.update_at(0, "Boil".to_string());
        draft.set_cooking_time(10);
        draft.set_servings(2);
    });
}

#[tokio::test]
async fn creating_a_recipe_filters_blanks_and_navigates_home() {
    let harness = TestHarness::signed_in("u1");
    let form = harness.form();
    fill_soup(&form);

    form.submit().await.expect("submit succeeds");

    let records = harness.store.records();
    assert_eq!(records.len(), 1);
    let stored = &records[0];
    assert_eq!(stored.title, "Soup");
    assert_eq!(stored.description, "Warm");
    assert_eq!(stored.ingredients, vec!["salt".to_string()]);
    assert_eq!(stored.instructions, vec!["Boil".to_string()]);
    assert_eq!(stored.cooking_time, 10);
    assert_eq!(stored.servings, 2);
    assert_eq!(stored.owner_id, UserId::from("u1"));

    assert_eq!(harness.navigator.routes(), vec![Route::Home]);
    // Draft discarded after navigation away.
    assert_eq!(form.draft(), RecipeDraft::new());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn submit_without_identity_surfaces_auth_required() {
    let harness = TestHarness::signed_out();
    let form = harness.form();
    fill_soup(&form);
    let before = form.draft();

    let err = form.submit().await.expect_err("submit must fail");
    assert!(matches!(err, SubmitError::AuthRequired));
    assert!(!err.is_retryable());

    assert_eq!(harness.store.insert_calls(), 0);
    assert_eq!(form.draft(), before);
    assert!(harness.navigator.routes().is_empty());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn identity_outage_reads_as_signed_out() {
    let harness = TestHarness::signed_in("u1");
    harness.provider.fail_current_identity(true);
    let form = harness.form();
    fill_soup(&form);

    let err = form.submit().await.expect_err("submit must fail");
    assert!(matches!(err, SubmitError::AuthRequired));
    assert_eq!(harness.store.insert_calls(), 0);
}

#[tokio::test]
async fn concurrent_second_submit_never_reaches_the_store() {
    let harness = TestHarness::signed_in("u1");
    harness.store.hold_inserts();
    let form = harness.form();
    fill_soup(&form);

    let first = form.submit();
    let second = async {
        // Let the first submission reach the held insert.
        tokio::task::yield_now().await;
        let result = form.submit().await;
        harness.store.release_inserts(1);
        result
    };

    let (first, second) = tokio::join!(first, second);
    assert!(first.is_ok());
    assert!(matches!(second, Err(SubmitError::InFlight)));
    assert_eq!(harness.store.insert_calls(), 1);
    assert_eq!(harness.store.records().len(), 1);
}

#[tokio::test]
async fn rejected_insert_retains_draft_for_retry() {
    let harness = TestHarness::signed_in("u1");
    harness.store.fail_next_insert();
    let form = harness.form();
    fill_soup(&form);
    let before = form.draft();

    let err = form.submit().await.expect_err("first attempt rejected");
    assert!(matches!(err, SubmitError::Store(StoreError::Write(_))));
    assert!(err.is_retryable());
    assert_eq!(form.draft(), before);
    assert!(harness.navigator.routes().is_empty());
    assert!(!form.is_submitting());

    // Same draft, second attempt: the write goes through.
    form.submit().await.expect("retry succeeds");
    assert_eq!(harness.store.insert_calls(), 2);
    assert_eq!(harness.navigator.routes(), vec![Route::Home]);
}

#[tokio::test]
async fn unbounded_submit_waits_while_insert_hangs() {
    let harness = TestHarness::signed_in("u1");
    harness.store.hold_inserts();
    let form = Arc::new(harness.form());
    fill_soup(&form);

    let task = tokio::spawn({
        let form = Arc::clone(&form);
        async move { form.submit().await }
    });
    tokio::task::yield_now().await;
    assert!(form.is_submitting());

    harness.store.release_inserts(1);
    task.await.expect("task joins").expect("submit succeeds");
    assert!(!form.is_submitting());
}

#[tokio::test(start_paused = true)]
async fn configured_submit_timeout_bounds_a_hung_insert() {
    let harness = TestHarness::signed_in("u1");
    // Never released: the insert hangs until the configured bound fires.
    harness.store.hold_inserts();
    let form = DraftForm::with_config(
        harness.session.clone(),
        harness.store.clone(),
        harness.navigator.clone(),
        ClientConfig::new().with_submit_timeout(Duration::from_millis(50)),
    );
    fill_soup(&form);

    let err = form.submit().await.expect_err("insert must time out");
    assert!(matches!(err, SubmitError::Store(StoreError::Unavailable(_))));
    assert!(!form.is_submitting());
    assert!(harness.navigator.routes().is_empty());
}
