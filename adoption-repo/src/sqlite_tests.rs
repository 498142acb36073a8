//! SqliteRepo adapter tests against an in-memory database.

use adoption_types::{
    AdoptionRepository, Category, CategoryId, Payment, PaymentDetail, PaymentId, RepoError,
};

use crate::sqlite::SqliteRepo;

async fn repo() -> SqliteRepo {
    SqliteRepo::new("sqlite::memory:").await.unwrap()
}

fn category(id: &str, name: &str) -> Category {
    Category::new(CategoryId::parse(id).unwrap(), name.into(), Default::default()).unwrap()
}

#[tokio::test]
async fn test_category_document_round_trip() {
    let repo = repo().await;

    let mut extra = serde_json::Map::new();
    extra.insert("description".into(), serde_json::json!("feline friends"));
    extra.insert("active".into(), serde_json::json!(true));
    let stored = repo
        .insert_category(
            Category::new(CategoryId::parse("c1").unwrap(), "Cats".into(), extra).unwrap(),
        )
        .await
        .unwrap();

    let fetched = repo.get_category(&stored.id).await.unwrap().unwrap();
    assert_eq!(fetched, stored);
    assert_eq!(fetched.extra["description"], "feline friends");
}

#[tokio::test]
async fn test_duplicate_insert_conflicts() {
    let repo = repo().await;
    repo.insert_category(category("c1", "Dogs")).await.unwrap();

    let result = repo.insert_category(category("c1", "Cats")).await;
    assert!(matches!(result, Err(RepoError::Conflict(_))));
}

#[tokio::test]
async fn test_replace_and_delete_absent() {
    let repo = repo().await;

    let replaced = repo.replace_category(category("ghost", "Dogs")).await.unwrap();
    assert!(replaced.is_none());

    let removed = repo
        .delete_category(&CategoryId::parse("ghost").unwrap())
        .await
        .unwrap();
    assert!(!removed);
}

#[tokio::test]
async fn test_replace_persists_new_fields() {
    let repo = repo().await;
    let mut stored = repo.insert_category(category("c1", "Dogs")).await.unwrap();

    stored.apply("Puppies".into(), Default::default()).unwrap();
    repo.replace_category(stored.clone()).await.unwrap();

    let fetched = repo.get_category(&stored.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Puppies");
    assert_eq!(fetched.id.as_str(), "c1");
}

#[tokio::test]
async fn test_full_record_update_still_decodes() {
    let repo = repo().await;
    let mut stored = repo.insert_category(category("c1", "Dogs")).await.unwrap();

    // An update body echoing the record's own id must not poison the
    // stored document for every later read.
    let mut extra = serde_json::Map::new();
    extra.insert("id".into(), serde_json::json!("c1"));
    extra.insert("description".into(), serde_json::json!("young dogs"));
    stored.apply("Puppies".into(), extra).unwrap();
    repo.replace_category(stored.clone()).await.unwrap();

    let fetched = repo.get_category(&stored.id).await.unwrap().unwrap();
    assert_eq!(fetched, stored);
    assert_eq!(fetched.extra["description"], "young dogs");

    let all = repo.list_categories().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_list_reflects_inserts_and_deletes() {
    let repo = repo().await;
    for i in 0..4 {
        repo.insert_category(category(&format!("c{i}"), "Dogs"))
            .await
            .unwrap();
    }
    repo.delete_category(&CategoryId::parse("c2").unwrap())
        .await
        .unwrap();

    let all = repo.list_categories().await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_payment_upsert_and_user_filter() {
    let repo = repo().await;

    let mut payment =
        Payment::new(PaymentId::parse("p1").unwrap(), "u1".into(), "alice".into()).unwrap();
    payment.append(PaymentDetail::new(1000, None));
    repo.save_payment(payment.clone()).await.unwrap();

    // Appending and saving again must replace the same document.
    payment.append(PaymentDetail::new(2500, Some("adoption fee".into())));
    repo.save_payment(payment.clone()).await.unwrap();

    let other = Payment::new(PaymentId::parse("p2").unwrap(), "u2".into(), "bob".into()).unwrap();
    repo.save_payment(other).await.unwrap();

    let for_u1 = repo.payments_for_user("u1").await.unwrap();
    assert_eq!(for_u1.len(), 1);
    assert_eq!(for_u1[0].payments.len(), 2);

    let fetched = repo.get_payment(&payment.payment_id).await.unwrap().unwrap();
    assert_eq!(fetched, payment);
}
