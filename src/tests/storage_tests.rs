use crate::models::{Appointment, User};
use crate::storage::keys;
use crate::tests::{create_test_store, seeded_store};

#[tokio::test]
async fn test_set_then_get_round_trips() {
    let store = seeded_store().await;
    let users: Vec<User> = store.get(keys::USERS, Vec::new()).await;
    assert!(!users.is_empty());

    store.set("usersCopy", &users).await.unwrap();
    let copy: Vec<User> = store.get("usersCopy", Vec::new()).await;
    assert_eq!(copy, users);
}

#[tokio::test]
async fn test_get_absent_key_returns_default() {
    let store = create_test_store();
    let appointments: Vec<Appointment> = store.get(keys::APPOINTMENTS, Vec::new()).await;
    assert!(appointments.is_empty());

    let fallback: u32 = store.get("missing", 42).await;
    assert_eq!(fallback, 42);
}

#[tokio::test]
async fn test_get_malformed_value_returns_default() {
    let store = create_test_store();
    // A string is stored under the key where a collection is expected.
    store.set(keys::USERS, &"not a collection").await.unwrap();

    let users: Vec<User> = store.get(keys::USERS, Vec::new()).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_remove_clears_key() {
    let store = create_test_store();
    store.set("scratch", &vec![1, 2, 3]).await.unwrap();
    assert!(store.contains("scratch").await.unwrap());

    store.remove("scratch").await.unwrap();
    assert!(!store.contains("scratch").await.unwrap());
    let values: Vec<i32> = store.get("scratch", Vec::new()).await;
    assert!(values.is_empty());
}

#[tokio::test]
async fn test_last_full_collection_write_wins() {
    let store = create_test_store();
    let tab_a = store.clone();
    let tab_b = store.clone();

    tab_a.set("counter", &vec![1]).await.unwrap();
    tab_b.set("counter", &vec![2, 3]).await.unwrap();

    // No merge: the second writer's snapshot replaces the first wholesale.
    let values: Vec<i32> = store.get("counter", Vec::new()).await;
    assert_eq!(values, vec![2, 3]);
}
