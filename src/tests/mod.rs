mod seed_tests;
mod storage_tests;

use crate::models::User;
use crate::seed::initialize_demo_data;
use crate::storage::in_memory::InMemoryStore;
use crate::storage::{Store, keys};

pub fn create_test_store() -> Store {
    Store::new(InMemoryStore::new())
}

pub async fn seeded_store() -> Store {
    let store = create_test_store();
    initialize_demo_data(&store).await.unwrap();
    store
}

pub async fn user_by_id(store: &Store, id: &str) -> User {
    let users: Vec<User> = store.get(keys::USERS, Vec::new()).await;
    users.into_iter().find(|u| u.id == id).unwrap()
}
