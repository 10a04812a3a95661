// Behaviour every `Store` backend shares; each backend's tests run these.
use std::time::Duration;
use crate::errors::StoreError;
use crate::models::{Category, NewTask, NewUser};
use super::Store;

pub fn unique_email() -> String {
    format!("{}@example.com", uuid::Uuid::new_v4())
}

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Ann".into(),
        email: email.into(),
        password_hash: "hash".into(),
        emergency_contact: "kin@example.com".into(),
    }
}

pub fn new_task(user_id: &str, title: &str) -> NewTask {
    NewTask {
        user_id: Some(user_id.into()),
        title: Some(title.into()),
        ..Default::default()
    }
}

pub async fn email_index_rejects_duplicates(store: &dyn Store) {
    let email = unique_email();
    let user = store.create_user(new_user(&email)).await.unwrap();

    let err = store.create_user(new_user(&email)).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmail(_)));

    let found = store.find_user_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(store.find_user(&user.id).await.unwrap().unwrap().email, email);
    assert!(store.find_user_by_email(&unique_email()).await.unwrap().is_none());
}

pub async fn tasks_are_listed_oldest_first_per_owner(store: &dyn Store) {
    let owner = uuid::Uuid::new_v4().to_string();
    let other = uuid::Uuid::new_v4().to_string();

    for (user_id, title) in [(&owner, "Aspirin"), (&other, "Lunch"), (&owner, "Vitamin D"), (&owner, "Insulin")] {
        store.create_task(new_task(user_id, title)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let titles: Vec<_> = store
        .tasks_for_user(&owner)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["Aspirin", "Vitamin D", "Insulin"]);
    assert!(store.tasks_for_user(&uuid::Uuid::new_v4().to_string()).await.unwrap().is_empty());
}

pub async fn complete_and_delete_report_unknown_ids(store: &dyn Store) {
    let owner = uuid::Uuid::new_v4().to_string();
    let task = store.create_task(new_task(&owner, "Aspirin")).await.unwrap();
    assert_eq!(task.category, Category::Medicine);
    assert!(!task.is_completed);

    let completed = store.complete_task(&task.id).await.unwrap().unwrap();
    assert!(completed.is_completed);
    assert!(store.tasks_for_user(&owner).await.unwrap()[0].is_completed);
    assert!(store.complete_task("missing").await.unwrap().is_none());

    assert_eq!(store.delete_task(&task.id).await.unwrap().unwrap().id, task.id);
    assert!(store.delete_task(&task.id).await.unwrap().is_none());
    assert!(store.tasks_for_user(&owner).await.unwrap().is_empty());
}

pub async fn completion_never_restores_a_deleted_task(store: &dyn Store) {
    let owner = uuid::Uuid::new_v4().to_string();

    let task = store.create_task(new_task(&owner, "Aspirin")).await.unwrap();
    store.delete_task(&task.id).await.unwrap();
    assert!(store.complete_task(&task.id).await.unwrap().is_none());

    // racing pair: whichever order they land in, the task ends up gone
    let task = store.create_task(new_task(&owner, "Lunch")).await.unwrap();
    let (completed, deleted) = tokio::join!(store.complete_task(&task.id), store.delete_task(&task.id));
    completed.unwrap();
    assert!(deleted.unwrap().is_some());

    assert!(store.tasks_for_user(&owner).await.unwrap().is_empty());
    assert!(store.complete_task(&task.id).await.unwrap().is_none());
    assert!(store.delete_task(&task.id).await.unwrap().is_none());
}
