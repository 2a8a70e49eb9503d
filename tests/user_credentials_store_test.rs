//! Repository tests against a real (in-memory SQLite) database.

mod common;

use chrono::NaiveDate;

use common::{store, unreachable_database, varun};
use user_credentials::errors::AppError;
use user_credentials::infra::{Database, UserCredentialsRepository, UserCredentialsStore};
use user_credentials::{Config, NewUserCredentials, UserCredentials, UserCredentialsUpdate};

fn stored(user: &NewUserCredentials) -> UserCredentials {
    UserCredentials {
        email: user.email.clone(),
        firstname: user.firstname.clone(),
        lastname: user.lastname.clone(),
        dob: user.dob,
        phone_number: user.phone_number.clone(),
    }
}

#[tokio::test]
async fn test_get_missing_email_returns_none() {
    let store = store().await;

    let result = store.get("ghost@x.com").await.expect("lookup should not fail");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_create_schema_is_idempotent() {
    let store = store().await;

    store.create_schema().await.expect("second create should succeed");
    store.insert(varun()).await.unwrap();
    store.create_schema().await.expect("create over data should succeed");

    assert!(store.get("varun@gmail.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_insert_then_get_round_trips_all_fields() {
    let store = store().await;
    let user = varun();

    store.insert(user.clone()).await.unwrap();

    let found = store.get(&user.email).await.unwrap().expect("user should exist");
    assert_eq!(found, stored(&user));
}

#[tokio::test]
async fn test_insert_with_only_email() {
    let store = store().await;
    let user = NewUserCredentials {
        email: "bare@x.com".to_string(),
        firstname: None,
        lastname: None,
        dob: None,
        phone_number: None,
    };

    store.insert(user.clone()).await.unwrap();

    assert_eq!(store.get("bare@x.com").await.unwrap(), Some(stored(&user)));
}

#[tokio::test]
async fn test_duplicate_email_is_conflict_and_keeps_first() {
    let store = store().await;
    store.insert(varun()).await.unwrap();

    let mut duplicate = varun();
    duplicate.firstname = Some("Impostor".to_string());
    duplicate.phone_number = Some("1111111111".to_string());

    let err = store.insert(duplicate).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    let found = store.get("varun@gmail.com").await.unwrap().unwrap();
    assert_eq!(found.firstname.as_deref(), Some("Varun"));
    assert_eq!(found.phone_number.as_deref(), Some("9876543210"));
}

#[tokio::test]
async fn test_duplicate_phone_number_is_conflict() {
    let store = store().await;
    store.insert(varun()).await.unwrap();

    let mut other = varun();
    other.email = "other@gmail.com".to_string();

    let err = store.insert(other).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
    assert!(store.get("other@gmail.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_phone_numbers_do_not_collide() {
    let store = store().await;

    for email in ["a@x.com", "b@x.com"] {
        let user = NewUserCredentials {
            email: email.to_string(),
            firstname: None,
            lastname: None,
            dob: None,
            phone_number: None,
        };
        store.insert(user).await.unwrap();
    }

    assert!(store.get("a@x.com").await.unwrap().is_some());
    assert!(store.get("b@x.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_update_overwrites_every_mutable_field() {
    let store = store().await;
    store.insert(varun()).await.unwrap();

    let changes = UserCredentialsUpdate {
        firstname: Some("Varun K".to_string()),
        lastname: None,
        dob: NaiveDate::from_ymd_opt(1999, 12, 31),
        phone_number: Some("5550001111".to_string()),
    };

    let rows = store.update("varun@gmail.com", changes).await.unwrap();
    assert_eq!(rows, 1);

    let found = store.get("varun@gmail.com").await.unwrap().unwrap();
    assert_eq!(
        found,
        UserCredentials {
            email: "varun@gmail.com".to_string(),
            firstname: Some("Varun K".to_string()),
            lastname: None,
            dob: NaiveDate::from_ymd_opt(1999, 12, 31),
            phone_number: Some("5550001111".to_string()),
        }
    );
}

#[tokio::test]
async fn test_update_missing_email_affects_nothing() {
    let store = store().await;
    store.insert(varun()).await.unwrap();

    let changes = UserCredentialsUpdate {
        firstname: Some("Ghost".to_string()),
        ..Default::default()
    };

    let rows = store.update("ghost@x.com", changes).await.unwrap();
    assert_eq!(rows, 0);

    assert!(store.get("ghost@x.com").await.unwrap().is_none());
    assert_eq!(
        store.get("varun@gmail.com").await.unwrap(),
        Some(stored(&varun()))
    );
}

#[tokio::test]
async fn test_update_to_taken_phone_number_is_conflict() {
    let store = store().await;
    store.insert(varun()).await.unwrap();

    let mut other = varun();
    other.email = "other@gmail.com".to_string();
    other.phone_number = Some("2222222222".to_string());
    store.insert(other).await.unwrap();

    let changes = UserCredentialsUpdate {
        phone_number: Some("9876543210".to_string()),
        ..Default::default()
    };

    let err = store.update("other@gmail.com", changes).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    let unchanged = store.get("other@gmail.com").await.unwrap().unwrap();
    assert_eq!(unchanged.phone_number.as_deref(), Some("2222222222"));
}

#[tokio::test]
async fn test_delete_then_get_returns_none() {
    let store = store().await;
    store.insert(varun()).await.unwrap();

    assert_eq!(store.delete("varun@gmail.com").await.unwrap(), 1);
    assert!(store.get("varun@gmail.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_absent_email_succeeds() {
    let store = store().await;

    assert_eq!(store.delete("ghost@x.com").await.unwrap(), 0);
    assert_eq!(store.delete("ghost@x.com").await.unwrap(), 0);
}

#[tokio::test]
async fn test_incomplete_configuration_fails_on_first_use() {
    let db = Database::new(&Config::default());
    let store = UserCredentialsStore::new(db.sessions());

    let err = store.get("varun@gmail.com").await.unwrap_err();
    assert!(matches!(err, AppError::Unavailable(_)), "got {:?}", err);

    let err = store.get("varun@gmail.com").await.unwrap_err();
    assert!(matches!(err, AppError::Unavailable(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_store_is_unavailable() {
    let db = unreachable_database();
    let store = UserCredentialsStore::new(db.sessions());

    let err = store.get("varun@gmail.com").await.unwrap_err();
    assert!(matches!(err, AppError::Unavailable(_)), "got {:?}", err);

    let err = store.insert(varun()).await.unwrap_err();
    assert!(matches!(err, AppError::Unavailable(_)), "got {:?}", err);
}
