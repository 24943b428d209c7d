use loco_rs::model::ModelError;
use loco_rs::testing::prelude::*;
use rstest::rstest;
use sea_orm::entity::prelude::*;
use serial_test::serial;
use storefront_backend::{
    app::App,
    models::users::{self, CreateParams, Entity, Role},
};

use crate::helpers;

fn params(name: &str, email: &str, role: Option<Role>) -> CreateParams {
    CreateParams {
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

#[tokio::test]
#[serial]
async fn can_create_with_default_role() {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let user = users::Model::create(db, &params("Ada Lovelace", "ada@example.com", None))
        .await
        .unwrap();

    assert_eq!(user.role, Role::User);
    assert_eq!(user.name, "Ada Lovelace");

    let stored = users::Model::find_by_email(db, "ada@example.com")
        .await
        .unwrap();
    assert_eq!(stored.id, user.id);
    assert_eq!(stored.role, Role::User);

    helpers::teardown(db).await;
}

#[tokio::test]
#[serial]
async fn can_create_admin() {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let user = users::Model::create(db, &params("Root", "root@example.com", Some(Role::Admin)))
        .await
        .unwrap();

    assert!(user.is_admin());

    helpers::teardown(db).await;
}

#[tokio::test]
#[serial]
async fn rejects_duplicate_email() {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    users::Model::create(db, &params("First", "taken@example.com", None))
        .await
        .unwrap();

    let res = users::Model::create(db, &params("Second", "taken@example.com", None)).await;
    assert!(matches!(res, Err(ModelError::EntityAlreadyExists {})));

    // the losing insert must not have written a row
    assert_eq!(Entity::find().count(db).await.unwrap(), 1);

    helpers::teardown(db).await;
}

#[rstest]
#[case::empty_name("", "someone@example.com")]
#[case::bad_email("Someone", "not-an-email")]
#[case::empty_email("Someone", "")]
#[tokio::test]
#[serial]
async fn rejects_invalid_params(#[case] name: &str, #[case] email: &str) {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let res = users::Model::create(db, &params(name, email, None)).await;
    assert!(res.is_err());
    assert_eq!(Entity::find().count(db).await.unwrap(), 0);

    helpers::teardown(db).await;
}

#[tokio::test]
#[serial]
async fn ids_are_strictly_increasing() {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let mut last_id = 0;
    for i in 0..3 {
        let user = users::Model::create(
            db,
            &params(&format!("User {i}"), &format!("user{i}@example.com"), None),
        )
        .await
        .unwrap();
        assert!(user.id > last_id);
        last_id = user.id;
    }

    helpers::teardown(db).await;
}

#[tokio::test]
#[serial]
async fn update_refreshes_updated_at() {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let user = users::Model::create(db, &params("Original", "renameme@example.com", None))
        .await
        .unwrap();
    let created_at = user.created_at;

    let mut active: users::ActiveModel = user.into();
    active.name = sea_orm::ActiveValue::Set("Renamed".to_string());
    let updated = active.update(db).await.unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.created_at, created_at);
    assert!(updated.updated_at >= created_at);

    helpers::teardown(db).await;
}

#[tokio::test]
#[serial]
async fn seeds_fixture_users() {
    let boot = boot_test::<App>().await.unwrap();
    seed::<App>(&boot.app_context).await.unwrap();
    let db = &boot.app_context.db;

    let admin = users::Model::find_by_email(db, "admin@storefront.example")
        .await
        .unwrap();
    assert!(admin.is_admin());

    let shopper = users::Model::find_by_email(db, "shopper@storefront.example")
        .await
        .unwrap();
    assert_eq!(shopper.role, Role::User);

    helpers::teardown(db).await;
}

#[tokio::test]
#[serial]
async fn find_by_email_misses_with_entity_not_found() {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let res = users::Model::find_by_email(db, "ghost@example.com").await;
    assert!(matches!(res, Err(ModelError::EntityNotFound)));

    helpers::teardown(db).await;
}
