use loco_rs::testing::prelude::*;
use migration::{Migrator, MigratorTrait};
use serial_test::serial;
use storefront_backend::app::App;

#[tokio::test]
#[serial]
async fn boot_leaves_no_pending_migrations() {
    let boot = boot_test::<App>().await.unwrap();

    let pending = Migrator::get_pending_migrations(&boot.app_context.db)
        .await
        .unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
#[serial]
async fn repeated_sync_is_a_noop() {
    let boot = boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let applied = Migrator::get_applied_migrations(db).await.unwrap().len();

    // schema already matches; a second reconciliation must change nothing
    Migrator::up(db, None).await.unwrap();

    assert_eq!(
        Migrator::get_applied_migrations(db).await.unwrap().len(),
        applied
    );
    assert!(Migrator::get_pending_migrations(db).await.unwrap().is_empty());
}
