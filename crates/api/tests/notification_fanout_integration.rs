//! Integration test for broadcast fan-out: the recipient set is a snapshot
//! of active accounts taken at dispatch time.
//!
//! Kept as a single test in its own binary: the exact-count assertions read
//! the whole accounts table, so they must not race with other tests seeding
//! accounts concurrently.

mod common;

use common::{apply_schema, create_test_pool, seed_admin, unique_username};
use domain::models::{NotificationDraft, NotificationKind, NotificationTarget};
use persistence::repositories::NotificationRepository;
use uuid::Uuid;

async fn rows_for(pool: &sqlx::PgPool, admin_id: Uuid, title: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE admin_id = $1 AND title = $2")
        .bind(admin_id)
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_fanout_is_a_snapshot_of_matching_active_accounts() {
    let pool = create_test_pool().await;
    apply_schema(&pool).await;
    let repo = NotificationRepository::new(pool.clone());

    // Two active accounts, one inactive-at-dispatch account, and the role
    // spread needed for the super_admin selector.
    let a = seed_admin(&pool, &unique_username("snap-a"), "Str0ngPass", "super_admin", true).await;
    let b = seed_admin(&pool, &unique_username("snap-b"), "Str0ngPass", "viewer", true).await;
    let late = seed_admin(&pool, &unique_username("snap-late"), "Str0ngPass", "admin", false).await;
    let inactive_sa = seed_admin(
        &pool,
        &unique_username("snap-off-sa"),
        "Str0ngPass",
        "super_admin",
        false,
    )
    .await;

    // --- AllActive: one row per account active at dispatch time ---
    let active_at_dispatch: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM admin_accounts WHERE is_active = TRUE")
            .fetch_one(&pool)
            .await
            .unwrap();

    let created = repo
        .dispatch(NotificationTarget::AllActive, &NotificationDraft::new(
            "Broadcast snapshot",
            "to everyone active right now",
            NotificationKind::Info,
        ))
        .await
        .unwrap();

    assert_eq!(created as i64, active_at_dispatch);
    assert_eq!(rows_for(&pool, a, "Broadcast snapshot").await, 1);
    assert_eq!(rows_for(&pool, b, "Broadcast snapshot").await, 1);
    assert_eq!(rows_for(&pool, late, "Broadcast snapshot").await, 0);

    // Activating an account after dispatch does not retroactively deliver
    sqlx::query("UPDATE admin_accounts SET is_active = TRUE WHERE id = $1")
        .bind(late)
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(rows_for(&pool, late, "Broadcast snapshot").await, 0);

    // --- ActiveSuperAdmins: only active super_admins at dispatch time ---
    let active_super_admins: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM admin_accounts WHERE is_active = TRUE AND role = 'super_admin'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let created = repo
        .dispatch(
            NotificationTarget::ActiveSuperAdmins,
            &NotificationDraft::new("Operator event", "super admins only", NotificationKind::Warning),
        )
        .await
        .unwrap();

    assert_eq!(created as i64, active_super_admins);
    assert_eq!(rows_for(&pool, a, "Operator event").await, 1);
    assert_eq!(rows_for(&pool, b, "Operator event").await, 0);
    assert_eq!(rows_for(&pool, inactive_sa, "Operator event").await, 0);

    // --- Direct target: exactly one row, active or not ---
    let created = repo
        .dispatch(
            NotificationTarget::Admin(inactive_sa),
            &NotificationDraft::new("Direct", "addressed by id", NotificationKind::Success),
        )
        .await
        .unwrap();

    assert_eq!(created, 1);
    assert_eq!(rows_for(&pool, inactive_sa, "Direct").await, 1);
}
