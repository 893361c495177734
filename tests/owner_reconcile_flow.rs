mod common;

use async_trait::async_trait;
use common::{keys, TestContext};
use org_roster::db::owner_scope::{OrganizationOwners, OwnerScope};
use org_roster::types::error::AppError;
use org_roster::types::ownership::{EmployeeKey, OwnedEntity};
use org_roster::utils::owner_plan::OwnerFlag;
use sea_orm::{DatabaseTransaction, DbErr};

/// Delegates to the organization table but fails every promotion.
struct BrokenPromotion;

#[async_trait]
impl OwnerScope for BrokenPromotion {
    fn kind(&self) -> OwnedEntity {
        OrganizationOwners.kind()
    }

    async fn entity_exists(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<bool, DbErr> {
        OrganizationOwners.entity_exists(txn, entity_key).await
    }

    async fn owner_flags(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<Vec<OwnerFlag>, DbErr> {
        OrganizationOwners.owner_flags(txn, entity_key).await
    }

    async fn set_owner_flag(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        owner: bool,
        actor: EmployeeKey,
    ) -> Result<u64, DbErr> {
        if owner {
            return Err(DbErr::Custom("promotion refused".to_string()));
        }
        OrganizationOwners.set_owner_flag(txn, entity_key, employees, owner, actor).await
    }

    async fn enroll_owners(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        actor: EmployeeKey,
    ) -> Result<Vec<EmployeeKey>, DbErr> {
        OrganizationOwners.enroll_owners(txn, entity_key, employees, actor).await
    }
}

#[tokio::test]
async fn test_org_owners_enroll_and_demote() {
    println!("\n\n[+] Running test: test_org_owners_enroll_and_demote");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let b = ctx.employee("Bob", "Baker").await.employee_key;
    let c = ctx.employee("Carol", "Cook").await.employee_key;
    let org = ctx.organization("Platform").await;
    ctx.org_link(a, org, true).await;
    ctx.org_link(b, org, true).await;

    let change = ctx
        .db
        .set_organization_owners(org, &keys(&[a, c]), actor)
        .await
        .expect("reconcile failed");
    println!("[<] Change: {:?}", change);

    assert_eq!(change.demoted_rows, 1);
    assert_eq!(change.promoted_rows, 0);
    assert_eq!(change.enrolled, 1);
    assert!(change.non_member_ids.is_empty());
    assert_eq!(ctx.org_owner_keys(org).await, vec![a, c]);

    // demotion keeps the row
    let links = ctx.org_links(org).await;
    assert_eq!(links.len(), 3);
    let bob = links.iter().find(|l| l.employee_key == b).expect("Bob's link is gone");
    assert!(!bob.org_owner);
    assert_eq!(bob.updated_by_id, Some(actor));

    let carol = links.iter().find(|l| l.employee_key == c).expect("Carol was not enrolled");
    assert_eq!(carol.created_by_id, Some(actor));
    assert_eq!(carol.updated_by_id, Some(actor));
    println!("[/] Test passed: owners enrolled and demoted.");
}

#[tokio::test]
async fn test_org_owners_second_call_is_noop() {
    println!("\n\n[+] Running test: test_org_owners_second_call_is_noop");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let other_actor = ctx.employee("Otto", "Other").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let b = ctx.employee("Bob", "Baker").await.employee_key;
    let c = ctx.employee("Carol", "Cook").await.employee_key;
    let org = ctx.organization("Platform").await;
    ctx.org_link(a, org, true).await;
    ctx.org_link(b, org, true).await;

    let desired = keys(&[a, c]);
    ctx.db.set_organization_owners(org, &desired, actor).await.expect("first call failed");
    let before = ctx.org_links(org).await;

    let change = ctx
        .db
        .set_organization_owners(org, &desired, other_actor)
        .await
        .expect("second call failed");

    assert_eq!(change.rows_touched(), 0);
    assert_eq!(ctx.org_links(org).await, before);
    println!("[/] Test passed: repeated reconcile touched nothing.");
}

#[tokio::test]
async fn test_org_owners_full_clear() {
    println!("\n\n[+] Running test: test_org_owners_full_clear");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let b = ctx.employee("Bob", "Baker").await.employee_key;
    let c = ctx.employee("Carol", "Cook").await.employee_key;
    let org = ctx.organization("Platform").await;
    ctx.org_link(a, org, true).await;
    ctx.org_link(b, org, true).await;
    ctx.org_link(c, org, false).await;

    let change = ctx
        .db
        .set_organization_owners(org, &keys(&[]), actor)
        .await
        .expect("reconcile failed");

    assert_eq!(change.demoted_rows, 2);
    assert!(ctx.org_owner_keys(org).await.is_empty());
    assert_eq!(ctx.org_links(org).await.len(), 3);
    println!("[/] Test passed: empty set clears every owner.");
}

#[tokio::test]
async fn test_org_owners_leave_other_orgs_alone() {
    println!("\n\n[+] Running test: test_org_owners_leave_other_orgs_alone");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let org = ctx.organization("Platform").await;
    let other_org = ctx.organization("Payments").await;
    ctx.org_link(a, org, true).await;
    ctx.org_link(a, other_org, true).await;
    let other_before = ctx.org_links(other_org).await;

    ctx.db
        .set_organization_owners(org, &keys(&[]), actor)
        .await
        .expect("reconcile failed");

    assert!(ctx.org_owner_keys(org).await.is_empty());
    assert_eq!(ctx.org_links(other_org).await, other_before);
    println!("[/] Test passed: sibling organization untouched.");
}

#[tokio::test]
async fn test_org_owners_round_trip() {
    println!("\n\n[+] Running test: test_org_owners_round_trip");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let b = ctx.employee("Bob", "Baker").await.employee_key;
    let c = ctx.employee("Carol", "Cook").await.employee_key;
    let org = ctx.organization("Platform").await;

    let everyone = keys(&[a, b, c]);
    let first = ctx.db.set_organization_owners(org, &everyone, actor).await.expect("enroll failed");
    assert_eq!(first.enrolled, 3);

    let narrowed = ctx.db.set_organization_owners(org, &keys(&[b]), actor).await.expect("narrow failed");
    assert_eq!(narrowed.demoted_rows, 2);
    assert_eq!(ctx.org_owner_keys(org).await, vec![b]);

    let restored = ctx.db.set_organization_owners(org, &everyone, actor).await.expect("restore failed");
    assert_eq!(restored.promoted_rows, 2);
    assert_eq!(restored.enrolled, 0);
    assert_eq!(ctx.org_owner_keys(org).await, vec![a, b, c]);
    assert_eq!(ctx.org_links(org).await.len(), 3);
    println!("[/] Test passed: owner set restored without new rows.");
}

#[tokio::test]
async fn test_org_owners_rolled_back_when_promotion_fails() {
    println!("\n\n[+] Running test: test_org_owners_rolled_back_when_promotion_fails");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let b = ctx.employee("Bob", "Baker").await.employee_key;
    let c = ctx.employee("Carol", "Cook").await.employee_key;
    let org = ctx.organization("Platform").await;
    ctx.org_link(a, org, true).await;
    ctx.org_link(b, org, false).await;
    let before = ctx.org_links(org).await;

    // a is demoted first, then b's promotion blows up
    let err = ctx
        .db
        .reconcile_owners(&BrokenPromotion, org, &keys(&[b, c]), actor)
        .await
        .expect_err("reconcile should have failed");
    println!("[<] Error: {}", err);

    assert!(matches!(err, AppError::Db(_)));
    // the reconciliation error comes back, not whatever the rollback reports
    assert!(err.user_message().starts_with("Database operation failed:"));
    assert!(err.to_string().contains("promotion refused"));
    assert_eq!(ctx.org_links(org).await, before);
    println!("[/] Test passed: partial demotion rolled back.");
}

#[tokio::test]
async fn test_org_owners_unknown_employee_rolls_back() {
    println!("\n\n[+] Running test: test_org_owners_unknown_employee_rolls_back");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let b = ctx.employee("Bob", "Baker").await.employee_key;
    let org = ctx.organization("Platform").await;
    ctx.org_link(a, org, true).await;
    ctx.org_link(b, org, false).await;
    let before = ctx.org_links(org).await;

    let err = ctx
        .db
        .set_organization_owners(org, &keys(&[b, 424_242]), actor)
        .await
        .expect_err("enrolling a missing employee should fail");
    println!("[<] Error: {}", err);

    assert!(matches!(err, AppError::Db(_)));
    let message = err.user_message();
    assert!(message.starts_with("Database operation failed: "));
    assert!(message.contains("FOREIGN KEY"));
    assert_eq!(ctx.org_links(org).await, before);
    println!("[/] Test passed: foreign key failure rolled back demotion and promotion.");
}

#[tokio::test]
async fn test_org_owners_missing_org() {
    println!("\n\n[+] Running test: test_org_owners_missing_org");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;

    let err = ctx
        .db
        .set_organization_owners(9_999, &keys(&[actor]), actor)
        .await
        .expect_err("missing organization should fail");

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Organization not found.");
    println!("[/] Test passed: missing organization reported.");
}

#[tokio::test]
async fn test_art_owners_reconcile_in_scope() {
    println!("\n\n[+] Running test: test_art_owners_reconcile_in_scope");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let a = ctx.employee("Alice", "Archer").await.employee_key;
    let b = ctx.employee("Bob", "Baker").await.employee_key;
    let org = ctx.organization("Platform").await;
    let art = ctx.art(org, "Checkout").await;
    let other_art = ctx.art(org, "Search").await;
    ctx.art_link(a, art, true).await;
    ctx.art_link(a, other_art, true).await;
    let other_before = ctx.art_links(other_art).await;

    let change = ctx.db.set_art_owners(art, &keys(&[b]), actor).await.expect("reconcile failed");
    assert_eq!(change.demoted_rows, 1);
    assert_eq!(change.enrolled, 1);

    let owners: Vec<i32> = ctx
        .art_links(art)
        .await
        .into_iter()
        .filter(|l| l.art_owner)
        .map(|l| l.employee_key)
        .collect();
    assert_eq!(owners, vec![b]);
    assert_eq!(ctx.art_links(other_art).await, other_before);

    let err = ctx.db.set_art_owners(9_999, &keys(&[]), actor).await.expect_err("missing ART");
    assert_eq!(err.to_string(), "ART not found.");
    println!("[/] Test passed: ART owners reconciled.");
}

#[tokio::test]
async fn test_owner_listings_sorted_by_name() {
    println!("\n\n[+] Running test: test_owner_listings_sorted_by_name");
    let ctx = TestContext::new().await;
    let actor = ctx.employee("Ada", "Admin").await.employee_key;
    let zed = ctx.employee("Zed", "Young").await;
    let amy = ctx.employee("Amy", "Young").await;
    let bob = ctx.employee("Bob", "Baker").await;
    let org = ctx.organization("Platform").await;
    let art = ctx.art(org, "Checkout").await;
    ctx.org_link(actor, org, false).await;

    ctx.db
        .set_organization_owners(org, &keys(&[zed.employee_key, amy.employee_key, bob.employee_key]), actor)
        .await
        .expect("reconcile failed");

    let owners = ctx.db.list_organization_owners(org).await.expect("listing failed");
    let names: Vec<&str> = owners.iter().map(|o| o.owner_name.as_str()).collect();
    assert_eq!(names, vec!["Bob Baker", "Amy Young", "Zed Young"]);
    assert_eq!(owners[0].owner_email, bob.email);
    assert_eq!(owners[0].owner_employee_key, bob.employee_key);

    assert!(ctx.db.list_art_owners(art).await.expect("listing failed").is_empty());
    println!("[/] Test passed: owners listed in name order.");
}
