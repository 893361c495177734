#![allow(dead_code)]

use chrono::Utc;
use entity::{art, employee, employee_art, employee_org, employee_team, organization, team};
use org_roster::db::database_service::DatabaseService;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub _container: Option<ContainerAsync<Postgres>>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // one connection, otherwise every pooled connection gets its own in-memory database
        let db = Arc::new(
            DatabaseService::new("sqlite::memory:", 1)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db, _container: None }
    }

    /// Same context backed by a throwaway Postgres container.
    pub async fn postgres() -> TestContext {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");
        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");
        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            DatabaseService::new(&db_url, 5)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db, _container: Some(container) }
    }

    pub async fn employee(&self, first: &str, last: &str) -> employee::Model {
        let now = Utc::now();
        let handle = format!("{}.{}", first.to_lowercase(), last.to_lowercase());
        employee::ActiveModel {
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            email: Set(format!("{handle}@example.com")),
            lan_id: Set(handle),
            manager_lan_id: Set(None),
            is_contractor: Set(false),
            is_user_active: Set(true),
            profile_photo: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create employee")
    }

    pub async fn organization(&self, name: &str) -> i32 {
        let now = Utc::now();
        organization::ActiveModel {
            organization_name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(None),
            updated_by_id: Set(None),
            ..Default::default()
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create organization")
        .organization_key
    }

    pub async fn art(&self, organization_key: i32, name: &str) -> i32 {
        let now = Utc::now();
        art::ActiveModel {
            art_name: Set(name.to_string()),
            organization_key: Set(organization_key),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(None),
            updated_by_id: Set(None),
            ..Default::default()
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create ART")
        .art_key
    }

    /// Creates an organization, an ART and a team under it.
    pub async fn team(&self, name: &str) -> i32 {
        let org = self.organization(&format!("{name} Org")).await;
        let art = self.art(org, &format!("{name} ART")).await;
        let now = Utc::now();
        team::ActiveModel {
            team_name: Set(name.to_string()),
            art_key: Set(art),
            organization_key: Set(org),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(None),
            updated_by_id: Set(None),
            ..Default::default()
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create team")
        .team_key
    }

    pub async fn org_link(&self, employee_key: i32, organization_key: i32, owner: bool) {
        let now = Utc::now();
        employee_org::ActiveModel {
            employee_key: Set(employee_key),
            organization_key: Set(organization_key),
            org_owner: Set(owner),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(None),
            updated_by_id: Set(None),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create organization link");
    }

    pub async fn art_link(&self, employee_key: i32, art_key: i32, owner: bool) {
        let now = Utc::now();
        employee_art::ActiveModel {
            employee_key: Set(employee_key),
            art_key: Set(art_key),
            art_owner: Set(owner),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(None),
            updated_by_id: Set(None),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create ART link");
    }

    pub async fn team_role(&self, employee_key: i32, team_key: i32, job_title: &str, owner: bool) {
        let now = Utc::now();
        employee_team::ActiveModel {
            employee_key: Set(employee_key),
            team_key: Set(team_key),
            job_title: Set(job_title.to_string()),
            team_owner: Set(owner),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(None),
            updated_by_id: Set(None),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create team role");
    }

    pub async fn org_links(&self, organization_key: i32) -> Vec<employee_org::Model> {
        employee_org::Entity::find()
            .filter(employee_org::Column::OrganizationKey.eq(organization_key))
            .order_by_asc(employee_org::Column::EmployeeKey)
            .all(self.db.connection())
            .await
            .expect("Failed to read organization links")
    }

    pub async fn art_links(&self, art_key: i32) -> Vec<employee_art::Model> {
        employee_art::Entity::find()
            .filter(employee_art::Column::ArtKey.eq(art_key))
            .order_by_asc(employee_art::Column::EmployeeKey)
            .all(self.db.connection())
            .await
            .expect("Failed to read ART links")
    }

    pub async fn team_rows(&self, team_key: i32) -> Vec<employee_team::Model> {
        employee_team::Entity::find()
            .filter(employee_team::Column::TeamKey.eq(team_key))
            .order_by_asc(employee_team::Column::EmployeeKey)
            .order_by_asc(employee_team::Column::JobTitle)
            .all(self.db.connection())
            .await
            .expect("Failed to read team roles")
    }

    /// Employees whose organization link is flagged owner.
    pub async fn org_owner_keys(&self, organization_key: i32) -> Vec<i32> {
        self.org_links(organization_key)
            .await
            .into_iter()
            .filter(|l| l.org_owner)
            .map(|l| l.employee_key)
            .collect()
    }
}

pub fn keys(keys: &[i32]) -> std::collections::BTreeSet<i32> {
    keys.iter().copied().collect()
}
