use serde::{Deserialize, Serialize};

pub type EmployeeKey = i32;
pub type OrganizationKey = i32;
pub type ArtKey = i32;
pub type TeamKey = i32;

/// Which link table a reconciliation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedEntity {
    Organization,
    Art,
    Team,
}

impl OwnedEntity {
    pub fn label(self) -> &'static str {
        match self {
            OwnedEntity::Organization => "Organization",
            OwnedEntity::Art => "ART",
            OwnedEntity::Team => "Team",
        }
    }
}

/// Caller input for replacing an entity's owner set. The list is the full
/// desired set, not a delta.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SetOwnersInput {
    pub entity_key: i32,
    pub owner_employee_keys: Vec<EmployeeKey>,
    pub access_token: String,
}

/// Request body for the owner-set routes; the entity comes from the path.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ROwnerSet {
    pub owner_employee_keys: Vec<EmployeeKey>,
}

/// What a reconciliation changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipChange {
    pub demoted_rows: u64,
    pub promoted_rows: u64,
    pub enrolled: u64,
    pub non_member_ids: Vec<EmployeeKey>,
}

impl OwnershipChange {
    pub fn rows_touched(&self) -> u64 {
        self.demoted_rows + self.promoted_rows + self.enrolled
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    pub owner_employee_key: EmployeeKey,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_avatar: Option<String>,
}
