use serde::{Deserialize, Serialize};

use crate::types::ownership::{EmployeeKey, TeamKey};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssignEmployeeToTeamInput {
    pub employee_key: EmployeeKey,
    pub team_key: TeamKey,
    pub job_title: String,
    #[serde(default)]
    pub is_team_owner: bool,
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RemoveEmployeeFromTeamInput {
    pub employee_key: EmployeeKey,
    pub team_key: TeamKey,
    pub job_title: String,
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RTeamAssign {
    pub employee_key: EmployeeKey,
    pub job_title: String,
    #[serde(default)]
    pub is_team_owner: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RTeamRemove {
    pub employee_key: EmployeeKey,
    pub job_title: String,
}
