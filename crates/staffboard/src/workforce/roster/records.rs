use super::super::domain::EmployeeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostalAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// A directory entry as published by the upstream users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub address: PostalAddress,
}

impl DirectoryUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One page of the upstream users listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPage {
    pub users: Vec<DirectoryUser>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
}
