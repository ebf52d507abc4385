use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    pub name: Option<String>,
    pub acronym: Option<String>,
    pub is_deleted: bool,
}

/// Request body for POST and PUT. Any `id` or `isDeleted` sent by the client is ignored.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentInput {
    pub name: Option<String>,
    pub acronym: Option<String>,
}

/// A department about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: Option<String>,
    pub acronym: Option<String>,
    pub is_deleted: bool,
}

impl From<DepartmentInput> for NewDepartment {
    fn from(input: DepartmentInput) -> Self {
        NewDepartment {
            name: input.name,
            acronym: input.acronym,
            is_deleted: false,
        }
    }
}
