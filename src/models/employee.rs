use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: Option<String>,
    pub picture: Option<String>,
    /// Identity document number, "XX.XXX.XXX-X". Stored as sent.
    pub rg: Option<String>,
    pub id_department: Option<i32>,
    pub is_deleted: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub picture: Option<String>,
    pub rg: Option<String>,
    pub id_department: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: Option<String>,
    pub picture: Option<String>,
    pub rg: Option<String>,
    pub id_department: Option<i32>,
    pub is_deleted: bool,
}

impl From<EmployeeInput> for NewEmployee {
    fn from(input: EmployeeInput) -> Self {
        NewEmployee {
            name: input.name,
            picture: input.picture,
            rg: input.rg,
            id_department: input.id_department,
            is_deleted: false,
        }
    }
}
