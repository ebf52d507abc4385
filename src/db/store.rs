//! Persistence operations behind the department and employee handlers.

use crate::db::Database;
use crate::models::department::{Department, DepartmentInput, NewDepartment};
use crate::models::employee::{Employee, EmployeeInput, NewEmployee};

/// Update and delete report the number of rows touched; zero is not an error.
pub trait DepartmentStore: 'static {
    /// Departments that are not soft-deleted, in store order.
    async fn list_departments(&self) -> Result<Vec<Department>, sqlx::Error>;
    /// Looks up by id regardless of `is_deleted`.
    async fn get_department(&self, id: i32) -> Result<Option<Department>, sqlx::Error>;
    async fn create_department(&self, department: NewDepartment) -> Result<i32, sqlx::Error>;
    async fn update_department(&self, id: i32, input: DepartmentInput) -> Result<u64, sqlx::Error>;
    async fn delete_department(&self, id: i32) -> Result<u64, sqlx::Error>;
}

pub trait EmployeeStore: 'static {
    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error>;
    async fn list_employees_by_department(&self, id_department: i32) -> Result<Vec<Employee>, sqlx::Error>;
    async fn get_employee(&self, id: i32) -> Result<Option<Employee>, sqlx::Error>;
    async fn create_employee(&self, employee: NewEmployee) -> Result<i32, sqlx::Error>;
    async fn update_employee(&self, id: i32, input: EmployeeInput) -> Result<u64, sqlx::Error>;
    async fn delete_employee(&self, id: i32) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgStore {
    db: Database,
}

impl PgStore {
    pub fn new(db: Database) -> Self {
        PgStore { db }
    }
}

impl DepartmentStore for PgStore {
    async fn list_departments(&self) -> Result<Vec<Department>, sqlx::Error> {
        self.db
            .query_many(
                "SELECT id, name, acronym, is_deleted FROM departments WHERE is_deleted = FALSE",
                pg_args![],
            )
            .await
    }

    async fn get_department(&self, id: i32) -> Result<Option<Department>, sqlx::Error> {
        self.db
            .query_one(
                "SELECT id, name, acronym, is_deleted FROM departments WHERE id = $1",
                pg_args![id],
            )
            .await
    }

    async fn create_department(&self, department: NewDepartment) -> Result<i32, sqlx::Error> {
        self.db
            .execute_scalar(
                "INSERT INTO departments (name, acronym, is_deleted) VALUES ($1, $2, $3) RETURNING id",
                pg_args![department.name, department.acronym, department.is_deleted],
            )
            .await
    }

    async fn update_department(&self, id: i32, input: DepartmentInput) -> Result<u64, sqlx::Error> {
        self.db
            .execute(
                "UPDATE departments SET name = $1, acronym = $2 WHERE id = $3",
                pg_args![input.name, input.acronym, id],
            )
            .await
    }

    async fn delete_department(&self, id: i32) -> Result<u64, sqlx::Error> {
        self.db
            .execute("UPDATE departments SET is_deleted = TRUE WHERE id = $1", pg_args![id])
            .await
    }
}

impl EmployeeStore for PgStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        self.db
            .query_many(
                "SELECT id, name, picture, rg, id_department, is_deleted FROM employees WHERE is_deleted = FALSE",
                pg_args![],
            )
            .await
    }

    async fn list_employees_by_department(&self, id_department: i32) -> Result<Vec<Employee>, sqlx::Error> {
        self.db
            .query_many(
                "SELECT id, name, picture, rg, id_department, is_deleted FROM employees \
                 WHERE is_deleted = FALSE AND id_department = $1",
                pg_args![id_department],
            )
            .await
    }

    async fn get_employee(&self, id: i32) -> Result<Option<Employee>, sqlx::Error> {
        self.db
            .query_one(
                "SELECT id, name, picture, rg, id_department, is_deleted FROM employees WHERE id = $1",
                pg_args![id],
            )
            .await
    }

    async fn create_employee(&self, employee: NewEmployee) -> Result<i32, sqlx::Error> {
        self.db
            .execute_scalar(
                "INSERT INTO employees (name, picture, rg, id_department, is_deleted) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING id",
                pg_args![
                    employee.name,
                    employee.picture,
                    employee.rg,
                    employee.id_department,
                    employee.is_deleted,
                ],
            )
            .await
    }

    async fn update_employee(&self, id: i32, input: EmployeeInput) -> Result<u64, sqlx::Error> {
        self.db
            .execute(
                "UPDATE employees SET name = $1, picture = $2, rg = $3, id_department = $4 WHERE id = $5",
                pg_args![input.name, input.picture, input.rg, input.id_department, id],
            )
            .await
    }

    async fn delete_employee(&self, id: i32) -> Result<u64, sqlx::Error> {
        self.db
            .execute("UPDATE employees SET is_deleted = TRUE WHERE id = $1", pg_args![id])
            .await
    }
}

#[cfg(test)]
mod tests {
    //! Round trips against a real PostgreSQL. Run with
    //! `DATABASE_URL=postgres://... cargo test -- --ignored` on a disposable database.

    use super::*;
    use crate::config::Config;

    async fn setup() -> PgStore {
        let config = Config::from_env().unwrap();
        let db = Database::connect(&config).await.unwrap();
        db.migrate().await.unwrap();
        PgStore::new(db)
    }

    #[actix_web::test]
    #[ignore = "requires DATABASE_URL pointing at a disposable PostgreSQL database"]
    async fn department_soft_delete_round_trip() {
        let store = setup().await;

        let id = store
            .create_department(NewDepartment {
                name: Some("Engineering".to_string()),
                acronym: Some("ENG".to_string()),
                is_deleted: false,
            })
            .await
            .unwrap();

        let fetched = store.get_department(id).await.unwrap().unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Engineering"));
        assert!(!fetched.is_deleted);

        assert_eq!(store.delete_department(id).await.unwrap(), 1);
        assert_eq!(store.delete_department(id).await.unwrap(), 1);

        let listed = store.list_departments().await.unwrap();
        assert!(listed.iter().all(|d| d.id != id));
        assert!(store.get_department(id).await.unwrap().unwrap().is_deleted);
    }

    #[actix_web::test]
    #[ignore = "requires DATABASE_URL pointing at a disposable PostgreSQL database"]
    async fn employees_filter_by_department() {
        let store = setup().await;
        let dep = store
            .create_department(NewDepartment {
                name: Some("Sales".to_string()),
                acronym: None,
                is_deleted: false,
            })
            .await
            .unwrap();

        let new_employee = |id_department| NewEmployee {
            name: Some("Ana".to_string()),
            picture: None,
            rg: Some("12.345.678-9".to_string()),
            id_department,
            is_deleted: false,
        };
        let kept = store.create_employee(new_employee(Some(dep))).await.unwrap();
        let deleted = store.create_employee(new_employee(Some(dep))).await.unwrap();
        store.create_employee(new_employee(None)).await.unwrap();
        store.delete_employee(deleted).await.unwrap();

        let ids: Vec<i32> = store
            .list_employees_by_department(dep)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![kept]);

        assert_eq!(store.update_employee(i32::MAX, EmployeeInput::default()).await.unwrap(), 0);
    }
}
