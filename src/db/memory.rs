//! In-memory stand-in for `PgStore`, used by the handler tests.

use tokio::sync::RwLock;

use crate::db::{DepartmentStore, EmployeeStore};
use crate::models::department::{Department, DepartmentInput, NewDepartment};
use crate::models::employee::{Employee, EmployeeInput, NewEmployee};

#[derive(Default)]
pub struct MemoryStore {
    departments: RwLock<Vec<Department>>,
    employees: RwLock<Vec<Employee>>,
}

impl DepartmentStore for MemoryStore {
    async fn list_departments(&self) -> Result<Vec<Department>, sqlx::Error> {
        let departments = self.departments.read().await;
        Ok(departments.iter().filter(|d| !d.is_deleted).cloned().collect())
    }

    async fn get_department(&self, id: i32) -> Result<Option<Department>, sqlx::Error> {
        let departments = self.departments.read().await;
        Ok(departments.iter().find(|d| d.id == id).cloned())
    }

    async fn create_department(&self, department: NewDepartment) -> Result<i32, sqlx::Error> {
        let mut departments = self.departments.write().await;
        // SERIAL starts at 1
        let id = departments.len() as i32 + 1;
        departments.push(Department {
            id,
            name: department.name,
            acronym: department.acronym,
            is_deleted: department.is_deleted,
        });
        Ok(id)
    }

    async fn update_department(&self, id: i32, input: DepartmentInput) -> Result<u64, sqlx::Error> {
        let mut departments = self.departments.write().await;
        Ok(match departments.iter_mut().find(|d| d.id == id) {
            Some(department) => {
                department.name = input.name;
                department.acronym = input.acronym;
                1
            }
            None => 0,
        })
    }

    async fn delete_department(&self, id: i32) -> Result<u64, sqlx::Error> {
        let mut departments = self.departments.write().await;
        Ok(match departments.iter_mut().find(|d| d.id == id) {
            Some(department) => {
                department.is_deleted = true;
                1
            }
            None => 0,
        })
    }
}

impl EmployeeStore for MemoryStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let employees = self.employees.read().await;
        Ok(employees.iter().filter(|e| !e.is_deleted).cloned().collect())
    }

    async fn list_employees_by_department(&self, id_department: i32) -> Result<Vec<Employee>, sqlx::Error> {
        let employees = self.employees.read().await;
        Ok(employees
            .iter()
            .filter(|e| !e.is_deleted && e.id_department == Some(id_department))
            .cloned()
            .collect())
    }

    async fn get_employee(&self, id: i32) -> Result<Option<Employee>, sqlx::Error> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn create_employee(&self, employee: NewEmployee) -> Result<i32, sqlx::Error> {
        let mut employees = self.employees.write().await;
        let id = employees.len() as i32 + 1;
        employees.push(Employee {
            id,
            name: employee.name,
            picture: employee.picture,
            rg: employee.rg,
            id_department: employee.id_department,
            is_deleted: employee.is_deleted,
        });
        Ok(id)
    }

    async fn update_employee(&self, id: i32, input: EmployeeInput) -> Result<u64, sqlx::Error> {
        let mut employees = self.employees.write().await;
        Ok(match employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.name = input.name;
                employee.picture = input.picture;
                employee.rg = input.rg;
                employee.id_department = input.id_department;
                1
            }
            None => 0,
        })
    }

    async fn delete_employee(&self, id: i32) -> Result<u64, sqlx::Error> {
        let mut employees = self.employees.write().await;
        Ok(match employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.is_deleted = true;
                1
            }
            None => 0,
        })
    }
}
