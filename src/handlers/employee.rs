use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::handlers::IdQuery;
use crate::models::employee::{EmployeeInput, NewEmployee};

pub async fn get_employees<S: EmployeeStore>(
    store: web::Data<S>,
) -> Result<HttpResponse, AppError> {
    let employees = store.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_by_department<S: EmployeeStore>(
    store: web::Data<S>,
    id_department: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employees = store
        .list_employees_by_department(id_department.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee<S: EmployeeStore>(
    store: web::Data<S>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    match store.get_employee(id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::NotFound(format!("Employee {} not found", id))),
    }
}

/// `idDepartment` is stored as given; it is not checked against existing departments.
pub async fn create_employee<S: EmployeeStore>(
    store: web::Data<S>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = NewEmployee::from(input.into_inner());
    let id = store.create_employee(employee).await?;

    info!("Created employee {}", id);
    Ok(HttpResponse::Ok().json(id))
}

pub async fn update_employee<S: EmployeeStore>(
    store: web::Data<S>,
    query: web::Query<IdQuery>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let id = query.id;

    if store.update_employee(id, input.into_inner()).await? == 0 {
        debug!("Update of employee {} matched no rows", id);
    } else {
        info!("Updated employee {}", id);
    }
    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_employee<S: EmployeeStore>(
    store: web::Data<S>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    if store.delete_employee(id).await? == 0 {
        debug!("Delete of employee {} matched no rows", id);
    } else {
        info!("Deleted employee {}", id);
    }
    Ok(HttpResponse::NoContent().finish())
}
