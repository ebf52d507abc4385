use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::db::DepartmentStore;
use crate::errors::AppError;
use crate::handlers::IdQuery;
use crate::models::department::{DepartmentInput, NewDepartment};

pub async fn get_departments<S: DepartmentStore>(
    store: web::Data<S>,
) -> Result<HttpResponse, AppError> {
    let departments = store.list_departments().await?;
    Ok(HttpResponse::Ok().json(departments))
}

/// Soft-deleted departments are still returned here, unlike the list.
pub async fn get_department<S: DepartmentStore>(
    store: web::Data<S>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    match store.get_department(id).await? {
        Some(department) => Ok(HttpResponse::Ok().json(department)),
        None => Err(AppError::NotFound(format!("Department {} not found", id))),
    }
}

pub async fn create_department<S: DepartmentStore>(
    store: web::Data<S>,
    input: web::Json<DepartmentInput>,
) -> Result<HttpResponse, AppError> {
    let department = NewDepartment::from(input.into_inner());
    let id = store.create_department(department).await?;

    info!("Created department {}", id);
    Ok(HttpResponse::Ok().json(id))
}

pub async fn update_department<S: DepartmentStore>(
    store: web::Data<S>,
    query: web::Query<IdQuery>,
    input: web::Json<DepartmentInput>,
) -> Result<HttpResponse, AppError> {
    let id = query.id;

    if store.update_department(id, input.into_inner()).await? == 0 {
        debug!("Update of department {} matched no rows", id);
    } else {
        info!("Updated department {}", id);
    }
    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_department<S: DepartmentStore>(
    store: web::Data<S>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    if store.delete_department(id).await? == 0 {
        debug!("Delete of department {} matched no rows", id);
    } else {
        info!("Deleted department {}", id);
    }
    Ok(HttpResponse::NoContent().finish())
}
