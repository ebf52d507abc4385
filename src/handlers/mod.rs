use actix_web::web;
use serde::Deserialize;

use crate::db::{DepartmentStore, EmployeeStore};
use crate::errors::AppError;

#[cfg(test)]
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(crate::db::memory::MemoryStore::default()))
                .configure(crate::handlers::configure::<crate::db::memory::MemoryStore>),
        )
        .await
    };
}

pub mod department;
pub mod employee;

/// `?id=N` on PUT requests.
#[derive(Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

/// Registers the `/api` routes against store `S`, which must already be
/// available as `web::Data<S>`.
pub fn configure<S>(cfg: &mut web::ServiceConfig)
where
    S: DepartmentStore + EmployeeStore,
{
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .service(
        web::scope("/api")
            .service(
                web::resource("/departments")
                    .route(web::get().to(department::get_departments::<S>))
                    .route(web::post().to(department::create_department::<S>))
                    .route(web::put().to(department::update_department::<S>)),
            )
            .service(
                web::resource("/departments/{id}")
                    .route(web::get().to(department::get_department::<S>))
                    .route(web::delete().to(department::delete_department::<S>)),
            )
            .service(
                web::resource("/employees")
                    .route(web::get().to(employee::get_employees::<S>))
                    .route(web::post().to(employee::create_employee::<S>))
                    .route(web::put().to(employee::update_employee::<S>)),
            )
            .service(
                web::resource("/employees/dep/{idDep}")
                    .route(web::get().to(employee::get_employees_by_department::<S>)),
            )
            .service(
                web::resource("/employees/{id}")
                    .route(web::get().to(employee::get_employee::<S>))
                    .route(web::delete().to(employee::delete_employee::<S>)),
            ),
    );
}
