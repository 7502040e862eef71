use actix_web::{web, HttpResponse};
use log::info;
use sea_orm::DatabaseConnection;

use crate::error::ApiError;
use crate::models::dto::{MessageResponse, NewStock};
use crate::services::stock_service::StockService;

/// POST /api/newstock - Créer un stock
pub async fn create_stock(
    db: web::Data<DatabaseConnection>,
    body: web::Json<NewStock>,
) -> Result<HttpResponse, ApiError> {
    let id = StockService::create(db.get_ref(), body.into_inner()).await?;
    info!("Stock {} created", id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        id,
        message: "stock created successfully".to_string(),
    }))
}

/// GET /api/stock/{id} - Récupérer un stock
pub async fn get_stock(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match StockService::find_by_id(db.get_ref(), id).await? {
        Some(stock) => Ok(HttpResponse::Ok().json(stock)),
        None => Err(ApiError::NotFound(format!("Stock {} not found", id))),
    }
}

/// GET /api/stock - Tous les stocks (tableau vide si la table est vide)
pub async fn get_all_stocks(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let stocks = StockService::find_all(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(stocks))
}

/// PUT /api/stock/{id} - Update partiel ("" et 0 = champ inchangé)
pub async fn update_stock(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
    body: web::Json<NewStock>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let updated_rows = StockService::update(db.get_ref(), id, body.into_inner().into()).await?;

    if updated_rows == 0 {
        return Err(ApiError::NotFound(format!("Stock {} not found", id)));
    }

    info!("Stock {} updated", id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        id,
        message: format!("Stock updated successfully. Total rows/records affected {}", updated_rows),
    }))
}

/// DELETE /api/deletestock/{id} - Supprimer un stock
///
/// 200 même si le stock n'existait plus : le message donne le nombre de lignes supprimées.
pub async fn delete_stock(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let deleted_rows = StockService::delete(db.get_ref(), id).await?;

    info!("Stock {} delete: {} row(s)", id, deleted_rows);
    Ok(HttpResponse::Ok().json(MessageResponse {
        id,
        message: format!("Stock deleted successfully. Total rows/records affected {}", deleted_rows),
    }))
}

pub fn stocks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/stock/{id}")
            .route(web::get().to(get_stock))
            .route(web::put().to(update_stock)),
    )
    .service(web::resource("/stock").route(web::get().to(get_all_stocks)))
    .service(web::resource("/newstock").route(web::post().to(create_stock)))
    .service(web::resource("/deletestock/{id}").route(web::delete().to(delete_stock)));
}
