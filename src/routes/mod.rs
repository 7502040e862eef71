pub mod health;
pub mod stocks;

use actix_web::{error::JsonPayloadError, error::PathError, web, HttpRequest, HttpResponse};

use crate::error::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::ping).service(
        web::scope("/api")
            .app_data(path_config())
            .app_data(json_config())
            .service(health::health_check)
            .configure(stocks::stocks_routes),
    );
}

/// Réponse pour toute route inconnue
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("Route not found")
}

// id non entier => 400 (actix renvoie 404 par défaut)
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        ApiError::Validation(format!("Invalid stock id: {}", err)).into()
    })
}

// corps illisible => 400 avec {"error": ...}, Content-Type non obligatoire
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            ApiError::Validation(format!("Unable to decode the request body: {}", err)).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::DatabaseConnection;

    #[actix_web::test]
    async fn test_unknown_route() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(DatabaseConnection::Disconnected))
                .configure(configure_routes)
                .default_service(web::to(not_found)),
        )
        .await;

        for uri in ["/nope", "/api/nope", "/api/stock/1/extra"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
            let body = test::read_body(resp).await;
            assert_eq!(body, "Route not found");
        }
    }
}
