// connexion BD

use log::{info, LevelFilter};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::config::Config;

pub const CREATE_STOCKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS stocks (
    stock_id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    price NUMERIC NOT NULL,
    company TEXT NOT NULL
)";

/// Ouvre le pool de connexions et vérifie qu'il répond.
///
/// Le pool est créé une seule fois au démarrage puis partagé via web::Data.
/// Si le ping échoue, le serveur ne démarre pas.
pub async fn establish_connection(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(options).await?;
    db.ping().await?;

    Ok(db)
}

/// Crée la table stocks si elle n'existe pas encore
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(CREATE_STOCKS_TABLE).await?;
    info!("Table stocks ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Transaction};

    #[actix_web::test]
    async fn test_ensure_schema_creates_stocks_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        ensure_schema(&db).await.unwrap();

        assert_eq!(
            db.into_transaction_log(),
            vec![Transaction::one(Statement::from_string(
                DatabaseBackend::Postgres,
                CREATE_STOCKS_TABLE
            ))]
        );
    }

    #[actix_web::test]
    async fn test_ensure_schema_propagates_errors() {
        let result = ensure_schema(&DatabaseConnection::Disconnected).await;
        assert!(result.is_err());
    }
}
