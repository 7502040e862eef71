use sea_orm::*;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use log::debug;
use crate::models::stock::{self, Entity as Stock};
use crate::models::dto::{NewStock, StockChanges};

pub struct StockService;

impl StockService {
    /// Insère un stock et retourne l'id généré par la base
    pub async fn create(db: &DatabaseConnection, stock: NewStock) -> Result<i64, DbErr> {
        let new_stock = stock::ActiveModel {
            name: Set(stock.name),
            price: Set(stock.price),
            company: Set(stock.company),
            ..Default::default()
        };

        let result = Stock::insert(new_stock).exec(db).await?;

        debug!("Inserted a single record {}", result.last_insert_id);
        Ok(result.last_insert_id)
    }

    /// Ok(None) si aucun stock ne correspond à cet id
    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<stock::Model>, DbErr> {
        Stock::find_by_id(id).one(db).await
    }

    /// Tous les stocks, dans l'ordre renvoyé par PostgreSQL
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<stock::Model>, DbErr> {
        let stocks = Stock::find().all(db).await?;

        debug!("Fetched {} stocks", stocks.len());
        Ok(stocks)
    }

    /// Update partiel, retourne le nombre de lignes affectées (0 = id inconnu)
    pub async fn update(db: &DatabaseConnection, id: i64, changes: StockChanges) -> Result<u64, DbErr> {
        if changes.is_empty() {
            debug!("No field to change for stock {}, row left as is", id);
        }

        let rows_affected = Self::coalesce_update(id, changes).exec(db).await?.rows_affected;

        debug!("Total rows/records affected {} (update stock {})", rows_affected, id);
        Ok(rows_affected)
    }

    // Merge "COALESCE" : une valeur NULL garde la valeur déjà en base.
    // Une seule requête, pas de transaction (last-write-wins entre updates concurrents).
    fn coalesce_update(id: i64, changes: StockChanges) -> UpdateMany<Stock> {
        Stock::update_many()
            .col_expr(stock::Column::Name, coalesce(stock::Column::Name, changes.name.into()))
            .col_expr(stock::Column::Price, coalesce(stock::Column::Price, changes.price.into()))
            .col_expr(stock::Column::Company, coalesce(stock::Column::Company, changes.company.into()))
            .filter(stock::Column::StockId.eq(id))
    }

    /// Supprime un stock, retourne le nombre de lignes affectées (0 = déjà absent)
    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
        let result = Stock::delete_by_id(id).exec(db).await?;

        debug!("Total rows/records affected {} (delete stock {})", result.rows_affected, id);
        Ok(result.rows_affected)
    }
}

// COALESCE($n, colonne)
fn coalesce(column: stock::Column, value: Value) -> SimpleExpr {
    SimpleExpr::from(Func::coalesce([SimpleExpr::Value(value), Expr::col(column).into()]))
}
