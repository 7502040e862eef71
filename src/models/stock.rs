use serde::Serialize;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "stocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub stock_id: i64,
    pub name: String,
    // NUMERIC en base, nombre JSON dans les réponses (pas une string)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub company: String,
}

// Aucune relation : stocks est la seule table
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
