//pour les corps de requête et les réponses structurées
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Corps JSON de POST /api/newstock et PUT /api/stock/{id}
///
/// Un champ absent vaut sa valeur zéro ("" ou 0). Un éventuel stock_id
/// envoyé par le client est ignoré.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewStock {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub company: String,
}

/// Modifications à appliquer lors d'un update partiel.
/// None = garder la valeur stockée (bindé en NULL dans le COALESCE).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub company: Option<String>,
}

impl StockChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.company.is_none()
    }
}

// Limitation connue : "" et 0 veulent dire "pas de changement",
// impossible donc de remettre un prix à 0 via l'API.
impl From<NewStock> for StockChanges {
    fn from(stock: NewStock) -> Self {
        StockChanges {
            name: Some(stock.name).filter(|name| !name.is_empty()),
            price: Some(stock.price).filter(|price| !price.is_zero()),
            company: Some(stock.company).filter(|company| !company.is_empty()),
        }
    }
}

// {id, message} renvoyé par create / update / delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let stock: NewStock = serde_json::from_str(r#"{"company":"Acme Inc"}"#).unwrap();

        assert_eq!(stock.name, "");
        assert!(stock.price.is_zero());
        assert_eq!(stock.company, "Acme Inc");
    }

    #[test]
    fn test_price_accepts_integers_and_floats() {
        let stock: NewStock = serde_json::from_str(r#"{"price":10.5}"#).unwrap();
        assert_eq!(stock.price, Decimal::from_str("10.5").unwrap());

        let stock: NewStock = serde_json::from_str(r#"{"price":42}"#).unwrap();
        assert_eq!(stock.price, Decimal::from(42));
    }

    #[test]
    fn test_client_stock_id_is_ignored() {
        let stock: NewStock =
            serde_json::from_str(r#"{"stock_id":7,"name":"Acme","price":1,"company":"Acme Inc"}"#)
                .unwrap();
        assert_eq!(stock.name, "Acme");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<NewStock>(r#"{"price":"cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_values_become_none() {
        let changes = StockChanges::from(NewStock {
            name: String::new(),
            price: Decimal::ZERO,
            company: "NewCo".to_string(),
        });

        assert_eq!(
            changes,
            StockChanges {
                name: None,
                price: None,
                company: Some("NewCo".to_string()),
            }
        );
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_all_zero_values_is_empty() {
        assert!(StockChanges::from(NewStock::default()).is_empty());
    }
}
