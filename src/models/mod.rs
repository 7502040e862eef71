// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Liste des modules:
//   - health : Readiness check API
//   - stock : Table stocks (SeaORM)
//   - dto : Corps de requête / réponses de l'API stock
//
// Points d'attention:
//   - stock_id est généré par la base (BIGSERIAL), jamais par le client
//   - price est un NUMERIC côté PostgreSQL (rust_decimal::Decimal)
//
// ============================================================================

pub mod health;
pub mod stock;
pub mod dto;
