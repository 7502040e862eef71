pub mod stock_service;
