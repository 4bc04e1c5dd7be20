pub mod store_service;
