pub mod maps_service_error;
