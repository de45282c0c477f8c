pub mod api_service_data;
