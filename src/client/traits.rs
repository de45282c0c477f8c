pub mod backend_query;
