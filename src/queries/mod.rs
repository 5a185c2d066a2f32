pub mod catalog_queries;
