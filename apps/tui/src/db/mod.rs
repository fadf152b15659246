pub mod migrations;
pub mod models;
pub mod queries;
pub mod seed;
pub use migrations::{
    create_database_pool, create_pool_with_url, seed_alternatives, setup_database,
};
