pub mod hashmap_user_store;
pub mod password;
pub mod postgres_user_store;

pub use hashmap_user_store::HashMapUserStore;
pub use postgres_user_store::PostgresUserStore;
