pub mod postgres;

pub use postgres::PostgresFleetStore;
