pub mod _entities;
pub mod categories;
pub mod products;
pub mod users;
