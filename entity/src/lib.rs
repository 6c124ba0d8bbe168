pub mod prelude;

pub mod favorite_person;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;
