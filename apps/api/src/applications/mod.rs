// CRUD surface over the application store, plus the request validation that
// guards it. Analytics lives in its own module and only reads from here.

pub mod handlers;
pub mod store;
pub mod validation;
