//! A GraphQL schema over the users and cars held by a
//! [garageql_store::Store].
//!
//! ```
//! use garageql::{schema, Ctx};
//! use juniper::{graphql_value, Variables};
//!
//! let ctx = Ctx::default();
//! let (res, _errors) = juniper::execute_sync(
//!     "{ car(id: 2) { owner { name } } }",
//!     None,
//!     &schema(),
//!     &Variables::new(),
//!     &ctx,
//! )
//! .unwrap();
//! assert_eq!(res, graphql_value!({"car": {"owner": {"name": "Ngimdock"}}}));
//! ```
mod context;
mod errors;
mod objects;
mod roots;

pub use context::Ctx;
pub use garageql_store as store;
pub use objects::{Car, User};
pub use roots::{Mutation, Query};

use juniper::{EmptySubscription, RootNode};

/// The executable schema.
pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<Ctx>>;

/// Builds the [Schema].
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
