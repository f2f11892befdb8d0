use garageql_store as store;
use juniper::graphql_object;

use super::Ctx;

pub struct User(store::User);

pub struct Car(store::Car);

#[graphql_object(context = Ctx, description = "This represent a user.")]
impl User {
    fn id(&self) -> i32 {
        self.0.id
    }

    fn name(&self) -> &str {
        &self.0.name
    }

    fn cars(&self, context: &Ctx) -> Option<Vec<Option<Car>>> {
        nullable_list(context.store().cars_by_owner(self.0.id))
    }
}

#[graphql_object(context = Ctx, description = "This represent a car for a user.")]
impl Car {
    fn id(&self) -> i32 {
        self.0.id
    }

    fn brand(&self) -> &str {
        &self.0.brand
    }

    fn speed(&self) -> Option<i32> {
        self.0.speed
    }

    fn owner_id(&self) -> i32 {
        self.0.owner_id
    }

    fn owner(&self, context: &Ctx) -> Option<User> {
        context.store().owner(&self.0).map(User::from)
    }
}

impl From<store::User> for User {
    fn from(user: store::User) -> Self {
        Self(user)
    }
}

impl From<&store::User> for User {
    fn from(user: &store::User) -> Self {
        Self(user.clone())
    }
}

impl From<store::Car> for Car {
    fn from(car: store::Car) -> Self {
        Self(car)
    }
}

impl From<&store::Car> for Car {
    fn from(car: &store::Car) -> Self {
        Self(car.clone())
    }
}

/// Shapes records as a GraphQL `[T]`: a nullable list of nullable items.
pub(crate) fn nullable_list<I, O>(records: I) -> Option<Vec<Option<O>>>
where
    I: IntoIterator,
    O: From<I::Item>,
{
    Some(records.into_iter().map(|r| Some(O::from(r))).collect())
}
