use garageql_store::NewCar;
use juniper::{graphql_object, FieldResult};

use super::errors::field_error;
use super::objects::{nullable_list, Car, User};
use super::Ctx;

pub struct Query;

#[graphql_object(context = Ctx, description = "Root query")]
impl Query {
    /// A list of users.
    fn users(context: &Ctx) -> Option<Vec<Option<User>>> {
        nullable_list(context.store().users())
    }

    /// Single user.
    fn user(context: &Ctx, id: i32) -> Option<User> {
        context.store().user(id).map(User::from)
    }

    /// A list of cars
    fn cars(context: &Ctx) -> Option<Vec<Option<Car>>> {
        nullable_list(context.store().cars())
    }

    /// Single car
    fn car(context: &Ctx, id: i32) -> Option<Car> {
        context.store().car(id).map(Car::from)
    }
}

pub struct Mutation;

#[graphql_object(context = Ctx, description = "Root mutation")]
impl Mutation {
    /// Create a user.
    fn create_user(context: &Ctx, name: String) -> FieldResult<Option<User>> {
        let user = context.store_mut().create_user(name).map_err(field_error)?;
        Ok(Some(user.into()))
    }

    /// Create a car.
    fn create_car(
        context: &Ctx,
        brand: String,
        owner_id: i32,
        speed: Option<i32>,
    ) -> FieldResult<Option<Car>> {
        let new_car = NewCar {
            brand,
            owner_id,
            speed,
        };
        let car = context.store_mut().create_car(new_car).map_err(field_error)?;
        Ok(Some(car.into()))
    }

    /// Remove a user
    fn remove_user(context: &Ctx, id: i32) -> Option<Vec<Option<User>>> {
        nullable_list(context.store_mut().remove_user(id))
    }
}
