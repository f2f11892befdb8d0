use serde::Deserialize;

/// A person who may own cars.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// A car, linked to its owner by `owner_id` only.
///
/// Nothing guarantees the owner exists: once a user is removed, their cars
/// keep pointing at the old id.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i32,
    pub brand: String,
    #[serde(default)]
    pub speed: Option<i32>,
    pub owner_id: i32,
}

/// Arguments for [Store::create_car](crate::Store::create_car).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCar {
    pub brand: String,
    pub owner_id: i32,
    pub speed: Option<i32>,
}

impl NewCar {
    pub fn new<S: Into<String>>(brand: S, owner_id: i32) -> Self {
        Self {
            brand: brand.into(),
            owner_id,
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = Some(speed);
        self
    }
}
