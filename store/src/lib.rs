//! In-memory users and cars.
//!
//! A [Store] owns both collections and answers the lookups a GraphQL
//! resolver needs. Cars refer to their owner by id only; there is no
//! back-index, so relational lookups are linear scans in collection order.
use std::collections::HashSet;
use thiserror::Error;

mod entities;
pub use entities::{Car, NewCar, User};
mod seed;
pub use seed::Seed;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid `{field}`: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },
    #[error("No user with id `{0}` to own this car")]
    UnknownOwner(i32),
    #[error("Duplicate {entity} id `{id}` in seed data")]
    DuplicateId { entity: &'static str, id: i32 },
    #[error("No {0} ids left to assign")]
    IdsExhausted(&'static str),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whether [Store::create_car] checks that the owner exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnerPolicy {
    /// Any owner id is accepted; unknown owners resolve to nothing.
    Permissive,
    /// Unknown owner ids are rejected with [StoreError::UnknownOwner].
    Strict,
}

impl Default for OwnerPolicy {
    fn default() -> Self {
        Self::Permissive
    }
}

/// Whether `name` and `brand` may be empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextPolicy {
    /// Any string is accepted, including `""`.
    Permissive,
    /// Empty or whitespace-only text is rejected with
    /// [StoreError::Validation].
    NonBlank,
}

impl Default for TextPolicy {
    fn default() -> Self {
        Self::Permissive
    }
}

/// Hands out ids that are never reused, even after removals.
#[derive(Debug)]
struct IdCounter {
    next: Option<i32>,
}

impl IdCounter {
    fn after<I: IntoIterator<Item = i32>>(ids: I) -> Self {
        let max = ids.into_iter().max().unwrap_or(0).max(0);
        Self {
            next: max.checked_add(1),
        }
    }

    fn take(&mut self, entity: &'static str) -> Result<i32, StoreError> {
        let id = self.next.ok_or(StoreError::IdsExhausted(entity))?;
        self.next = id.checked_add(1);
        Ok(id)
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    cars: Vec<Car>,
    user_ids: IdCounter,
    car_ids: IdCounter,
    policy: OwnerPolicy,
    text_policy: TextPolicy,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding [Seed::demo].
    pub fn seeded() -> Self {
        Self::assemble(Seed::demo())
    }

    /// Builds a store from arbitrary seed data, rejecting duplicate ids.
    pub fn from_seed(seed: Seed) -> Result<Self, StoreError> {
        check_unique("user", seed.users.iter().map(|u| u.id))?;
        check_unique("car", seed.cars.iter().map(|c| c.id))?;
        Ok(Self::assemble(seed))
    }

    fn assemble(seed: Seed) -> Self {
        let Seed { users, cars } = seed;
        Self {
            user_ids: IdCounter::after(users.iter().map(|u| u.id)),
            car_ids: IdCounter::after(cars.iter().map(|c| c.id)),
            users,
            cars,
            policy: OwnerPolicy::default(),
            text_policy: TextPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OwnerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OwnerPolicy {
        self.policy
    }

    pub fn with_text_policy(mut self, text_policy: TextPolicy) -> Self {
        self.text_policy = text_policy;
        self
    }

    pub fn text_policy(&self) -> TextPolicy {
        self.text_policy
    }

    /// All users, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// All cars, in insertion order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: i32) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    /// Cars whose `owner_id` is `user_id`, in collection order. The user
    /// need not exist.
    pub fn cars_by_owner(&self, user_id: i32) -> Vec<&Car> {
        self.cars
            .iter()
            .filter(|car| car.owner_id == user_id)
            .collect()
    }

    /// The user `car` points at, if they still exist.
    pub fn owner(&self, car: &Car) -> Option<&User> {
        let owner = self.user(car.owner_id);
        if owner.is_none() {
            log::debug!("car {} has dangling owner {}", car.id, car.owner_id);
        }
        owner
    }

    pub fn create_user<S: Into<String>>(&mut self, name: S) -> Result<User, StoreError> {
        let name = name.into();
        self.check_text("name", &name)?;
        let user = User {
            id: self.user_ids.take("user")?,
            name,
        };
        self.users.push(user.clone());
        log::info!("created user {}", user.id);
        Ok(user)
    }

    pub fn create_car(&mut self, new_car: NewCar) -> Result<Car, StoreError> {
        let NewCar {
            brand,
            owner_id,
            speed,
        } = new_car;
        self.check_text("brand", &brand)?;
        if self.policy == OwnerPolicy::Strict && self.user(owner_id).is_none() {
            return Err(StoreError::UnknownOwner(owner_id));
        }
        let car = Car {
            id: self.car_ids.take("car")?,
            brand,
            speed,
            owner_id,
        };
        self.cars.push(car.clone());
        log::info!("created car {} for owner {}", car.id, car.owner_id);
        Ok(car)
    }

    fn check_text(&self, field: &'static str, value: &str) -> Result<(), StoreError> {
        if self.text_policy == TextPolicy::NonBlank && value.trim().is_empty() {
            return Err(StoreError::Validation {
                field,
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    /// Drops every user with this id and returns the users that remain.
    /// Their cars are kept, still pointing at the removed id.
    pub fn remove_user(&mut self, id: i32) -> Vec<User> {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        if self.users.len() != before {
            log::info!("removed user {}", id);
        }
        self.users.clone()
    }
}

fn check_unique<I: IntoIterator<Item = i32>>(
    entity: &'static str,
    ids: I,
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId { entity, id });
        }
    }
    Ok(())
}
