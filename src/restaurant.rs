//! Restaurant entity
//!
//! A restaurant is built as a `NewRestaurant` and becomes a `Restaurant`
//! once the store has assigned it an identifier.

use serde::{Deserialize, Serialize};

/// Database-assigned restaurant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub i64);

impl RestaurantId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A restaurant that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    /// Street address
    pub address: String,
    /// Postal code
    pub zip: String,
    pub phone: String,
    pub website: String,
    pub email: String,
}

impl NewRestaurant {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        website: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            zip: zip.into(),
            phone: phone.into(),
            website: website.into(),
            email: email.into(),
        }
    }
}

/// A stored restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub zip: String,
    pub phone: String,
    pub website: String,
    pub email: String,
}

impl Restaurant {
    /// Attach a freshly assigned identifier to an unsaved restaurant
    pub fn from_new(id: RestaurantId, new: &NewRestaurant) -> Self {
        Self {
            id,
            name: new.name.clone(),
            address: new.address.clone(),
            zip: new.zip.clone(),
            phone: new.phone.clone(),
            website: new.website.clone(),
            email: new.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fish_witch() -> NewRestaurant {
        NewRestaurant::new(
            "Fish Witch",
            "214 NE Broadway",
            "97232",
            "503-402-9874",
            "http://fishwitch.com",
            "hellofishy@fishwitch.com",
        )
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let restaurant = Restaurant::from_new(RestaurantId(7), &fish_witch());
        assert_eq!(restaurant.id.get(), 7);
        assert_eq!(restaurant.name, "Fish Witch");
        assert_eq!(restaurant.zip, "97232");
        assert_eq!(restaurant.email, "hellofishy@fishwitch.com");
    }

    #[test]
    fn test_id_serializes_as_plain_integer() {
        let restaurant = Restaurant::from_new(RestaurantId(3), &fish_witch());
        let json = serde_json::to_value(&restaurant).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["website"], "http://fishwitch.com");
    }
}
