use crate::server::{
    data::{memory::InMemoryCityInfoStore, CityInfoStore},
    error::store::StoreError,
    model::point_of_interest::NewPointOfInterest,
};

mod add_point_of_interest;
mod get_city;
mod remove_point_of_interest;
mod update_point_of_interest;

fn draft(city_id: i32, name: &str) -> NewPointOfInterest {
    NewPointOfInterest {
        city_id,
        name: name.to_string(),
        description: None,
    }
}
