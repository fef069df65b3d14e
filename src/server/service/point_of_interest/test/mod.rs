use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    model::point_of_interest::JsonPatchOperationDto,
    server::{
        data::{memory::InMemoryCityInfoStore, CityInfoStore},
        error::AppError,
        model::point_of_interest::{NewPointOfInterest, PointOfInterestForUpdate},
        service::{
            mail::testing::{RecordingMailService, SentMail},
            point_of_interest::PointOfInterestService,
        },
    },
};

mod delete;

struct Setup {
    store: Arc<InMemoryCityInfoStore>,
    service: PointOfInterestService,
    mail: UnboundedReceiver<SentMail>,
}

fn setup() -> Setup {
    let store = Arc::new(InMemoryCityInfoStore::seeded());
    let (mail_service, mail) = RecordingMailService::new();
    let service = PointOfInterestService::new(store.clone(), mail_service);

    Setup {
        store,
        service,
        mail,
    }
}

fn replace(path: &str, value: Value) -> JsonPatchOperationDto {
    JsonPatchOperationDto {
        op: "replace".to_string(),
        path: path.to_string(),
        value: Some(value),
        from: None,
    }
}

fn draft(city_id: i32, name: &str) -> NewPointOfInterest {
    NewPointOfInterest {
        city_id,
        name: name.to_string(),
        description: Some("A place worth a visit.".to_string()),
    }
}
