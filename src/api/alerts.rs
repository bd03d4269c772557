//! Entity alert headers
//!
//! Clients are notified of entity changes through a pair of response
//! headers: an alert key (`roomdeskApp.room.created`) and its parameter
//! (usually the entity identifier).

use axum::http::{HeaderMap, HeaderValue};

pub const APPLICATION_NAME: &str = "roomdeskApp";

pub const ALERT_HEADER: &str = "x-roomdeskapp-alert";
pub const ERROR_HEADER: &str = "x-roomdeskapp-error";
pub const PARAMS_HEADER: &str = "x-roomdeskapp-params";

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => tracing::warn!("Dropping non-printable alert header value for {}", name),
    }
}

pub fn alert(message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, ALERT_HEADER, message);
    insert(&mut headers, PARAMS_HEADER, param);
    headers
}

pub fn entity_creation_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert(&format!("{}.{}.created", APPLICATION_NAME, entity_name), param)
}

pub fn entity_update_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert(&format!("{}.{}.updated", APPLICATION_NAME, entity_name), param)
}

pub fn entity_deletion_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert(&format!("{}.{}.deleted", APPLICATION_NAME, entity_name), param)
}

/// Headers attached to a rejected request (`error.<key>` + entity name)
pub fn failure_alert(entity_name: &str, error_key: &str) -> HeaderMap {
    tracing::debug!("Entity processing failed, {}", error_key);
    let mut headers = HeaderMap::new();
    insert(&mut headers, ERROR_HEADER, &format!("error.{}", error_key));
    insert(&mut headers, PARAMS_HEADER, entity_name);
    headers
}
