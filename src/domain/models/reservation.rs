use serde::{Deserialize, Serialize};

use super::{Trip, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    #[serde(rename = "viaje", default)]
    pub trip: Option<Trip>,
    #[serde(rename = "viajeId")]
    pub trip_id: String,
    #[serde(rename = "pasajero", default)]
    pub passenger: Option<User>,
    #[serde(rename = "pasajeroId")]
    pub passenger_id: String,
    #[serde(rename = "asientosReservados")]
    pub seats: u8,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "puntoEncuentroNombre", default)]
    pub meeting_point: Option<String>,
    #[serde(rename = "puntoEncuentroLatitud", default)]
    pub meeting_latitude: Option<f64>,
    #[serde(rename = "puntoEncuentroLongitud", default)]
    pub meeting_longitude: Option<f64>,
    #[serde(rename = "mensajePasajero", default)]
    pub passenger_message: Option<String>,
    #[serde(rename = "mensajeConductor", default)]
    pub driver_message: Option<String>,
    #[serde(rename = "confirmadaAt", default)]
    pub confirmed_at: Option<String>,
    #[serde(rename = "canceladaAt", default)]
    pub cancelled_at: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Reservation {
    pub fn meeting_point_label(&self) -> &str {
        self.meeting_point.as_deref().unwrap_or("(sin punto de encuentro)")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    #[serde(rename = "viajeId")]
    pub trip_id: String,
    #[serde(rename = "asientosReservados", skip_serializing_if = "Option::is_none")]
    pub seats: Option<u8>,
    #[serde(rename = "puntoEncuentroNombre", skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<String>,
    #[serde(rename = "puntoEncuentroLatitud", skip_serializing_if = "Option::is_none")]
    pub meeting_latitude: Option<f64>,
    #[serde(rename = "puntoEncuentroLongitud", skip_serializing_if = "Option::is_none")]
    pub meeting_longitude: Option<f64>,
    #[serde(rename = "mensajePasajero", skip_serializing_if = "Option::is_none")]
    pub passenger_message: Option<String>,
}

impl NewReservation {
    pub fn new(trip_id: impl Into<String>) -> Self {
        Self {
            trip_id: trip_id.into(),
            seats: None,
            meeting_point: None,
            meeting_latitude: None,
            meeting_longitude: None,
            passenger_message: None,
        }
    }
}
