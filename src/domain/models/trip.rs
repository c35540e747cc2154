use serde::{Deserialize, Serialize};

use super::{User, Vehicle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    #[serde(rename = "conductor", default)]
    pub driver: Option<User>,
    #[serde(rename = "conductorId", default)]
    pub driver_id: Option<String>,
    #[serde(rename = "vehiculo", default)]
    pub vehicle: Option<Vehicle>,
    #[serde(rename = "vehiculoId", default)]
    pub vehicle_id: Option<String>,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "origenLatitud", default)]
    pub origin_latitude: Option<f64>,
    #[serde(rename = "origenLongitud", default)]
    pub origin_longitude: Option<f64>,
    #[serde(rename = "destinoLatitud", default)]
    pub destination_latitude: Option<f64>,
    #[serde(rename = "destinoLongitud", default)]
    pub destination_longitude: Option<f64>,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "asientosTotales")]
    pub total_seats: u8,
    #[serde(rename = "asientosDisponibles")]
    pub available_seats: u8,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "metodosPago", default)]
    pub payment_methods: Vec<String>,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Trip {
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    pub fn is_full(&self) -> bool {
        self.available_seats == 0
    }

    pub fn driver_name(&self) -> String {
        self.driver
            .as_ref()
            .map(User::full_name)
            .unwrap_or_else(|| "(conductor desconocido)".to_string())
    }
}

/// One page of trip search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPage {
    pub data: Vec<Trip>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Trip search filters. Only set, non-empty filters are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripSearch {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TripSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Query parameters in the backend's naming, in a stable order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                params.push((key.to_string(), v));
            }
        };

        push("origen", self.origin.clone());
        push("destino", self.destination.clone());
        push("fecha", self.date.clone());
        push("hora", self.time.clone());
        push("precioMin", self.min_price.map(|p| p.to_string()));
        push("precioMax", self.max_price.map(|p| p.to_string()));
        push("page", self.page.map(|p| p.to_string()));
        push("limit", self.limit.map(|l| l.to_string()));

        params
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTrip {
    #[serde(rename = "vehiculoId")]
    pub vehicle_id: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "origenLatitud", skip_serializing_if = "Option::is_none")]
    pub origin_latitude: Option<f64>,
    #[serde(rename = "origenLongitud", skip_serializing_if = "Option::is_none")]
    pub origin_longitude: Option<f64>,
    #[serde(rename = "destinoLatitud", skip_serializing_if = "Option::is_none")]
    pub destination_latitude: Option<f64>,
    #[serde(rename = "destinoLongitud", skip_serializing_if = "Option::is_none")]
    pub destination_longitude: Option<f64>,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "asientosTotales")]
    pub total_seats: u8,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "metodosPago", skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripUpdate {
    #[serde(rename = "origen", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(rename = "destino", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "hora", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TripUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
