use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "marca")]
    pub make: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "anio")]
    pub year: u16,
    pub color: String,
    #[serde(rename = "placas", default)]
    pub plates: Option<String>,
    #[serde(rename = "capacidadPasajeros")]
    pub passenger_capacity: u8,
    #[serde(rename = "verificado", default)]
    pub verified: bool,
    #[serde(rename = "fotoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "activo", default)]
    pub active: bool,
    #[serde(rename = "esPrincipal", default)]
    pub primary: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Vehicle {
    /// Human-readable label, e.g. `Nissan Versa 2020 (gris)`.
    pub fn label(&self) -> String {
        format!("{} {} {} ({})", self.make, self.model, self.year, self.color)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewVehicle {
    #[serde(rename = "marca")]
    pub make: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "anio")]
    pub year: u16,
    pub color: String,
    #[serde(rename = "placas", skip_serializing_if = "Option::is_none")]
    pub plates: Option<String>,
    #[serde(rename = "capacidadPasajeros", skip_serializing_if = "Option::is_none")]
    pub passenger_capacity: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VehicleUpdate {
    #[serde(rename = "marca", skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(rename = "modelo", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "anio", skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "placas", skip_serializing_if = "Option::is_none")]
    pub plates: Option<String>,
    #[serde(rename = "capacidadPasajeros", skip_serializing_if = "Option::is_none")]
    pub passenger_capacity: Option<u8>,
}

impl VehicleUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
