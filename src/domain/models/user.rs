use serde::{Deserialize, Serialize};

/// A user record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: Option<String>,
    #[serde(rename = "fotoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "genero", default)]
    pub gender: Option<String>,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "carrera", default)]
    pub degree: Option<String>,
    #[serde(rename = "codigoEstudiante", default)]
    pub student_code: Option<String>,
    #[serde(rename = "centroUniversitario", default)]
    pub campus: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "colonia", default)]
    pub neighborhood: Option<String>,
    #[serde(rename = "latitud", default)]
    pub latitude: Option<f64>,
    #[serde(rename = "longitud", default)]
    pub longitude: Option<f64>,
    #[serde(rename = "acercaDe", default)]
    pub about: Option<String>,
    #[serde(rename = "emailVerificado", default)]
    pub email_verified: Option<bool>,
    #[serde(rename = "telefonoVerificado", default)]
    pub phone_verified: Option<bool>,
    #[serde(rename = "registroCompleto")]
    pub registration_complete: bool,
    #[serde(rename = "cuentaActiva", default)]
    pub account_active: Option<bool>,
    #[serde(rename = "ratingPromedio", default)]
    pub average_rating: Option<f64>,
    #[serde(rename = "totalViajesConductor", default)]
    pub trips_as_driver: Option<u32>,
    #[serde(rename = "totalViajesPasajero", default)]
    pub trips_as_passenger: Option<u32>,
    #[serde(rename = "totalCalificaciones", default)]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }

    pub fn rating(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }

    pub fn total_trips(&self) -> u32 {
        self.trips_as_driver.unwrap_or(0) + self.trips_as_passenger.unwrap_or(0)
    }
}

/// Aggregate rating and trip counters for a user.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "ratingPromedio", default)]
    pub average_rating: f64,
    #[serde(rename = "totalViajesConductor", default)]
    pub trips_as_driver: u32,
    #[serde(rename = "totalViajesPasajero", default)]
    pub trips_as_passenger: u32,
    #[serde(rename = "totalCalificaciones", default)]
    pub rating_count: u32,
}

impl UserStats {
    pub fn has_ratings(&self) -> bool {
        self.rating_count > 0
    }
}

/// Partial profile update; unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "genero", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "carrera", skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(rename = "centroUniversitario", skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "colonia", skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(rename = "latitud", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitud", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "acercaDe", skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Fields collected by the second registration step.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompleteRegistration {
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "genero", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "carrera", skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(rename = "codigoEstudiante", skip_serializing_if = "Option::is_none")]
    pub student_code: Option<String>,
    #[serde(rename = "centroUniversitario", skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "acercaDe", skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}
