//! Wire types of the registration backend
//!
//! Field names follow the backend's JSON exactly (Spanish, including `contraseña`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Login request body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub correo: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    pub user: UserProfile,
}

/// Profile of a back-office user (admin or jury member)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    pub rol: Role,
}

/// User role as reported by the backend.
///
/// The set is open: roles this client does not know are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Jurado,
    Participante,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Jurado => "jurado",
            Self::Participante => "participante",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            "jurado" => Self::Jurado,
            "participante" => Self::Participante,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pendiente,
    Aprobado,
    Rechazado,
}

impl RegistrationStatus {
    pub const ALL: [Self; 3] = [Self::Pendiente, Self::Aprobado, Self::Rechazado];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Aprobado => "aprobado",
            Self::Rechazado => "rechazado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Contest category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "KOE SAN")]
    KoeSan,
    #[serde(rename = "KOE SAI")]
    KoeSai,
    #[serde(rename = "TSUKAMU KOE")]
    TsukamuKoe,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::KoeSan, Self::KoeSai, Self::TsukamuKoe];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KoeSan => "KOE SAN",
            Self::KoeSai => "KOE SAI",
            Self::TsukamuKoe => "TSUKAMU KOE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }
}

/// Public sign-up form submitted to `POST /api/inscripciones`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub nombre_completo: String,
    pub nombre_artistico: String,
    pub telefono: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    pub categoria: Category,
    pub municipio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sede: Option<String>,
}

/// A stored registration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub nombre_completo: String,
    pub nombre_artistico: String,
    pub telefono: String,
    #[serde(default)]
    pub correo: Option<String>,
    pub categoria: Category,
    pub municipio: String,
    #[serde(default)]
    pub sede: Option<String>,
    #[serde(default)]
    pub estatus: RegistrationStatus,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub fecha_inscripcion: Option<String>,
}

/// Query parameters of `GET /api/admin/inscripciones`; unset or blank fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFilter {
    pub estatus: Option<RegistrationStatus>,
    pub categoria: Option<Category>,
    pub search: Option<String>,
}

impl RegistrationFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(estatus) = self.estatus {
            pairs.push(("estatus", estatus.as_str().to_owned()));
        }
        if let Some(categoria) = self.categoria {
            pairs.push(("categoria", categoria.as_str().to_owned()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search", search.to_owned()));
            }
        }
        pairs
    }
}

/// Body of `PUT /api/admin/inscripciones/{id}/estatus`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub estatus: RegistrationStatus,
    #[serde(default)]
    pub observaciones: String,
}

/// Landing page counters from `GET /api/estadisticas`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicStatistics {
    #[serde(default)]
    pub total_inscritos: u64,
    #[serde(default)]
    pub total_municipios: u64,
    #[serde(default)]
    pub total_votos: u64,
}

/// Back-office statistics from `GET /api/admin/estadisticas`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStatistics {
    pub total_inscritos: u64,
    pub total_sedes: u64,
    pub total_rondas: u64,
    pub inscritos_pendientes: u64,
    pub inscritos_aprobados: u64,
    pub inscritos_rechazados: u64,
    pub videos_subidos: u64,
    pub videos_aprobados: u64,
    pub inscritos_por_categoria: BTreeMap<String, u64>,
    pub inscritos_por_sede: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_request_uses_backend_field_names() {
        let body = serde_json::to_value(LoginRequest {
            correo: "admin@karaokesenso.com".into(),
            contrasena: "admin123".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"correo": "admin@karaokesenso.com", "contraseña": "admin123"})
        );
    }

    #[test]
    fn unknown_roles_are_preserved() {
        let profile: UserProfile =
            serde_json::from_value(json!({"id": 7, "nombre": "Ana", "rol": "moderador"})).unwrap();
        assert_eq!(profile.rol, Role::Other("moderador".into()));
        assert_eq!(profile.correo, None);
        assert_eq!(serde_json::to_value(&profile).unwrap()["rol"], "moderador");
    }

    #[test]
    fn filter_omits_blank_values() {
        let filter = RegistrationFilter {
            estatus: Some(RegistrationStatus::Aprobado),
            categoria: None,
            search: Some("   ".into()),
        };
        assert_eq!(filter.query_pairs(), vec![("estatus", "aprobado".to_owned())]);
    }

    #[test]
    fn admin_statistics_tolerate_missing_fields() {
        let stats: AdminStatistics = serde_json::from_value(json!({
            "total_inscritos": 4,
            "inscritos_por_categoria": {"KOE SAN": 3, "KOE SAI": 1}
        }))
        .unwrap();
        assert_eq!(stats.total_inscritos, 4);
        assert_eq!(stats.total_sedes, 0);
        assert_eq!(stats.inscritos_por_categoria["KOE SAN"], 3);
    }

    #[test]
    fn category_round_trips_through_display_names() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(
            serde_json::to_value(Category::TsukamuKoe).unwrap(),
            json!("TSUKAMU KOE")
        );
    }
}
