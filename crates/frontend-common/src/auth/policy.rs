//! Capability checks for the two back-office roles
//!
//! `admin` is a strict superset of `jurado`. There is no per-resource grant
//! model; a view names at most one capability it needs.

use super::credential::{Role, UserProfile};
use std::fmt;

/// Access level a view can require
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Admin,
    Jurado,
    /// A capability name this client does not know. Grants access (see `can_access`).
    Other(String),
}

impl Capability {
    pub fn parse(name: &str) -> Self {
        match name {
            "admin" => Self::Admin,
            "jurado" => Self::Jurado,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Jurado => "jurado",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `profile` holds `required`.
///
/// No profile never has access. No requirement, or an unrecognized one, is
/// granted to any signed-in user.
// TODO: decide with the back-office owners whether `Capability::Other` should deny instead of allow.
pub fn can_access(profile: Option<&UserProfile>, required: Option<&Capability>) -> bool {
    let Some(profile) = profile else {
        return false;
    };

    match required {
        None => true,
        Some(Capability::Admin) => profile.rol == Role::Admin,
        Some(Capability::Jurado) => matches!(profile.rol, Role::Admin | Role::Jurado),
        Some(Capability::Other(name)) => {
            tracing::warn!(capability = %name, "unrecognized capability requested, allowing");
            true
        }
    }
}

pub fn is_admin(profile: Option<&UserProfile>) -> bool {
    profile.is_some_and(|profile| profile.rol == Role::Admin)
}

pub fn is_jurado(profile: Option<&UserProfile>) -> bool {
    profile.is_some_and(|profile| profile.rol == Role::Jurado)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_role(rol: Role) -> UserProfile {
        UserProfile {
            id: 1,
            nombre: "Test".into(),
            correo: None,
            rol,
        }
    }

    #[test]
    fn admin_holds_every_capability() {
        let admin = with_role(Role::Admin);
        assert!(can_access(Some(&admin), Some(&Capability::Admin)));
        assert!(can_access(Some(&admin), Some(&Capability::Jurado)));
    }

    #[test]
    fn jurado_is_not_admin() {
        let jurado = with_role(Role::Jurado);
        assert!(!can_access(Some(&jurado), Some(&Capability::Admin)));
        assert!(can_access(Some(&jurado), Some(&Capability::Jurado)));
    }

    #[test]
    fn other_roles_hold_nothing() {
        for rol in [Role::Participante, Role::Other("moderador".into())] {
            let user = with_role(rol);
            assert!(!can_access(Some(&user), Some(&Capability::Admin)));
            assert!(!can_access(Some(&user), Some(&Capability::Jurado)));
        }
    }

    #[test]
    fn no_profile_never_has_access() {
        for required in [
            None,
            Some(Capability::Admin),
            Some(Capability::Jurado),
            Some(Capability::Other("x".into())),
        ] {
            assert!(!can_access(None, required.as_ref()));
        }
    }

    #[test]
    fn missing_or_unknown_requirement_is_permissive() {
        let user = with_role(Role::Participante);
        assert!(can_access(Some(&user), None));
        assert!(can_access(Some(&user), Some(&Capability::parse("amdin"))));
    }

    #[test]
    fn parse_recognizes_known_names() {
        assert_eq!(Capability::parse("admin"), Capability::Admin);
        assert_eq!(Capability::parse("jurado"), Capability::Jurado);
        assert_eq!(Capability::parse("Admin"), Capability::Other("Admin".into()));
    }

    #[test]
    fn role_predicates() {
        assert!(is_admin(Some(&with_role(Role::Admin))));
        assert!(!is_jurado(Some(&with_role(Role::Admin))));
        assert!(is_jurado(Some(&with_role(Role::Jurado))));
        assert!(!is_admin(None));
    }
}
