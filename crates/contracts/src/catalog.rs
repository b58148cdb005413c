use serde::{Deserialize, Serialize};

/// Label shown for ids the catalogs do not know about
pub const UNKNOWN_LABEL: &str = "Desconocido";

/// User roles as numbered by the backend (`id_rol`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administracion,
    Coordinacion,
    Lideracion,
    Desarrollo,
}

impl Role {
    pub fn id(&self) -> i32 {
        match self {
            Role::Administracion => 1,
            Role::Coordinacion => 2,
            Role::Lideracion => 3,
            Role::Desarrollo => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Administracion => "Administración",
            Role::Coordinacion => "Coordinación",
            Role::Lideracion => "Lideración",
            Role::Desarrollo => "Desarrollo",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::Administracion,
            Role::Coordinacion,
            Role::Lideracion,
            Role::Desarrollo,
        ]
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Role::Administracion),
            2 => Some(Role::Coordinacion),
            3 => Some(Role::Lideracion),
            4 => Some(Role::Desarrollo),
            _ => None,
        }
    }

    /// Label for a raw `id_rol`, falling back to [`UNKNOWN_LABEL`]
    pub fn label_for(id: i32) -> &'static str {
        Self::from_id(id).map_or(UNKNOWN_LABEL, |r| r.display_name())
    }
}

/// Operating subregions (`id_subregion`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subregion {
    SurAntioquia,
    NorteAntioquia,
    OccidenteCundinamarca,
    NorteCundinamarca,
    ValleAtlantico,
}

impl Subregion {
    pub fn id(&self) -> i32 {
        match self {
            Subregion::SurAntioquia => 1,
            Subregion::NorteAntioquia => 2,
            Subregion::OccidenteCundinamarca => 3,
            Subregion::NorteCundinamarca => 4,
            Subregion::ValleAtlantico => 5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Subregion::SurAntioquia => "Sur Antioquia",
            Subregion::NorteAntioquia => "Norte Antioquia",
            Subregion::OccidenteCundinamarca => "Occidente Cundinamarca",
            Subregion::NorteCundinamarca => "Norte Cundinamarca",
            Subregion::ValleAtlantico => "Valle Atlantico",
        }
    }

    pub fn all() -> Vec<Subregion> {
        vec![
            Subregion::SurAntioquia,
            Subregion::NorteAntioquia,
            Subregion::OccidenteCundinamarca,
            Subregion::NorteCundinamarca,
            Subregion::ValleAtlantico,
        ]
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::all().into_iter().find(|s| s.id() == id)
    }

    pub fn label_for(id: i32) -> &'static str {
        Self::from_id(id).map_or(UNKNOWN_LABEL, |s| s.display_name())
    }
}

/// Dashboard section a document is published under (`id_pagina`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentPage {
    Planeacion,
    Indicadores,
    Gestion,
    Facturacion,
}

impl DocumentPage {
    pub fn id(&self) -> i32 {
        match self {
            DocumentPage::Planeacion => 1,
            DocumentPage::Indicadores => 2,
            DocumentPage::Gestion => 3,
            DocumentPage::Facturacion => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentPage::Planeacion => "Planeación",
            DocumentPage::Indicadores => "Indicadores",
            DocumentPage::Gestion => "Gestión",
            DocumentPage::Facturacion => "Facturación",
        }
    }

    pub fn all() -> Vec<DocumentPage> {
        vec![
            DocumentPage::Planeacion,
            DocumentPage::Indicadores,
            DocumentPage::Gestion,
            DocumentPage::Facturacion,
        ]
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::all().into_iter().find(|p| p.id() == id)
    }

    pub fn label_for(id: i32) -> &'static str {
        Self::from_id(id).map_or(UNKNOWN_LABEL, |p| p.display_name())
    }
}

/// Client contract offered in the filter bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrato {
    #[serde(deserialize_with = "crate::charts::rows::de_id")]
    pub id: String,
    pub nombre: String,
}

/// Cost center (payroll center when scoped by contract)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centro {
    #[serde(deserialize_with = "crate::charts::rows::de_id")]
    pub id: String,
    pub nombre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::label_for(1), "Administración");
        assert_eq!(Role::label_for(4), "Desarrollo");
        assert_eq!(Role::label_for(9), UNKNOWN_LABEL);
        for role in Role::all() {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
    }

    #[test]
    fn test_subregion_and_page_labels() {
        assert_eq!(Subregion::label_for(3), "Occidente Cundinamarca");
        assert_eq!(Subregion::label_for(0), UNKNOWN_LABEL);
        assert_eq!(DocumentPage::label_for(2), "Indicadores");
        assert_eq!(DocumentPage::label_for(5), UNKNOWN_LABEL);
    }

    #[test]
    fn test_lookup_ids_accept_numbers_and_strings() {
        let contratos: Vec<Contrato> =
            serde_json::from_str(r#"[{"id": 7, "nombre": "Acme"}, {"id": "x-1", "nombre": "Beta"}]"#)
                .unwrap();
        assert_eq!(contratos[0].id, "7");
        assert_eq!(contratos[1].id, "x-1");
    }
}
