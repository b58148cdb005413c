pub mod visibility;

use serde::{Deserialize, Serialize};

pub use visibility::{visible_documents, VisibilityRule};

/// A link published under one dashboard section for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub nombre: String,
    pub url: String,
    pub id_rol: i32,
    pub id_pagina: i32,
    #[serde(default)]
    pub id_subregion: Option<i32>,
}

/// Body for both create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDto {
    pub nombre: String,
    pub url: String,
    pub id_rol: i32,
    pub id_pagina: i32,
    pub id_subregion: i32,
}

impl From<&Document> for DocumentDto {
    fn from(doc: &Document) -> Self {
        Self {
            nombre: doc.nombre.clone(),
            url: doc.url.clone(),
            id_rol: doc.id_rol,
            id_pagina: doc.id_pagina,
            id_subregion: doc.id_subregion.unwrap_or_default(),
        }
    }
}
