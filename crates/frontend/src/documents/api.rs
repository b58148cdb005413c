use contracts::catalog::DocumentPage;
use contracts::documents::{Document, DocumentDto};
use serde::Serialize;

use crate::shared::http::{self, with_query, ApiError};

const DOCUMENTS_PATH: &str = "/api/documentos";

#[derive(Debug, Default, Serialize)]
struct DocumentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    id_pagina: Option<i32>,
}

pub fn documents_path(page: Option<DocumentPage>) -> Result<String, ApiError> {
    with_query(
        DOCUMENTS_PATH,
        &DocumentsQuery {
            id_pagina: page.map(|p| p.id()),
        },
    )
}

/// Fetch documents, optionally only those published under `page`
pub async fn fetch_documents(page: Option<DocumentPage>) -> Result<Vec<Document>, ApiError> {
    http::get_json(&documents_path(page)?).await
}

pub async fn create_document(dto: &DocumentDto) -> Result<(), ApiError> {
    http::post(DOCUMENTS_PATH, dto).await
}

pub async fn update_document(id: i64, dto: &DocumentDto) -> Result<(), ApiError> {
    http::put(&format!("{}/{}", DOCUMENTS_PATH, id), dto).await
}

pub async fn delete_document(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", DOCUMENTS_PATH, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_path() {
        assert_eq!(documents_path(None).unwrap(), "/api/documentos");
        assert_eq!(
            documents_path(Some(DocumentPage::Facturacion)).unwrap(),
            "/api/documentos?id_pagina=4"
        );
    }
}
