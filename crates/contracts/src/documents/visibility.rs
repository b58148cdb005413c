//! Which published documents a signed-in user may see on each page.

use super::Document;
use crate::catalog::{DocumentPage, Role};
use crate::system::auth::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRule {
    /// Documents for administrators are hidden from everybody else
    AdminOnlyHidden,
    /// Administration and development see everything, coordination sees
    /// everything except administration documents, leadership sees only
    /// leadership documents
    RoleMatrix,
}

impl VisibilityRule {
    pub fn for_page(page: DocumentPage) -> Self {
        match page {
            DocumentPage::Indicadores => VisibilityRule::RoleMatrix,
            DocumentPage::Planeacion | DocumentPage::Gestion | DocumentPage::Facturacion => {
                VisibilityRule::AdminOnlyHidden
            }
        }
    }

    pub fn allows(&self, viewer: Option<&UserProfile>, doc: &Document) -> bool {
        let viewer_role = viewer.and_then(|v| v.role());
        match self {
            VisibilityRule::AdminOnlyHidden => {
                viewer_role == Some(Role::Administracion) || doc.id_rol != Role::Administracion.id()
            }
            VisibilityRule::RoleMatrix => match viewer_role {
                Some(Role::Administracion) | Some(Role::Desarrollo) => true,
                Some(Role::Coordinacion) => doc.id_rol != Role::Administracion.id(),
                Some(Role::Lideracion) => doc.id_rol == Role::Lideracion.id(),
                None => false,
            },
        }
    }
}

pub fn visible_documents(
    docs: &[Document],
    rule: VisibilityRule,
    viewer: Option<&UserProfile>,
) -> Vec<Document> {
    docs.iter()
        .filter(|d| rule.allows(viewer, d))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: i64, id_rol: i32) -> Document {
        Document {
            id,
            nombre: format!("doc-{id}"),
            url: format!("https://example.com/{id}"),
            id_rol,
            id_pagina: 2,
            id_subregion: Some(1),
        }
    }

    fn viewer(id_rol: i32) -> UserProfile {
        UserProfile {
            id_rol: Some(id_rol),
            ..UserProfile::default()
        }
    }

    fn ids(docs: Vec<Document>) -> Vec<i64> {
        docs.into_iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_admin_only_hidden() {
        let docs = vec![doc(1, 1), doc(2, 2), doc(3, 3)];
        let rule = VisibilityRule::AdminOnlyHidden;
        assert_eq!(ids(visible_documents(&docs, rule, Some(&viewer(1)))), vec![1, 2, 3]);
        assert_eq!(ids(visible_documents(&docs, rule, Some(&viewer(3)))), vec![2, 3]);
        assert_eq!(ids(visible_documents(&docs, rule, None)), vec![2, 3]);
    }

    #[test]
    fn test_role_matrix() {
        let docs = vec![doc(1, 1), doc(2, 2), doc(3, 3), doc(4, 4)];
        let rule = VisibilityRule::RoleMatrix;
        assert_eq!(ids(visible_documents(&docs, rule, Some(&viewer(4)))), vec![1, 2, 3, 4]);
        assert_eq!(ids(visible_documents(&docs, rule, Some(&viewer(2)))), vec![2, 3, 4]);
        assert_eq!(ids(visible_documents(&docs, rule, Some(&viewer(3)))), vec![3]);
        assert!(visible_documents(&docs, rule, None).is_empty());
    }

    #[test]
    fn test_rule_per_page() {
        assert_eq!(
            VisibilityRule::for_page(DocumentPage::Indicadores),
            VisibilityRule::RoleMatrix
        );
        assert_eq!(
            VisibilityRule::for_page(DocumentPage::Facturacion),
            VisibilityRule::AdminOnlyHidden
        );
    }
}
