//! Dashboard sections reachable from the sidebar.

mod documents_only;
mod facturacion;
mod home;
mod indicadores;
mod nomina;

pub use documents_only::{GestionPage, PlaneacionPage};
pub use facturacion::FacturacionPage;
pub use home::HomePage;
pub use indicadores::IndicadoresPage;
pub use nomina::NominaPage;
