//! Controllers
//!
//! Framework-free CRUD orchestration. Each action branches on its input and on
//! what the repository returns, and reports one discriminated outcome. The
//! HTTP handlers turn those outcomes into responses.

pub mod categories_api;
pub mod model_state;
pub mod products;
pub mod products_api;
pub mod results;

pub use categories_api::CategoriesApiController;
pub use model_state::ModelState;
pub use products::ProductsController;
pub use products_api::ProductsApiController;
pub use results::{ApiResult, CreatedAtActionResult, PageResult, RedirectToActionResult, ViewResult};
