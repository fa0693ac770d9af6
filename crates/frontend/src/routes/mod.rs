mod routes;

pub use routes::AppRoutes;
