pub mod interests_routes;
