// Handlers for / are registered in crates/trellis-server/src/routes.rs.
