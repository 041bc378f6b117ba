// Handlers for /users are registered in crates/trellis-server/src/routes.rs.
