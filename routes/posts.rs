// Handlers for /posts are registered in crates/trellis-server/src/routes.rs.
