// Handlers for /api/v1/health are registered in crates/trellis-server/src/routes.rs.
