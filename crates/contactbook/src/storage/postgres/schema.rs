//! PostgreSQL schema definition and SQL query constants.

/// Creates the contacts table when it does not exist yet.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id SERIAL PRIMARY KEY,
    name TEXT,
    email TEXT
)
"#;

// `id` is SERIAL (int4) in existing deployments, so it is widened on read.

pub const INSERT_CONTACT: &str =
    "INSERT INTO contacts (name, email) VALUES ($1, $2) RETURNING id::BIGINT";

pub const SELECT_CONTACT_BY_ID: &str =
    "SELECT id::BIGINT, name, email FROM contacts WHERE id = $1";

pub const SELECT_ALL_CONTACTS: &str = "SELECT id::BIGINT, name, email FROM contacts ORDER BY id";

pub const UPDATE_CONTACT: &str = "UPDATE contacts SET name = $2, email = $3 WHERE id = $1";

pub const DELETE_CONTACT: &str = "DELETE FROM contacts WHERE id = $1";

pub const PING: &str = "SELECT 1";
