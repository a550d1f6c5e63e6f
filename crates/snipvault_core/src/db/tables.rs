//! redb table definitions shared by storage modules.

use redb::TableDefinition;

/// File name for the redb database within the configured DB directory.
pub const REDB_FILE_NAME: &str = "data.redb";

/// Canonical snippet rows (`Snippet`, bincode-encoded) keyed by id.
pub const SNIPPETS: TableDefinition<i64, &[u8]> = TableDefinition::new("snippets");
/// Monotonic id sequences keyed by sequence name.
pub const SEQUENCES: TableDefinition<&str, i64> = TableDefinition::new("sequences");
