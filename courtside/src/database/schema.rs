//! SQL table definitions and statements.

/// Schema version written to the metadata table.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key-value store for database metadata such as the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Bookable slots. Instants are unix seconds.
pub const CREATE_SCHEDULES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS schedules (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        start_time INTEGER NOT NULL
    )";

/// Reservations. Money is stored as decimal text so no precision is lost.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        guest_id INTEGER NOT NULL,
        schedule_id INTEGER NOT NULL,
        schedule_start INTEGER NOT NULL,
        status TEXT NOT NULL
            CHECK (status IN ('READY_TO_PLAY', 'CANCELLED', 'RESCHEDULED')),
        value TEXT NOT NULL,
        refund_value TEXT NOT NULL,
        previous_reservation INTEGER REFERENCES reservations(id),
        created_at INTEGER NOT NULL
    )";

/// Speeds up listing by slot.
pub const CREATE_SCHEDULE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_schedule ON reservations(schedule_id)";

/// Speeds up listing by guest.
pub const CREATE_GUEST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(guest_id)";

pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (guest_id, schedule_id, schedule_start, status, value, refund_value,
     previous_reservation, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

pub const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET guest_id = ?, schedule_id = ?, schedule_start = ?, status = ?,
        value = ?, refund_value = ?, previous_reservation = ?
    WHERE id = ?
";

pub const SELECT_RESERVATION: &str = r"
    SELECT id, guest_id, schedule_id, schedule_start, status, value,
           refund_value, previous_reservation, created_at
    FROM reservations
    WHERE id = ?
";

pub const LIST_RESERVATIONS: &str = r"
    SELECT id, guest_id, schedule_id, schedule_start, status, value,
           refund_value, previous_reservation, created_at
    FROM reservations
    ORDER BY id
";

pub const INSERT_SCHEDULE: &str = "INSERT INTO schedules (start_time) VALUES (?)";

pub const SELECT_SCHEDULE: &str = "SELECT id, start_time FROM schedules WHERE id = ?";

pub const LIST_SCHEDULES: &str = "SELECT id, start_time FROM schedules ORDER BY start_time, id";
