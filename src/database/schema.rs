use sqlx::SqlitePool;

/// Full table set for one trip database. Applied with CREATE TABLE IF NOT
/// EXISTS so re-running the init tool against an existing file is harmless.
/// There is no migrations engine; schema changes are pushed by re-running
/// `init_db` (new tables/indexes only).
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS trips (
  id TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  code TEXT NOT NULL UNIQUE,
  start_date TEXT,
  end_date TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS travelers (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  name TEXT NOT NULL,
  color TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_travelers_trip ON travelers(trip_id);

CREATE TABLE IF NOT EXISTS stops (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  city TEXT NOT NULL,
  country TEXT,
  arrival_date TEXT,
  departure_date TEXT,
  position INTEGER NOT NULL DEFAULT 0,
  notes TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_stops_trip ON stops(trip_id);

CREATE TABLE IF NOT EXISTS matches (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  stop_id TEXT REFERENCES stops(id),
  home_team TEXT NOT NULL,
  away_team TEXT NOT NULL,
  venue TEXT,
  kickoff_at TEXT,
  stage TEXT,
  ticket_status TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_matches_trip ON matches(trip_id);

CREATE TABLE IF NOT EXISTS accommodations (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  stop_id TEXT NOT NULL REFERENCES stops(id),
  name TEXT NOT NULL,
  address TEXT,
  check_in TEXT,
  check_out TEXT,
  booking_ref TEXT,
  price_cents INTEGER,
  url TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_accommodations_trip ON accommodations(trip_id);

CREATE TABLE IF NOT EXISTS expenses (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  payer_id TEXT NOT NULL REFERENCES travelers(id),
  stop_id TEXT REFERENCES stops(id),
  description TEXT NOT NULL,
  amount_cents INTEGER NOT NULL,
  currency TEXT NOT NULL DEFAULT 'EUR',
  category TEXT,
  spent_at TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_expenses_trip ON expenses(trip_id);

CREATE TABLE IF NOT EXISTS expense_splits (
  id TEXT PRIMARY KEY,
  expense_id TEXT NOT NULL REFERENCES expenses(id),
  traveler_id TEXT NOT NULL REFERENCES travelers(id),
  share_cents INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_expense_splits_expense ON expense_splits(expense_id);

CREATE TABLE IF NOT EXISTS itinerary_items (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  stop_id TEXT REFERENCES stops(id),
  title TEXT NOT NULL,
  day TEXT NOT NULL,
  start_time TEXT,
  end_time TEXT,
  kind TEXT,
  notes TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_itinerary_items_trip ON itinerary_items(trip_id);

CREATE TABLE IF NOT EXISTS checklist_items (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  traveler_id TEXT REFERENCES travelers(id),
  label TEXT NOT NULL,
  category TEXT,
  done INTEGER NOT NULL DEFAULT 0,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_checklist_items_trip ON checklist_items(trip_id);

CREATE TABLE IF NOT EXISTS notes (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  stop_id TEXT REFERENCES stops(id),
  author_id TEXT REFERENCES travelers(id),
  title TEXT NOT NULL,
  body TEXT NOT NULL DEFAULT '',
  pinned INTEGER NOT NULL DEFAULT 0,
  created_at TEXT NOT NULL DEFAULT (datetime('now')),
  updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_notes_trip ON notes(trip_id);

CREATE TABLE IF NOT EXISTS photos (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  stop_id TEXT REFERENCES stops(id),
  uploader_id TEXT REFERENCES travelers(id),
  url TEXT NOT NULL,
  caption TEXT,
  taken_at TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_photos_trip ON photos(trip_id);

CREATE TABLE IF NOT EXISTS polls (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  question TEXT NOT NULL,
  multi INTEGER NOT NULL DEFAULT 0,
  closed INTEGER NOT NULL DEFAULT 0,
  created_by TEXT REFERENCES travelers(id),
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_polls_trip ON polls(trip_id);

CREATE TABLE IF NOT EXISTS poll_options (
  id TEXT PRIMARY KEY,
  poll_id TEXT NOT NULL REFERENCES polls(id),
  label TEXT NOT NULL,
  position INTEGER NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_poll_options_poll ON poll_options(poll_id);

CREATE TABLE IF NOT EXISTS poll_votes (
  id TEXT PRIMARY KEY,
  poll_id TEXT NOT NULL REFERENCES polls(id),
  option_id TEXT NOT NULL REFERENCES poll_options(id),
  traveler_id TEXT NOT NULL REFERENCES travelers(id),
  created_at TEXT NOT NULL DEFAULT (datetime('now')),
  UNIQUE(poll_id, option_id, traveler_id)
);
CREATE INDEX IF NOT EXISTS idx_poll_votes_poll ON poll_votes(poll_id);

CREATE TABLE IF NOT EXISTS predictions (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  traveler_id TEXT NOT NULL REFERENCES travelers(id),
  match_id TEXT NOT NULL REFERENCES matches(id),
  home_score INTEGER NOT NULL,
  away_score INTEGER NOT NULL,
  created_at TEXT NOT NULL DEFAULT (datetime('now')),
  updated_at TEXT NOT NULL DEFAULT (datetime('now')),
  UNIQUE(trip_id, traveler_id, match_id)
);

CREATE TABLE IF NOT EXISTS activity_log (
  id TEXT PRIMARY KEY,
  trip_id TEXT NOT NULL REFERENCES trips(id),
  traveler_id TEXT REFERENCES travelers(id),
  action TEXT NOT NULL,
  entity_type TEXT NOT NULL,
  entity_id TEXT,
  detail TEXT,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_activity_log_trip ON activity_log(trip_id);
"#;

pub async fn apply_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}
