//! Database schema definitions

/// SQL to create the restaurants table
pub const CREATE_RESTAURANTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS restaurants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (name <> ''),
    address TEXT NOT NULL,
    zip TEXT NOT NULL,
    phone TEXT NOT NULL,
    website TEXT NOT NULL,
    email TEXT NOT NULL
)
"#;

/// SQL to create the reviews table
/// `createdat` holds the application-assigned timestamp in milliseconds
pub const CREATE_REVIEWS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    author TEXT NOT NULL CHECK (author <> ''),
    content TEXT NOT NULL,
    rating INTEGER NOT NULL,
    createdat INTEGER NOT NULL,
    restaurant_id INTEGER NOT NULL REFERENCES restaurants(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_reviews_restaurant ON reviews(restaurant_id)",
    "CREATE INDEX IF NOT EXISTS idx_reviews_createdat ON reviews(createdat)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_RESTAURANTS_TABLE, CREATE_REVIEWS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
