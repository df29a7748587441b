//! Table definitions of the food donation database.
//!
//! Existing databases are used as they are; these statements only run when
//! a table is missing. Foreign keys restrict deletes of referenced rows.

pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS providers (
    Provider_ID INTEGER PRIMARY KEY AUTOINCREMENT,
    Name        TEXT NOT NULL,
    Type        TEXT NOT NULL,
    Address     TEXT NOT NULL,
    City        TEXT NOT NULL,
    Contact     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS receivers (
    Receiver_ID INTEGER PRIMARY KEY AUTOINCREMENT,
    Name        TEXT NOT NULL,
    Type        TEXT NOT NULL,
    Contact     TEXT NOT NULL,
    City        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS food (
    Food_ID       INTEGER PRIMARY KEY AUTOINCREMENT,
    Food_Name     TEXT NOT NULL,
    Quantity      INTEGER NOT NULL CHECK (Quantity >= 1),
    Expiry_Date   TEXT NOT NULL,
    Provider_ID   INTEGER NOT NULL REFERENCES providers (Provider_ID) ON DELETE RESTRICT,
    Provider_Type TEXT NOT NULL,
    Location      TEXT NOT NULL,
    Food_Type     TEXT NOT NULL,
    Meal_Type     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS claims (
    Claim_ID    INTEGER PRIMARY KEY,
    Food_ID     INTEGER NOT NULL REFERENCES food (Food_ID) ON DELETE RESTRICT,
    Receiver_ID INTEGER NOT NULL REFERENCES receivers (Receiver_ID) ON DELETE RESTRICT,
    Status      TEXT NOT NULL CHECK (Status IN ('Pending', 'Completed', 'Canceled')),
    Timestamp   TEXT NOT NULL
);
";
