//! Diesel table definitions for the PostgreSQL schema.
//!
//! Keep in step with `backend/migrations`.

diesel::table! {
    /// Hotel catalogue.
    hotels (id) {
        /// Store-assigned identifier (UUID v4 text).
        id -> Varchar,
        name -> Varchar,
        rating -> Float8,
        location -> Varchar,
        price_per_night -> Int4,
        stars -> Int4,
    }
}

diesel::table! {
    /// Accounts allowed to call protected routes.
    users (username) {
        username -> Varchar,
        /// `<salt-hex>$<digest-hex>` salted SHA-256.
        password_hash -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(hotels, users);
