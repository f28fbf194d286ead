//! Diesel schema for directory persistence.

diesel::table! {
    /// Display profiles for authenticated users.
    profiles (id) {
        /// User identifier.
        id -> Uuid,
        /// Optional full name.
        #[max_length = 255]
        full_name -> Nullable<Varchar>,
        /// Email address.
        #[max_length = 255]
        email -> Varchar,
        /// Join timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Explicit role grants; absence of any row implies the `user` role.
    user_roles (user_id, role) {
        /// Holder of the role.
        user_id -> Uuid,
        /// Granted role tag.
        #[max_length = 50]
        role -> Varchar,
    }
}
