//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with creator and assignee references.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description, empty when the creator gave none.
        description -> Text,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creator identifier (immutable).
        assigned_by -> Uuid,
        /// Assignee identifier.
        assigned_to -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
