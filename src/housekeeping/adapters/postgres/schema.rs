//! Diesel schema for housekeeping task persistence.

diesel::table! {
    /// Housekeeping task records, one per room per date.
    ///
    /// A unique index `idx_housekeeping_tasks_room_date_unique` over
    /// `(hotel_id, room_id, date)` backs the duplicate-generation guard.
    housekeeping_tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning hotel.
        hotel_id -> Uuid,
        /// Target room.
        room_id -> Uuid,
        /// Calendar date the task applies to.
        date -> Date,
        /// Scheduled shift.
        #[max_length = 20]
        shift -> Varchar,
        /// Cleaning kind.
        #[max_length = 50]
        task_type -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional assigned staff member.
        assigned_staff_id -> Nullable<Uuid>,
        /// Completion timestamp, set on entering `completed`.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
