//! `PostgreSQL` repository implementation for housekeeping task storage.

use super::{
    models::{HousekeepingTaskRow, NewHousekeepingTaskRow},
    schema::housekeeping_tasks,
};
use crate::housekeeping::{
    domain::{
        HotelId, HousekeepingTask, PersistedHousekeepingTaskData, RoomId, Shift, StaffId, TaskId,
        TaskStatus, TaskType,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by housekeeping adapters.
pub type HousekeepingPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed housekeeping task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: HousekeepingPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: HousekeepingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &HousekeepingTask) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let hotel_id = task.hotel_id();
        let room_id = task.room_id();
        let date = task.date();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(housekeeping_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_room_date_unique_violation(info.as_ref()) =>
                    {
                        TaskRepositoryError::DuplicateRoomDate {
                            hotel_id,
                            room_id,
                            date,
                        }
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_status(
        &self,
        id: TaskId,
        expected: TaskStatus,
        task: &HousekeepingTask,
    ) -> TaskRepositoryResult<()> {
        let status = task.status().as_str().to_owned();
        let completed_at = task.completed_at();
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            // Compare-and-set on the previous status; zero affected rows
            // means either a missing task or a lost race.
            let affected = diesel::update(
                housekeeping_tasks::table
                    .filter(housekeeping_tasks::id.eq(id.into_inner()))
                    .filter(housekeeping_tasks::status.eq(expected.as_str())),
            )
            .set((
                housekeeping_tasks::status.eq(status),
                housekeeping_tasks::completed_at.eq(completed_at),
                housekeeping_tasks::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if affected > 0 {
                return Ok(());
            }

            let exists = housekeeping_tasks::table
                .filter(housekeeping_tasks::id.eq(id.into_inner()))
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if exists == 0 {
                Err(TaskRepositoryError::NotFound(id))
            } else {
                Err(TaskRepositoryError::StaleStatus(id))
            }
        })
        .await
    }

    async fn update(&self, task: &HousekeepingTask) -> TaskRepositoryResult<()> {
        let id = task.id();
        let assigned_staff_id = task.assigned_staff_id().map(StaffId::into_inner);
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                housekeeping_tasks::table.filter(housekeeping_tasks::id.eq(id.into_inner())),
            )
            .set((
                housekeeping_tasks::assigned_staff_id.eq(assigned_staff_id),
                housekeeping_tasks::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<HousekeepingTask>> {
        self.run_blocking(move |connection| {
            let row = housekeeping_tasks::table
                .filter(housekeeping_tasks::id.eq(id.into_inner()))
                .select(HousekeepingTaskRow::as_select())
                .first::<HousekeepingTaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_hotel_and_date(
        &self,
        hotel_id: HotelId,
        date: NaiveDate,
        shift: Option<Shift>,
    ) -> TaskRepositoryResult<Vec<HousekeepingTask>> {
        self.run_blocking(move |connection| {
            let mut query = housekeeping_tasks::table
                .filter(housekeeping_tasks::hotel_id.eq(hotel_id.into_inner()))
                .filter(housekeeping_tasks::date.eq(date))
                .into_boxed();
            if let Some(shift) = shift {
                query = query.filter(housekeeping_tasks::shift.eq(shift.as_str()));
            }

            let rows = query
                .order(housekeeping_tasks::room_id.asc())
                .select(HousekeepingTaskRow::as_select())
                .load::<HousekeepingTaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_assignee(
        &self,
        staff_id: StaffId,
        date: NaiveDate,
        shift: Option<Shift>,
    ) -> TaskRepositoryResult<Vec<HousekeepingTask>> {
        self.run_blocking(move |connection| {
            let mut query = housekeeping_tasks::table
                .filter(housekeeping_tasks::assigned_staff_id.eq(staff_id.into_inner()))
                .filter(housekeeping_tasks::date.eq(date))
                .into_boxed();
            if let Some(shift) = shift {
                query = query.filter(housekeeping_tasks::shift.eq(shift.as_str()));
            }

            let rows = query
                .order(housekeeping_tasks::room_id.asc())
                .select(HousekeepingTaskRow::as_select())
                .load::<HousekeepingTaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &HousekeepingTask) -> NewHousekeepingTaskRow {
    NewHousekeepingTaskRow {
        id: task.id().into_inner(),
        hotel_id: task.hotel_id().into_inner(),
        room_id: task.room_id().into_inner(),
        date: task.date(),
        shift: task.shift().as_str().to_owned(),
        task_type: task.task_type().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        assigned_staff_id: task.assigned_staff_id().map(StaffId::into_inner),
        completed_at: task.completed_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: HousekeepingTaskRow) -> TaskRepositoryResult<HousekeepingTask> {
    let HousekeepingTaskRow {
        id,
        hotel_id,
        room_id,
        date,
        shift: persisted_shift,
        task_type: persisted_task_type,
        status: persisted_status,
        assigned_staff_id,
        completed_at,
        created_at,
        updated_at,
    } = row;

    let shift =
        Shift::try_from(persisted_shift.as_str()).map_err(TaskRepositoryError::persistence)?;
    let task_type = TaskType::try_from(persisted_task_type.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedHousekeepingTaskData {
        id: TaskId::from_uuid(id),
        hotel_id: HotelId::from_uuid(hotel_id),
        room_id: RoomId::from_uuid(room_id),
        date,
        shift,
        task_type,
        status,
        assigned_staff_id: assigned_staff_id.map(StaffId::from_uuid),
        completed_at,
        created_at,
        updated_at,
    };
    Ok(HousekeepingTask::from_persisted(data))
}

fn is_room_date_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_housekeeping_tasks_room_date_unique")
}
