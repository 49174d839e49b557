use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::entities::{NewWorkspace, Workspace};
use crate::domain::repositories::{
    WorkspaceRepository, workspace_repository::WorkspaceRepositoryError,
};
use crate::infrastructure::database::models::{NewWorkspaceModel, WorkspaceModel};
use crate::infrastructure::database::schema::{documents, workspaces};
use crate::infrastructure::database::{DatabaseError, DbPool, with_connection};

pub struct PostgresWorkspaceRepository {
    pool: DbPool,
}

impl PostgresWorkspaceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<DatabaseError> for WorkspaceRepositoryError {
    fn from(error: DatabaseError) -> Self {
        WorkspaceRepositoryError::DatabaseError(error.to_string())
    }
}

impl From<DieselError> for WorkspaceRepositoryError {
    fn from(error: DieselError) -> Self {
        match &error {
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                WorkspaceRepositoryError::ValidationError(info.message().to_string())
            }
            _ => WorkspaceRepositoryError::DatabaseError(error.to_string()),
        }
    }
}

#[async_trait]
impl WorkspaceRepository for PostgresWorkspaceRepository {
    async fn create(&self, workspace: NewWorkspace) -> Result<Workspace, WorkspaceRepositoryError> {
        workspace
            .validate()
            .map_err(WorkspaceRepositoryError::ValidationError)?;

        let new_workspace = NewWorkspaceModel::from(workspace);

        let model = with_connection(&self.pool, move |conn| {
            diesel::insert_into(workspaces::table)
                .values(&new_workspace)
                .returning(WorkspaceModel::as_returning())
                .get_result(conn)
                .map_err(WorkspaceRepositoryError::from)
        })
        .await?;

        Ok(Workspace::from(model))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Workspace>, WorkspaceRepositoryError> {
        let model = with_connection(&self.pool, move |conn| {
            workspaces::table
                .find(id)
                .select(WorkspaceModel::as_select())
                .first(conn)
                .optional()
                .map_err(WorkspaceRepositoryError::from)
        })
        .await?;

        Ok(model.map(Workspace::from))
    }

    async fn find_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Workspace>, WorkspaceRepositoryError> {
        let models = with_connection(&self.pool, move |conn| {
            workspaces::table
                .filter(workspaces::user_id.eq(user_id))
                .order(workspaces::id.asc())
                .select(WorkspaceModel::as_select())
                .load(conn)
                .map_err(WorkspaceRepositoryError::from)
        })
        .await?;

        Ok(models.into_iter().map(Workspace::from).collect())
    }

    /// Detaches every document and removes the row in one transaction. A
    /// missing row rolls the detach back and yields `NotFound`.
    /// `InMemoryDatabase::delete` mirrors this under a single lock.
    async fn delete(&self, id: i64) -> Result<usize, WorkspaceRepositoryError> {
        with_connection(&self.pool, move |conn| {
            conn.transaction::<usize, WorkspaceRepositoryError, _>(|conn| {
                let attached = documents::table.filter(documents::workspace_id.eq(id));
                let detached = diesel::update(attached)
                    .set(documents::workspace_id.eq(None::<i64>))
                    .execute(conn)?;

                let deleted = diesel::delete(workspaces::table.find(id)).execute(conn)?;
                if deleted == 0 {
                    // rolls back the detach above
                    return Err(WorkspaceRepositoryError::NotFound(id));
                }

                Ok(detached)
            })
        })
        .await
    }
}
