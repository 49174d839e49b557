use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::{NewWorkspace, Workspace};
use crate::infrastructure::database::schema::workspaces;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = workspaces)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkspaceModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = workspaces)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewWorkspaceModel {
    pub user_id: i64,
    pub title: String,
}

impl From<NewWorkspace> for NewWorkspaceModel {
    fn from(workspace: NewWorkspace) -> Self {
        Self {
            user_id: workspace.user_id,
            title: workspace.title,
        }
    }
}

impl From<WorkspaceModel> for Workspace {
    fn from(model: WorkspaceModel) -> Self {
        Workspace::restore(model.id, model.user_id, model.title, model.created_at)
    }
}
