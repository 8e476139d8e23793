//! Project tools

mod create_project;
mod delete_project;
mod list_projects;
mod read_project;

pub use create_project::CreateProjectTool;
pub use delete_project::DeleteProjectTool;
pub use list_projects::ListProjectsTool;
pub use read_project::ReadProjectTool;

pub(crate) use read_project::project_view;
