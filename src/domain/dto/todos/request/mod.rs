pub mod create_todo_request;
pub mod update_todo_request;

pub use create_todo_request::CreateTodoRequest;
pub use update_todo_request::UpdateTodoRequest;
