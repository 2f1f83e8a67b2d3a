pub mod todo_response;

pub use todo_response::{TodoEnvelope, TodoListResponse, TodoResponse};
