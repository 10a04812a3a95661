mod user;
mod forms;
mod task;
mod details;

pub use user::{User, NewUser};
pub use forms::{
    RegisterForm, LoginForm, CreateTaskForm,
    RegisterResponse, LoginResponse, CompleteTaskResponse, MessageResponse,
};
pub use task::{Task, NewTask, Category};
pub use details::{TaskDetails, Appointment};
