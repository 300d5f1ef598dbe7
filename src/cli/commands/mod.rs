pub mod project;
pub mod todo;


#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;
