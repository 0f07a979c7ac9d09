pub mod http;

use async_trait::async_trait;
use std::fmt;

use crate::models::employee::Employee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Transport(String),
    Status { status: u16, body: String },
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "Remote call failed: {}", msg),
            StoreError::Status { status, body } => {
                write!(f, "Remote call failed with status {}: {}", status, body)
            }
            StoreError::Decode(msg) => write!(f, "Remote call returned an unreadable body: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    async fn create_employee(&self, candidate: &Employee) -> Result<Employee, StoreError>;
}
