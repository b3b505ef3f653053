use crate::domain::entities::user::User;
use crate::domain::error::DomainError;

pub trait UserStore: Send + Sync {
    fn add(&self, user: &User) -> Result<(), DomainError>;
    fn list(&self) -> Result<Vec<User>, DomainError>;
}
