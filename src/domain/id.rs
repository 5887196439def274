use uuid::Uuid;

/// Source of fresh identifiers for users and todos.
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> Uuid;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
