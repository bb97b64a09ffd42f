//! Short unique id generation for tasks and history entries

use uuid::Uuid;

/// Length of generated ids
pub const ID_LENGTH: usize = 9;

/// Generates short random ids, retrying on collision
pub struct IdGenerator;

impl IdGenerator {
    /// Return a fresh id for which `taken` is false
    pub fn next_id(taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = Self::random_id();
            if !taken(&id) {
                return id;
            }
            log::debug!("Generated id {} collides, retrying", id);
        }
    }

    /// A random lowercase hex id of [`ID_LENGTH`] characters
    pub fn random_id() -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LENGTH);
        id
    }
}
