/*
[INPUT]:  Session identity chosen at startup
[OUTPUT]: Actor value attributed to every mutation
[POS]:    Session context shared by both synchronizers
[UPDATE]: When the identity carries more than a user id
*/

use taskboard_adapter::EntityId;

/// Identity a mutation is attributed to. Fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Actor {
    user_id: EntityId,
}

impl Actor {
    pub fn new(user_id: impl Into<EntityId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &EntityId {
        &self.user_id
    }
}
