//! Input for adding an animal

/// What the user typed for a new animal. The id is assigned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddAnimalRequest {
    pub species: String,
    pub age: String,
    pub physical_description: String,
    pub personality_description: String,
    pub nickname: String,
}

impl AddAnimalRequest {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            ..Self::default()
        }
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    pub fn physical_description(mut self, description: impl Into<String>) -> Self {
        self.physical_description = description.into();
        self
    }

    pub fn personality_description(mut self, description: impl Into<String>) -> Self {
        self.personality_description = description.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }
}
