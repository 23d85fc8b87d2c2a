use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for FitnessLevel {
    fn default() -> Self {
        FitnessLevel::Beginner
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Units {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub units: Units,
    pub theme: Theme,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            units: Units::Metric,
            theme: Theme::Light,
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub fitness_level: FitnessLevel,
    pub preferences: Preferences,
}

impl UserProfile {
    /// Neutral profile used when a partial update arrives before any
    /// profile exists.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            email: String::new(),
            age: None,
            weight_kg: None,
            height_cm: None,
            fitness_level: FitnessLevel::default(),
            preferences: Preferences::default(),
        }
    }

    /// Merge the provided fields over this profile.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = Some(weight_kg);
        }
        if let Some(height_cm) = update.height_cm {
            self.height_cm = Some(height_cm);
        }
        if let Some(level) = update.fitness_level {
            self.fitness_level = level;
        }
        if let Some(preferences) = update.preferences {
            self.preferences = preferences;
        }
    }
}

/// Partial profile update; absent fields keep their current values.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub fitness_level: Option<FitnessLevel>,
    pub preferences: Option<Preferences>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut profile = UserProfile::empty();
        profile.name = "Ada".to_string();
        profile.age = Some(30);

        profile.apply(ProfileUpdate {
            email: Some("ada@example.com".to_string()),
            fitness_level: Some(FitnessLevel::Advanced),
            ..Default::default()
        });

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.age, Some(30));
        assert_eq!(profile.fitness_level, FitnessLevel::Advanced);
    }
}
