//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer and are not
//! part of any external API. A presentation layer (form, CLI, etc.) is
//! responsible for mapping user input into these internal types.

pub mod profiles {
    use crate::domain::models::Profile;

    /// Input for creating a new profile.
    #[derive(Debug, Clone)]
    pub struct CreateProfileCommand {
        pub name: String,
    }

    /// Input for renaming an existing profile.
    #[derive(Debug, Clone)]
    pub struct RenameProfileCommand {
        pub profile_id: String,
        pub name: String,
    }

    /// Input for deleting a profile and all of its reminders.
    #[derive(Debug, Clone)]
    pub struct DeleteProfileCommand {
        pub profile_id: String,
    }

    /// Result of creating a profile.
    #[derive(Debug, Clone)]
    pub struct CreateProfileResult {
        pub profile: Profile,
    }

    /// Result of renaming a profile.
    #[derive(Debug, Clone)]
    pub struct RenameProfileResult {
        pub profile: Profile,
    }

    /// Result of deleting a profile.
    #[derive(Debug, Clone)]
    pub struct DeleteProfileResult {
        pub success_message: String,
    }

    /// Result of listing all profiles.
    #[derive(Debug, Clone)]
    pub struct ListProfilesResult {
        pub profiles: Vec<Profile>,
    }
}

pub mod reminders {
    use crate::domain::models::{Reminder, Schedule};

    /// Input for creating a new reminder under a profile.
    #[derive(Debug, Clone)]
    pub struct CreateReminderCommand {
        pub profile_id: String,
        pub medicine_name: String,
        pub dosage: Option<String>,
        pub schedule: Schedule,
        pub times: Vec<String>,
    }

    /// Input for replacing the editable fields of an existing reminder.
    #[derive(Debug, Clone)]
    pub struct UpdateReminderCommand {
        pub profile_id: String,
        pub reminder_id: String,
        pub medicine_name: String,
        pub dosage: Option<String>,
        pub schedule: Schedule,
        pub times: Vec<String>,
    }

    /// Input for deleting a reminder.
    #[derive(Debug, Clone)]
    pub struct DeleteReminderCommand {
        pub profile_id: String,
        pub reminder_id: String,
    }

    /// Result of creating a reminder.
    #[derive(Debug, Clone)]
    pub struct CreateReminderResult {
        pub reminder: Reminder,
    }

    /// Result of updating a reminder.
    #[derive(Debug, Clone)]
    pub struct UpdateReminderResult {
        pub reminder: Reminder,
    }

    /// Result of deleting a reminder.
    #[derive(Debug, Clone)]
    pub struct DeleteReminderResult {
        pub success_message: String,
    }
}
