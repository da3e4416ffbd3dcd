//! Database repositories
//!
//! Provides the data access layer. Repositories return records as stored;
//! ownership checks and masking are service-layer concerns.

pub mod community;
pub mod journal;
pub mod meditation;
pub mod mood;
pub mod sleep;
pub mod therapy;
pub mod user;

pub use community::{CommentRecord, CreatePost, PostFilter, PostRecord, PostRepository};
pub use journal::{CreateJournalEntry, JournalEntryRecord, JournalRepository};
pub use meditation::{MeditationRecord, MeditationRepository};
pub use mood::{MoodEntryRecord, MoodRepository};
pub use sleep::{CreateSleepRecord, SleepRecord, SleepRepository, UpdateSleepRecord};
pub use therapy::{
    AppointmentRecord, AppointmentRepository, CreateAppointment, TherapistRecord,
    TherapistRepository, UpdateAppointment,
};
pub use user::{UserRecord, UserRepository};
