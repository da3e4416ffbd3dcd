//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories, the auth core, and upstream APIs.

pub mod chat;
pub mod community;
pub mod journal;
pub mod meditation;
pub mod mood;
pub mod sleep;
pub mod therapy;
pub mod tools;
pub mod user;

pub use chat::ChatService;
pub use community::CommunityService;
pub use journal::JournalService;
pub use meditation::MeditationService;
pub use mood::MoodService;
pub use sleep::SleepService;
pub use therapy::TherapyService;
pub use tools::ToolsService;
pub use user::UserService;
