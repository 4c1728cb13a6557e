//! Game sessions, word selection and result recording

pub mod results;
pub mod selection;
pub mod service;
pub mod session;

pub use results::{GameResult, NewResult, ResultSubmission};
pub use selection::{
    Clock, FixedClock, SelectionPolicy, SystemClock, WordPicker, daily_index, day_ordinal,
};
pub use service::{Ack, GameService, GuessRequest, GuessResponse, StartSessionResponse};
pub use session::{
    GameSession, GuessOutcome, GuessRecord, MAX_ATTEMPTS, SessionId, SessionStatus,
    SessionSummary,
};
