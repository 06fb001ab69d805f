//! Text heuristics for intake replies
//!
//! Everything here is a pure function over a single message:
//! - `normalize`: normalization plus the greeting and skip filters
//! - `entities`: budget, timeline and name extraction
//! - `question`: question-vs-answer detection and statement salvage
//! - `suggestions`: exact matching against suggestion chip labels

pub mod entities;
pub mod normalize;
pub mod question;
pub mod suggestions;

pub use entities::{IntakeEntities, IntakeEntityExtractor};
pub use normalize::{is_greeting, is_skip, normalize_answer, strip_trailing_punctuation};
pub use question::QuestionDetector;
pub use suggestions::match_suggestion;
