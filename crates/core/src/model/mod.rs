mod ids;
mod tier;
mod word;

pub use ids::{ParseIdError, WordId};
pub use tier::{ParseTierError, Tier};
pub use word::{Word, WordError};
