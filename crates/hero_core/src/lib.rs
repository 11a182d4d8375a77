//! hero_core: the financial archetype engine.
//!
//! Pure scoring logic: a quiz answer record goes in, an archetype key
//! comes out. Display data for each archetype lives in `hero_data`;
//! rendering lives in `render_vector`. Nothing here touches I/O.

pub mod answers;
pub mod archetype;
pub mod scoring;

pub use answers::QuizAnswers;
pub use archetype::ArchetypeKey;
pub use scoring::score;
