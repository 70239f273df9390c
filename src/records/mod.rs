//! Canonical record shapes for the legislative-records backend.
//!
//! The backend's schema has drifted across revisions: fields were
//! renamed (`debate_title`→`topic`, `content`→`text`,
//! `answer_by`→`answers_by`) and multi-valued fields arrive as either a
//! list or a single comma-joined string. Everything in this module
//! exists to absorb that drift at the wire boundary: records are
//! normalized on ingress and the rest of the crate only ever sees the
//! canonical shapes.

pub mod collections;
pub mod debate;
pub mod form;
pub mod multi;

pub use collections::{Karywali, Kramank, LegislativeSession, Member, Resolution};
pub use debate::{Debate, MergeCandidate};
pub use form::{DebateForm, from_editable, to_editable};
