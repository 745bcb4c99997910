//! Record Model
//!
//! The six record kinds the dashboard consumes, the tables they live in,
//! and the `Collections` bundle that holds one load cycle's worth of rows.
//!
//! ## Tables
//!
//! | Record        | Table          |
//! |---------------|----------------|
//! | Participant   | `participants` |
//! | Match         | `matches`      |
//! | Meeting       | `meetings`     |
//! | Insight       | `insights`     |
//! | TopMatching   | `top_matching` |
//! | Anticipation  | `anticipation` |
//!
//! Records reference each other only by opaque id. Nothing here validates
//! those references.

mod collections;
mod table;
mod types;

pub use collections::{CollectionSizes, Collections};
pub use table::{Table, UnknownTable};
pub use types::{
    Anticipation, Insight, Match, Meeting, Participant, Record, RecordId, TopMatching,
};
