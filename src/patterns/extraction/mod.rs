//! Unanchored patterns that pull raw candidates out of free text.
//!
//! Matching here is purely syntactic. Each pattern is deliberately looser
//! than the validator of its category in `super`, so a candidate found here
//! may still be rejected.

pub mod email;
pub mod hashtag;
pub mod phonenumber;
pub mod time;
pub mod url;
