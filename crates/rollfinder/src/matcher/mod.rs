pub mod candidates;
pub mod name_matcher;

pub use candidates::{candidate_names, extract_candidate_names, CandidateNameSet};
pub use name_matcher::{match_names, prepare_targets, DocumentMatches, NameMatcher, TargetName};
