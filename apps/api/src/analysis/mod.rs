//! Resume analysis: chunking, semantic similarity, skills, structure,
//! experience, scoring and suggestions, composed by [`pipeline::Analyzer`].

pub mod chunker;
pub mod experience;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod scoring;
pub mod similarity;
pub mod skills;
pub mod structure;
pub mod structured;
pub mod suggestions;
