pub mod chunking;
pub mod entities;
pub mod repositories;
pub mod similarity;
