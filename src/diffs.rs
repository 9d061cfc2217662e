pub mod index;
pub mod matching_blocks;
