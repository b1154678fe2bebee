pub mod levenshtein;

pub use levenshtein::edit_distance;
