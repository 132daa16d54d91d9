// src/constants.rs

// --- Difficulty Adaptation Thresholds ---
pub const MIN_ATTEMPTS: u32 = 3; // Attempts before a tier's ratio is trusted
pub const STRUGGLING_THRESHOLD: f64 = 0.6; // Strictly below flags struggling
pub const EXCELLING_THRESHOLD: f64 = 0.9; // Strictly above flags excelling
