mod tracker;

pub use tracker::RevealTracker;
