pub mod activities;

pub use activities::{seed_activities, Activity};
