pub mod admin;
pub mod deploys;
pub mod gate;
pub mod push;
