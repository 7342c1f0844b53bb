pub mod headshot;
pub mod rotations;
