pub mod about;
pub mod cv;
pub mod home;
pub mod project;
pub mod studio;
