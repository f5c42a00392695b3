pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
