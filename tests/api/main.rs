mod home;
mod register;
mod success;
