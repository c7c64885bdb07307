mod helpers;

mod assets;
mod home;
mod logout;
mod postgres;
