pub mod episode;
pub mod episodes;
pub mod home;
pub mod init;
mod render;
