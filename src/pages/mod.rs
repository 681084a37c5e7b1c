pub mod books;
pub mod home;
pub mod reviews;
