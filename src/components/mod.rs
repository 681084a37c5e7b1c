pub mod book_form;
pub mod book_list;
pub mod field_message;
pub mod navbar;
pub mod review_form;
pub mod review_list;
pub mod skeleton;
pub mod star_rating;
pub mod toaster;
