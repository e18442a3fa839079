pub mod child;
pub mod comment;
pub mod guest;
pub mod parent;
pub mod post;
pub mod relationship;
pub mod user;
