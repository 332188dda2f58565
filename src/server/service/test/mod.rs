mod comment;
mod location;
mod room;
mod user;
