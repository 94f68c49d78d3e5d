pub mod dom;
pub mod loading;
