pub mod navigation;
pub mod storage;
pub mod time;
pub mod token;
pub mod validation;
